use crate::models::*;
use crate::services::StudentService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/students",
    tag = "student",
    responses(
        (status = 200, description = "获取学生列表成功", body = [StudentResponse]),
        (status = 500, description = "服务器错误")
    )
)]
pub async fn list_students(student_service: web::Data<StudentService>) -> Result<HttpResponse> {
    match student_service.list_all().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Get all students successfully.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "student",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "添加学生成功", body = StudentResponse),
        (status = 400, description = "参数错误或学号已存在")
    )
)]
/// 管理员直接添加学生, 不受登记阶段限制
pub async fn create_student(
    student_service: web::Data<StudentService>,
    request: web::Json<CreateStudentRequest>,
) -> Result<HttpResponse> {
    match student_service.create_student(request.into_inner()).await {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success(
            student,
            "Student created successfully.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn student_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/students")
            .route(web::get().to(list_students))
            .route(web::post().to(create_student)),
    );
}
