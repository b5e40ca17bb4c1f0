use crate::models::*;
use crate::services::StudentService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/regis",
    tag = "registration",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "登记成功", body = StudentResponse),
        (status = 400, description = "学号格式错误或已登记"),
        (status = 403, description = "登记已关闭")
    )
)]
/// 学生使用 8 位学号登记
pub async fn register(
    student_service: web::Data<StudentService>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    match student_service.register(&request.std_id).await {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success(
            student,
            "Student registered successfully.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn registration_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/regis", web::post().to(register));
}
