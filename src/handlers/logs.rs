use crate::models::*;
use crate::services::LogService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/logs",
    tag = "raffle",
    responses(
        (status = 200, description = "获取中奖记录成功 (最新在前)", body = [RaffleLogResponse]),
        (status = 500, description = "服务器错误")
    )
)]
pub async fn list_logs(log_service: web::Data<LogService>) -> Result<HttpResponse> {
    match log_service.list_logs().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Get all raffle logs successfully.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn logs_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/logs", web::get().to(list_logs));
}
