use crate::models::*;
use crate::services::SystemService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/system/state",
    tag = "system",
    responses((status = 200, description = "当前活动阶段", body = SystemStateResponse))
)]
pub async fn get_state(system_service: web::Data<SystemService>) -> Result<HttpResponse> {
    let state = system_service.state();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SystemStateResponse { state },
        "Get system state successfully.",
    )))
}

#[utoipa::path(
    post,
    path = "/system/start",
    tag = "system",
    responses(
        (status = 200, description = "抽奖开始, 登记关闭", body = SystemStateResponse),
        (status = 409, description = "抽奖已结束, 需先重置")
    )
)]
pub async fn start(system_service: web::Data<SystemService>) -> Result<HttpResponse> {
    match system_service.start() {
        Ok(state) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SystemStateResponse { state },
            "Raffle started. Registration closed.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/system/end",
    tag = "system",
    responses((status = 200, description = "抽奖结束", body = SystemStateResponse))
)]
pub async fn end(system_service: web::Data<SystemService>) -> Result<HttpResponse> {
    let state = system_service.end();
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SystemStateResponse { state },
        "Raffle ended.",
    )))
}

#[utoipa::path(
    post,
    path = "/system/reset",
    tag = "system",
    responses(
        (status = 200, description = "清空数据并重新开放登记", body = SystemStateResponse),
        (status = 500, description = "清空数据失败")
    )
)]
/// 清空学生、奖品与中奖记录, 状态恢复为 REGISTRATION_OPEN
pub async fn reset(system_service: web::Data<SystemService>) -> Result<HttpResponse> {
    match system_service.reset().await {
        Ok(state) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SystemStateResponse { state },
            "System reset. Database cleared. Registration open.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn system_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/system")
            .route("/state", web::get().to(get_state))
            .route("/start", web::post().to(start))
            .route("/end", web::post().to(end))
            .route("/reset", web::post().to(reset)),
    );
}
