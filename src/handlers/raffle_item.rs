use crate::models::*;
use crate::services::RaffleItemService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/raffle_items",
    tag = "raffle_item",
    responses(
        (status = 200, description = "获取奖品列表成功", body = [RaffleItemResponse]),
        (status = 500, description = "服务器错误")
    )
)]
pub async fn list_items(item_service: web::Data<RaffleItemService>) -> Result<HttpResponse> {
    match item_service.list_items().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Get all raffle items successfully.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/raffle_items",
    tag = "raffle_item",
    request_body = CreateRaffleItemRequest,
    responses(
        (status = 201, description = "创建奖品成功", body = RaffleItemResponse),
        (status = 400, description = "参数错误"),
        (status = 500, description = "服务器错误")
    )
)]
pub async fn create_item(
    item_service: web::Data<RaffleItemService>,
    request: web::Json<CreateRaffleItemRequest>,
) -> Result<HttpResponse> {
    match item_service.create_item(request.into_inner()).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(
            item,
            "Raffle item created successfully.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/raffle_items/{id}",
    tag = "raffle_item",
    params(("id" = i32, Path, description = "奖品ID")),
    request_body = UpdateRaffleItemRequest,
    responses(
        (status = 200, description = "更新奖品成功", body = RaffleItemResponse),
        (status = 404, description = "奖品不存在"),
        (status = 500, description = "服务器错误")
    )
)]
pub async fn update_item(
    item_service: web::Data<RaffleItemService>,
    path: web::Path<i32>,
    request: web::Json<UpdateRaffleItemRequest>,
) -> Result<HttpResponse> {
    match item_service
        .update_item(path.into_inner(), request.into_inner())
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            item,
            "Raffle item updated successfully.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/raffle_items/{id}",
    tag = "raffle_item",
    params(("id" = i32, Path, description = "奖品ID")),
    responses(
        (status = 200, description = "删除奖品成功"),
        (status = 404, description = "奖品不存在"),
        (status = 500, description = "服务器错误")
    )
)]
pub async fn delete_item(
    item_service: web::Data<RaffleItemService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match item_service.delete_item(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message_only(
            "Raffle item deleted successfully.",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/raffle_items/import",
    tag = "raffle_item",
    request_body(content = String, content_type = "text/csv", description = "name,quantity,imagePath 每行一个奖品, 表头可选"),
    responses(
        (status = 200, description = "导入完成 (包含成功/失败数量)", body = ImportSummary),
        (status = 500, description = "服务器错误")
    )
)]
/// 批量导入奖品, 单行失败只计数
pub async fn import_items(
    item_service: web::Data<RaffleItemService>,
    body: String,
) -> Result<HttpResponse> {
    match item_service.import_items(&body).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            format!(
                "Import finished. {} succeeded, {} failed.",
                summary.success_count, summary.fail_count
            ),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn raffle_item_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/raffle_items")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/import", web::post().to(import_items))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}
