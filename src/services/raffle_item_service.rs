use crate::entities::raffle_item_entity as items;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::parse_item_rows;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct RaffleItemService {
    pool: DatabaseConnection,
}

impl RaffleItemService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 获取全部奖品 (包括数量为 0 的)
    pub async fn list_items(&self) -> AppResult<Vec<RaffleItemResponse>> {
        let list = items::Entity::find()
            .order_by_asc(items::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 创建奖品, quantity 可以为 0
    pub async fn create_item(&self, request: CreateRaffleItemRequest) -> AppResult<RaffleItemResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError("Item name is required.".to_string()));
        }
        validate_quantity(request.quantity)?;

        let now = Utc::now();
        let model = items::ActiveModel {
            name: Set(name.to_string()),
            quantity: Set(request.quantity),
            item_pic: Set(request.item_pic.filter(|p| !p.trim().is_empty())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// 部分更新奖品
    pub async fn update_item(
        &self,
        id: i32,
        request: UpdateRaffleItemRequest,
    ) -> AppResult<RaffleItemResponse> {
        if let Some(quantity) = request.quantity {
            validate_quantity(quantity)?;
        }
        if request.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::ValidationError(
                "Item name cannot be empty.".to_string(),
            ));
        }

        let mut model = items::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Raffle item not found".to_string()))?
            .into_active_model();
        if let Some(name) = request.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(quantity) = request.quantity {
            model.quantity = Set(quantity);
        }
        if let Some(item_pic) = request.item_pic {
            model.item_pic = Set(Some(item_pic).filter(|p| !p.trim().is_empty()));
        }
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.pool).await?;
        Ok(updated.into())
    }

    pub async fn delete_item(&self, id: i32) -> AppResult<()> {
        let result = items::Entity::delete_by_id(id).exec(&self.pool).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Raffle item not found".to_string()));
        }
        Ok(())
    }

    /// 从逗号分隔文本批量导入奖品
    ///
    /// 每一行独立成功或失败, 失败只计数不终止; 整体总是返回统计结果。
    pub async fn import_items(&self, text: &str) -> AppResult<ImportSummary> {
        let mut summary = ImportSummary::default();

        for row in parse_item_rows(text) {
            let row = match row {
                Ok(row) => row,
                Err(reason) => {
                    log::warn!("Skipping import row: {reason}");
                    summary.fail_count += 1;
                    continue;
                }
            };

            let request = CreateRaffleItemRequest {
                name: row.name,
                quantity: row.quantity,
                item_pic: row.item_pic,
            };
            match self.create_item(request).await {
                Ok(_) => summary.success_count += 1,
                Err(e) => {
                    log::error!("Failed to import raffle item: {e}");
                    summary.fail_count += 1;
                }
            }
        }

        log::info!(
            "Raffle item import finished: {} succeeded, {} failed",
            summary.success_count,
            summary.fail_count
        );
        Ok(summary)
    }
}

fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity < 0 {
        return Err(AppError::ValidationError(
            "Quantity must be greater than or equal to 0.".to_string(),
        ));
    }
    Ok(())
}

/// 还有库存的奖品 (抽奖快照)
pub async fn find_available<C: ConnectionTrait>(db: &C) -> Result<Vec<items::Model>, DbErr> {
    items::Entity::find()
        .filter(items::Column::Quantity.gt(0))
        .order_by_asc(items::Column::Id)
        .all(db)
        .await
}

/// 原子扣减 1 个库存 (update where quantity > 0)
///
/// 返回 false 表示库存已为 0 或奖品不存在, 数量不会变成负数。
pub async fn decrement<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, DbErr> {
    let result = items::Entity::update_many()
        .col_expr(items::Column::Quantity, Expr::col(items::Column::Quantity).sub(1))
        .col_expr(items::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(items::Column::Id.eq(id))
        .filter(items::Column::Quantity.gt(0))
        .exec(db)
        .await?;
    Ok(result.rows_affected == 1)
}
