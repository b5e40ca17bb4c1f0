use crate::entities::{raffle_item_entity as items, raffle_log_entity as logs};
use crate::error::AppResult;
use crate::models::RaffleLogResponse;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

#[derive(Clone)]
pub struct LogService {
    pool: DatabaseConnection,
}

impl LogService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 中奖记录 (最新在前), 附带奖品名称与图片
    pub async fn list_logs(&self) -> AppResult<Vec<RaffleLogResponse>> {
        let rows = logs::Entity::find()
            .find_also_related(items::Entity)
            .order_by_desc(logs::Column::Timestamp)
            .order_by_desc(logs::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
