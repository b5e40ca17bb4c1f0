use crate::entities::{
    raffle_item_entity as items, raffle_log_entity as logs, student_entity as students,
};
use crate::error::AppResult;
use crate::services::{EventState, EventStateMachine};
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct SystemService {
    pool: DatabaseConnection,
    event_state: EventStateMachine,
    /// 与 RaffleService 共用, 重置不会和抽奖交错
    draw_lock: Arc<Mutex<()>>,
}

impl SystemService {
    pub fn new(
        pool: DatabaseConnection,
        event_state: EventStateMachine,
        draw_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            pool,
            event_state,
            draw_lock,
        }
    }

    pub fn state(&self) -> EventState {
        self.event_state.current()
    }

    /// 开始抽奖, 关闭登记
    pub fn start(&self) -> AppResult<EventState> {
        self.event_state.start()
    }

    pub fn end(&self) -> EventState {
        self.event_state.end()
    }

    /// 清空学生、奖品与中奖记录, 重新开放登记
    ///
    /// 数据清理失败时活动状态保持不变。
    pub async fn reset(&self) -> AppResult<EventState> {
        let _guard = self.draw_lock.lock().await;
        let txn = self.pool.begin().await?;
        let removed_logs = logs::Entity::delete_many().exec(&txn).await?;
        let removed_items = items::Entity::delete_many().exec(&txn).await?;
        let removed_students = students::Entity::delete_many().exec(&txn).await?;
        txn.commit().await?;

        log::info!(
            "System reset: removed {} students, {} items, {} logs",
            removed_students.rows_affected,
            removed_items.rows_affected,
            removed_logs.rows_affected
        );
        Ok(self.event_state.reset())
    }
}
