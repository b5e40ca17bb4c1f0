#![allow(dead_code)]

use actix_web::web;
use raffle_backend::config::DatabaseConfig;
use raffle_backend::database::{DbPool, create_pool, run_migrations};
use raffle_backend::entities::{raffle_item_entity, raffle_log_entity, student_entity};
use raffle_backend::models::{CreateRaffleItemRequest, RaffleItemResponse};
use raffle_backend::routes;
use raffle_backend::services::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// 每个测试独立的内存数据库与服务
pub struct TestContext {
    pub pool: DbPool,
    pub event_state: EventStateMachine,
    pub students: StudentService,
    pub items: RaffleItemService,
    pub raffle: RaffleService,
    pub logs: LogService,
    pub system: SystemService,
}

impl TestContext {
    pub async fn new() -> Self {
        let pool = create_pool(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
        .expect("failed to open sqlite memory database");
        run_migrations(&pool).await.expect("failed to run migrations");

        let event_state = EventStateMachine::new();
        let raffle = RaffleService::new(pool.clone());
        Self {
            students: StudentService::new(pool.clone(), event_state.clone()),
            items: RaffleItemService::new(pool.clone()),
            system: SystemService::new(pool.clone(), event_state.clone(), raffle.draw_lock()),
            raffle,
            logs: LogService::new(pool.clone()),
            event_state,
            pool,
        }
    }

    /// 注册服务与全部路由, 用于 actix 测试 App
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.students.clone()))
            .app_data(web::Data::new(self.items.clone()))
            .app_data(web::Data::new(self.raffle.clone()))
            .app_data(web::Data::new(self.logs.clone()))
            .app_data(web::Data::new(self.system.clone()))
            .configure(routes);
    }

    /// 登记 start..start+count 的连续学号
    pub async fn register_range(&self, start: u32, count: u32) {
        for offset in 0..count {
            self.students
                .register(&format!("{:08}", start + offset))
                .await
                .expect("registration should succeed");
        }
    }

    pub async fn create_item(&self, name: &str, quantity: i32) -> RaffleItemResponse {
        self.items
            .create_item(CreateRaffleItemRequest {
                name: name.to_string(),
                quantity,
                item_pic: None,
            })
            .await
            .expect("item creation should succeed")
    }

    pub async fn log_count(&self) -> u64 {
        raffle_log_entity::Entity::find()
            .count(&self.pool)
            .await
            .unwrap()
    }

    pub async fn student_rows(&self) -> Vec<student_entity::Model> {
        student_entity::Entity::find().all(&self.pool).await.unwrap()
    }

    pub async fn item_row(&self, id: i32) -> Option<raffle_item_entity::Model> {
        raffle_item_entity::Entity::find_by_id(id)
            .one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn total_quantity(&self) -> i64 {
        raffle_item_entity::Entity::find()
            .all(&self.pool)
            .await
            .unwrap()
            .iter()
            .map(|item| item.quantity as i64)
            .sum()
    }
}
