pub mod config;
pub mod database;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod swagger;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};

use actix_web::web;

/// 注册全部业务路由 (不含 swagger)
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(handlers::registration_config)
        .configure(handlers::student_config)
        .configure(handlers::raffle_item_config)
        .configure(handlers::raffle_config)
        .configure(handlers::logs_config)
        .configure(handlers::system_config);
}
