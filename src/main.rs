use actix_web::{App, HttpServer, middleware::Logger, web};
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use chrono::Local;  // timestamp in log lines

use raffle_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    middlewares::create_cors,
    routes,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // 活动状态只在进程内保存, 每次启动都是开放登记
    let event_state = EventStateMachine::new();

    // 创建服务
    let student_service = StudentService::new(pool.clone(), event_state.clone());
    let raffle_item_service = RaffleItemService::new(pool.clone());
    let raffle_service = RaffleService::new(pool.clone());
    let log_service = LogService::new(pool.clone());
    let system_service =
        SystemService::new(pool.clone(), event_state, raffle_service.draw_lock());

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors(&cors_config))
            .app_data(web::Data::new(student_service.clone()))
            .app_data(web::Data::new(raffle_item_service.clone()))
            .app_data(web::Data::new(raffle_service.clone()))
            .app_data(web::Data::new(log_service.clone()))
            .app_data(web::Data::new(system_service.clone()))
            .configure(swagger_config)
            .configure(routes)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
