use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::postgres::PgPool;

use tasknest::config::Config;
use tasknest::error::AppError;
use tasknest::routes;
use tasknest::store::{TaskStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Lazy pool: no connection is made until the first query, and a store
    // failure surfaces as a 500 on the request that hit it. No retries.
    let pool = PgPool::connect_lazy(&config.database_url).expect("DATABASE_URL must be valid");

    let user_store = UserStore::new(pool.clone());
    let task_store = TaskStore::new(pool);

    log::info!("Starting tasknest server at {}", config.server_url());

    let bind_addr = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.cors_origin)
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Missing fields and malformed JSON bodies get the same 400 JSON
        // error shape as every other failure.
        let json_cfg = web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into());

        // A path id that does not parse as a task id behaves like a task
        // that does not exist.
        let path_cfg = web::PathConfig::default()
            .error_handler(|_err, _req| AppError::NotFound("Task not found".into()).into());

        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(user_store.clone()))
            .app_data(web::Data::new(task_store.clone()))
            .app_data(json_cfg)
            .app_data(path_cfg)
            .wrap(cors)
            .wrap(Logger::default())
            .configure(routes::config(config.jwt_secret.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}
