use actix_web::{test, web, App};
use pretty_assertions::assert_eq;
use serde_json::json;
use sqlx::PgPool;

use tasknest::config::Config;
use tasknest::error::AppError;
use tasknest::routes;
use tasknest::store::{TaskStore, UserStore};

const TEST_SECRET: &str = "integration-test-secret";

fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/tasknest_test".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        server_port: 3001,
        server_host: "127.0.0.1".to_string(),
        cors_origin: "http://localhost:3000".to_string(),
    }
}

/// Pool that never connects. Validation and auth failures short-circuit
/// before any query runs, so these tests need no database.
fn lazy_pool() -> PgPool {
    PgPool::connect_lazy("postgres://localhost/tasknest_test").unwrap()
}

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .app_data(web::Data::new(UserStore::new($pool.clone())))
                .app_data(web::Data::new(TaskStore::new($pool.clone())))
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    AppError::Validation(err.to_string()).into()
                }))
                .app_data(
                    web::PathConfig::default().error_handler(|_err, _req| {
                        AppError::NotFound("Task not found".into()).into()
                    }),
                )
                .configure(routes::config(TEST_SECRET.to_string())),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_register_missing_field_is_400_json() {
    let pool = lazy_pool();
    let app = test_app!(pool);

    // No password field at all: rejected at deserialization, same JSON shape.
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "username": "alice" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn test_register_empty_field_is_400() {
    let pool = lazy_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({ "username": "", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_login_missing_fields_is_400() {
    let pool = lazy_pool();
    let app = test_app!(pool);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "username": "alice", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// Requires a running Postgres with the migrations applied and DATABASE_URL
// set; run with `cargo test -- --ignored`.
#[ignore]
#[actix_rt::test]
async fn test_register_and_login_flow() {
    dotenv::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test DB");

    let _ = sqlx::query("DELETE FROM users WHERE username = $1")
        .bind("integration_user")
        .execute(&pool)
        .await;

    let app = test_app!(pool);

    // Register
    let register_payload = json!({
        "username": "integration_user",
        "password": "Password123!"
    });
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&register_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    // Registering the same username again fails with 400.
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(&register_payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Login with the right password returns a token.
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "username": "integration_user",
            "password": "Password123!"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token in login response");
    assert!(!token.is_empty());

    // Wrong password: same 400 and same error string as an unknown username,
    // so responses never reveal whether the account exists.
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "username": "integration_user",
            "password": "wrong"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let wrong_pw_body: serde_json::Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "username": "no_such_user_anywhere",
            "password": "wrong"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let no_user_body: serde_json::Value = test::read_body_json(resp).await;

    assert_eq!(wrong_pw_body, no_user_body);
}
