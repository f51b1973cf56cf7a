use crate::{
    auth::{generate_token, hash_password, verify_password},
    config::Config,
    error::AppError,
    models::{LoginRequest, RegisterRequest},
    store::UserStore,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Register a new user.
///
/// Hashes the password and persists the account. Duplicate usernames come
/// back as 400.
#[post("/register")]
pub async fn register(
    users: web::Data<UserStore>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let password_hash = hash_password(&register_data.password)?;
    users.create(&register_data.username, &password_hash).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully"
    })))
}

/// Log in and receive a bearer token.
///
/// An unknown username and a wrong password produce the same 400 "Invalid
/// credentials"; the response never reveals which check failed.
#[post("/login")]
pub async fn login(
    users: web::Data<UserStore>,
    config: web::Data<Config>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let user = users
        .find_by_username(&login_data.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&login_data.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = generate_token(user.id, &config.jwt_secret)?;

    Ok(HttpResponse::Ok().json(json!({
        "token": token
    })))
}
