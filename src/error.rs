//!
//! # Error handling
//!
//! Defines `AppError`, the single error type used across the application.
//! Every failure a handler can hit is one of these variants, and each variant
//! maps to exactly one HTTP status with a JSON `{"error": "..."}` body via
//! `actix_web::error::ResponseError`. `From` impls for `sqlx::Error` and
//! `bcrypt::BcryptError` let store and hashing code use the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// All failure modes the service can report to a client.
#[derive(Debug)]
pub enum AppError {
    /// A required field is missing or empty (HTTP 400).
    Validation(String),
    /// Registration attempted with a username that already exists (HTTP 400).
    DuplicateUser,
    /// Login with an unknown username or wrong password (HTTP 400).
    /// One variant for both cases so responses never reveal which it was.
    InvalidCredentials,
    /// No bearer token was presented on a protected route (HTTP 401).
    AuthenticationRequired,
    /// A bearer token was presented but is malformed, forged, or expired (HTTP 403).
    Forbidden,
    /// The task does not exist, or exists but belongs to another user (HTTP 404).
    /// A single variant on purpose: distinguishing the two would leak existence.
    NotFound(String),
    /// Unexpected server-side failure (HTTP 500).
    Internal(String),
    /// Failure from the database layer (HTTP 500).
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::DuplicateUser => write!(f, "Username already taken"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::AuthenticationRequired => write!(f, "Authentication required"),
            AppError::Forbidden => write!(f, "Invalid or expired token"),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal server error: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::DuplicateUser => HttpResponse::BadRequest().json(json!({
                "error": "Username already taken"
            })),
            AppError::InvalidCredentials => HttpResponse::BadRequest().json(json!({
                "error": "Invalid credentials"
            })),
            AppError::AuthenticationRequired => HttpResponse::Unauthorized().json(json!({
                "error": "Authentication required"
            })),
            AppError::Forbidden => HttpResponse::Forbidden().json(json!({
                "error": "Invalid or expired token"
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            // Internal details stay in the logs; clients get a generic message.
            AppError::Internal(_) | AppError::Database(_) => {
                log::error!("{}", self);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        AppError::Database(error.to_string())
    }
}

/// Validation failures from request payloads become 400s with the
/// validator-generated field messages.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
