use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A registered user. Created once at registration, never mutated or
/// deleted. The password hash never leaves the server.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /register`.
///
/// Validation is presence-only: both fields must be there and non-empty.
/// No format or strength rules are applied.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Payload for `POST /login`. Same presence-only rules as registration.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_presence_validation() {
        let valid = RegisterRequest {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_username = RegisterRequest {
            username: "".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(empty_username.validate().is_err());

        let empty_password = RegisterRequest {
            username: "alice".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_no_format_rules_beyond_presence() {
        // Usernames and passwords are opaque: anything non-empty passes.
        let odd = LoginRequest {
            username: "a b c!@#".to_string(),
            password: "x".to_string(),
        };
        assert!(odd.validate().is_ok());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}
