use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token. Tokens are stateless and cannot be revoked,
/// so expiry is the only thing that ends a session.
const TOKEN_TTL_HOURS: i64 = 1;

/// Claims encoded within an issued JWT.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Issues a signed token for `user_id`, expiring one hour from now.
///
/// The signing secret is passed in by the caller (it lives in `Config`);
/// nothing here touches the environment.
pub fn generate_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies a token's signature and expiry, returning its claims.
///
/// Malformed, forged, and expired tokens all come back as a single
/// `Forbidden` so callers cannot tell them apart. No check is made that the
/// embedded user still exists; the token stands on its own until expiry.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Forbidden)
}
