use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// The authenticated caller's user id, pulled from request extensions.
///
/// `AuthMiddleware` verifies the bearer token and stores the id before any
/// handler runs, so on protected routes this extractor always succeeds. The
/// miss case only fires if a handler using it is mounted outside the
/// middleware, and answers 401 as the safe default.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUserId(pub i32);

impl FromRequest for AuthenticatedUserId {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<i32>().copied() {
            Some(user_id) => ready(Ok(AuthenticatedUserId(user_id))),
            None => ready(Err(AppError::AuthenticationRequired.into())),
        }
    }
}
