pub mod auth;
pub mod health;
pub mod tasks;

use crate::auth::AuthMiddleware;
use actix_web::web;

/// Wires the full route surface.
///
/// `/register`, `/login`, and `/health` are open; everything under `/tasks`
/// sits behind the bearer-token middleware, which needs the signing secret
/// at construction time.
pub fn config(jwt_secret: String) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(health::health)
            .service(auth::register)
            .service(auth::login)
            .service(
                web::scope("/tasks")
                    .wrap(AuthMiddleware::new(jwt_secret))
                    .service(tasks::get_tasks)
                    .service(tasks::create_task)
                    .service(tasks::update_task)
                    .service(tasks::delete_task),
            );
    }
}
