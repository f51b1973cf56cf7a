#![doc = "The `tasknest` library crate."]
#![doc = ""]
#![doc = "A minimal authenticated task-tracking backend: users register and log in,"]
#![doc = "then create, list, update, and delete their own tasks. The library holds"]
#![doc = "the domain models, the auth boundary (password hashing, token issuance and"]
#![doc = "verification, middleware), the stores, and the route handlers; the binary"]
#![doc = "(`main.rs`) reads configuration and runs the server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
