use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the accounts router.
///
/// `POST /users/` is a legacy alias kept for backward compatibility with the
/// original registration endpoint; it behaves identically to
/// `POST /users/register`.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/users/", post(handlers::register))
        .route("/users/register", post(handlers::register))
        .route("/users/login", post(handlers::login))
        .route("/users/{id}", get(handlers::get_account))
        .layer(Extension(service))
}
