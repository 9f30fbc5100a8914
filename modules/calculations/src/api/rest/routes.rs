use std::sync::Arc;

use axum::{routing::get, routing::post, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the calculations router.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/calculations/",
            post(handlers::create_calculation).get(handlers::list_calculations),
        )
        .route(
            "/calculations/{id}",
            get(handlers::get_calculation)
                .put(handlers::update_calculation)
                .delete(handlers::delete_calculation),
        )
        .layer(Extension(service))
}
