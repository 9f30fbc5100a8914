use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::openapi;

/// Assemble the full application router: both resource modules plus the
/// liveness probe and the OpenAPI document.
pub fn build(db: &DatabaseConnection) -> Router {
    let accounts_service = Arc::new(accounts::domain::service::Service::new(
        Arc::new(
            accounts::infra::storage::sea_orm_repo::SeaOrmAccountsRepository::new(db.clone()),
        ),
        Arc::new(accounts::infra::security::Argon2Hasher),
    ));

    let calculations_service = Arc::new(calculations::domain::service::Service::new(Arc::new(
        calculations::infra::storage::sea_orm_repo::SeaOrmCalculationsRepository::new(db.clone()),
    )));

    Router::new()
        .merge(accounts::api::rest::routes::router(accounts_service))
        .merge(calculations::api::rest::routes::router(calculations_service))
        .route("/healthz", get(healthz))
        .route("/openapi.json", get(openapi::serve))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        accounts::infra::storage::migrations::Migrator::up(&db, None)
            .await
            .unwrap();
        calculations::infra::storage::migrations::Migrator::up(&db, None)
            .await
            .unwrap();
        build(&db)
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let app = test_app().await;
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_document_lists_schemas() {
        let app = test_app().await;
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["components"]["schemas"]["AccountDto"].is_object());
        assert!(doc["components"]["schemas"]["CalculationDto"].is_object());
        assert!(doc["paths"]["/users/register"]["post"].is_object());
        assert!(doc["paths"]["/users/login"]["post"].is_object());
        assert!(doc["paths"]["/users/{id}"]["get"].is_object());
        assert!(doc["paths"]["/calculations/"]["post"].is_object());
        assert!(doc["paths"]["/calculations/{id}"]["delete"].is_object());
    }

    // Both module migrators share the seaql_migrations bookkeeping table,
    // so their migration names must not collide or the second set is
    // skipped as already applied.
    #[tokio::test]
    async fn both_migrators_apply_on_shared_database() {
        use sea_orm::{ConnectionTrait, DbBackend, Statement};

        let db = Database::connect("sqlite::memory:").await.unwrap();
        accounts::infra::storage::migrations::Migrator::up(&db, None)
            .await
            .unwrap();
        calculations::infra::storage::migrations::Migrator::up(&db, None)
            .await
            .unwrap();

        let rows = db
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table'",
            ))
            .await
            .unwrap();
        let tables: Vec<String> = rows
            .iter()
            .map(|r| r.try_get_by_index(0).unwrap())
            .collect();
        assert!(tables.iter().any(|t| t == "users"), "tables: {tables:?}");
        assert!(
            tables.iter().any(|t| t == "calculations"),
            "tables: {tables:?}"
        );
    }

    #[tokio::test]
    async fn merged_router_serves_both_modules() {
        let app = test_app().await;

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/calculations/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/users/404")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
