//! Integration-style tests for the accounts module.
//!
//! Key points:
//! - Each test runs on a fresh in-memory SQLite DB and applies migrations.
//! - Service is constructed with a SeaORM-backed repository (port + adapter).
//! - REST layer is exercised via the real Axum router.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use accounts::{
    api::rest::dto::{AccountDto, LoginReq, RegisterReq},
    domain::{
        model::{Credentials, NewAccount},
        service::Service,
    },
    infra::{
        security::Argon2Hasher,
        storage::{migrations::Migrator, sea_orm_repo::SeaOrmAccountsRepository},
    },
};

/// Create a fresh test database for each test (in-memory SQLite) and run migrations.
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

async fn create_test_service() -> Arc<Service> {
    let db = create_test_db().await;
    let repo = SeaOrmAccountsRepository::new(db);
    Arc::new(Service::new(Arc::new(repo), Arc::new(Argon2Hasher)))
}

async fn create_test_router() -> Router {
    let service = create_test_service().await;
    accounts::api::rest::routes::router(service)
}

fn new_account(username: &str, email: &str) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        email: email.to_string(),
        password: "correct-horse".to_string(),
    }
}

fn json_post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_domain_service_register_and_get() -> Result<()> {
    let service = create_test_service().await;

    let created = service.register(new_account("alice", "alice@example.com")).await?;
    assert_eq!(created.username, "alice");
    assert_eq!(created.email, "alice@example.com");
    assert_ne!(created.password_hash, "correct-horse");

    let fetched = service.get_account(created.id).await?;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.username, created.username);

    Ok(())
}

#[tokio::test]
async fn test_domain_service_validation() -> Result<()> {
    let service = create_test_service().await;

    // username too short
    let result = service.register(new_account("ab", "ab@example.com")).await;
    assert!(result.is_err());

    // invalid email
    let result = service.register(new_account("carol", "not-an-email")).await;
    assert!(result.is_err());

    // short password
    let result = service
        .register(NewAccount {
            username: "carol".into(),
            email: "carol@example.com".into(),
            password: "short".into(),
        })
        .await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_same_password_hashes_differently() -> Result<()> {
    let service = create_test_service().await;

    let a = service.register(new_account("alice", "alice@example.com")).await?;
    let b = service.register(new_account("bob", "bob@example.com")).await?;
    assert_ne!(a.password_hash, b.password_hash);
    assert_ne!(a.password_hash, "correct-horse");

    Ok(())
}

#[tokio::test]
async fn test_authenticate_success_and_failure() -> Result<()> {
    let service = create_test_service().await;
    service.register(new_account("alice", "alice@example.com")).await?;

    let ok = service
        .authenticate(Credentials {
            username: "alice".into(),
            password: "correct-horse".into(),
        })
        .await?;
    assert_eq!(ok.username, "alice");

    let wrong_password = service
        .authenticate(Credentials {
            username: "alice".into(),
            password: "wrong".into(),
        })
        .await;
    assert!(wrong_password.is_err());

    let unknown_user = service
        .authenticate(Credentials {
            username: "nobody".into(),
            password: "correct-horse".into(),
        })
        .await;
    assert!(unknown_user.is_err());

    Ok(())
}

#[tokio::test]
async fn test_rest_register_returns_201_without_hash() -> Result<()> {
    let router = create_test_router().await;

    let req = RegisterReq {
        username: "rest".into(),
        email: "rest@example.com".into(),
        password: "longenough".into(),
    };
    let response = router
        .oneshot(json_post("/users/register", serde_json::to_string(&req)?))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let account: AccountDto = serde_json::from_slice(&body)?;
    assert_eq!(account.username, "rest");

    let raw: serde_json::Value = serde_json::from_slice(&body)?;
    assert!(raw.get("password_hash").is_none());
    assert!(raw.get("password").is_none());

    Ok(())
}

#[tokio::test]
async fn test_rest_legacy_alias_behaves_like_register() -> Result<()> {
    let router = create_test_router().await;

    let req = RegisterReq {
        username: "legacy".into(),
        email: "legacy@example.com".into(),
        password: "longenough".into(),
    };
    let response = router
        .oneshot(json_post("/users/", serde_json::to_string(&req)?))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn test_rest_duplicate_registration_is_400_and_first_row_survives() -> Result<()> {
    let router = create_test_router().await;

    let req = RegisterReq {
        username: "dup".into(),
        email: "dup@example.com".into(),
        password: "longenough".into(),
    };
    let first = router
        .clone()
        .oneshot(json_post("/users/register", serde_json::to_string(&req)?))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let body = axum::body::to_bytes(first.into_body(), usize::MAX).await?;
    let created: AccountDto = serde_json::from_slice(&body)?;

    // Same username, different email: unique constraint fires all the same.
    let again = RegisterReq {
        username: "dup".into(),
        email: "other@example.com".into(),
        password: "longenough".into(),
    };
    let second = router
        .clone()
        .oneshot(json_post("/users/register", serde_json::to_string(&again)?))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(second.into_body(), usize::MAX).await?;
    let problem: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(problem["detail"], "username or email already exists");

    // First registration remains intact.
    let fetch = Request::builder()
        .method("GET")
        .uri(format!("/users/{}", created.id))
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(fetch).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let fetched: AccountDto = serde_json::from_slice(&body)?;
    assert_eq!(fetched.email, "dup@example.com");

    Ok(())
}

#[tokio::test]
async fn test_rest_login_failures_are_indistinguishable() -> Result<()> {
    let router = create_test_router().await;

    let req = RegisterReq {
        username: "alice".into(),
        email: "alice@example.com".into(),
        password: "longenough".into(),
    };
    let response = router
        .clone()
        .oneshot(json_post("/users/register", serde_json::to_string(&req)?))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let wrong_password = LoginReq {
        username: "alice".into(),
        password: "not-the-password".into(),
    };
    let resp_a = router
        .clone()
        .oneshot(json_post("/users/login", serde_json::to_string(&wrong_password)?))
        .await
        .unwrap();

    let unknown_user = LoginReq {
        username: "mallory".into(),
        password: "whatever-it-is".into(),
    };
    let resp_b = router
        .clone()
        .oneshot(json_post("/users/login", serde_json::to_string(&unknown_user)?))
        .await
        .unwrap();

    assert_eq!(resp_a.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp_b.status(), StatusCode::UNAUTHORIZED);

    // Identical problem bodies: nothing reveals whether the username exists.
    let body_a = axum::body::to_bytes(resp_a.into_body(), usize::MAX).await?;
    let body_b = axum::body::to_bytes(resp_b.into_body(), usize::MAX).await?;
    assert_eq!(body_a, body_b);

    Ok(())
}

#[tokio::test]
async fn test_rest_login_success_returns_account() -> Result<()> {
    let router = create_test_router().await;

    let req = RegisterReq {
        username: "alice".into(),
        email: "alice@example.com".into(),
        password: "longenough".into(),
    };
    router
        .clone()
        .oneshot(json_post("/users/register", serde_json::to_string(&req)?))
        .await
        .unwrap();

    let login = LoginReq {
        username: "alice".into(),
        password: "longenough".into(),
    };
    let response = router
        .oneshot(json_post("/users/login", serde_json::to_string(&login)?))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let account: AccountDto = serde_json::from_slice(&body)?;
    assert_eq!(account.username, "alice");

    Ok(())
}

#[tokio::test]
async fn test_rest_get_unknown_account_is_404() -> Result<()> {
    let router = create_test_router().await;

    let request = Request::builder()
        .method("GET")
        .uri("/users/9999")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_rest_validation_error_is_422() -> Result<()> {
    let router = create_test_router().await;

    let req = RegisterReq {
        username: "ab".into(),
        email: "ab@example.com".into(),
        password: "longenough".into(),
    };
    let response = router
        .oneshot(json_post("/users/register", serde_json::to_string(&req)?))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let problem: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(problem["errors"][0]["pointer"], "/username");

    Ok(())
}
