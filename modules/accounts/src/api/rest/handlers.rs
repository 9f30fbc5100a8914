use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use tracing::{error, info};

use api_problem::ProblemResponse;

use crate::api::rest::dto::{AccountDto, LoginReq, RegisterReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

/// Register a new account (also serves the legacy `POST /users/` alias)
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "Account created", body = AccountDto),
        (status = 400, description = "Username or email already taken", body = api_problem::Problem),
        (status = 422, description = "Validation error", body = api_problem::Problem)
    ),
    tag = "accounts",
    operation_id = "registerAccount"
)]
pub async fn register(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req_body): Json<RegisterReq>,
) -> Result<(StatusCode, Json<AccountDto>), ProblemResponse> {
    info!("Registering account: {}", req_body.username);

    match svc.register(req_body.into()).await {
        Ok(account) => Ok((StatusCode::CREATED, Json(AccountDto::from(account)))),
        Err(e) => {
            error!("Failed to register account: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Verify credentials and return the account record
#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Login success", body = AccountDto),
        (status = 401, description = "Invalid credentials", body = api_problem::Problem)
    ),
    tag = "accounts",
    operation_id = "login"
)]
pub async fn login(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req_body): Json<LoginReq>,
) -> Result<Json<AccountDto>, ProblemResponse> {
    info!("Login attempt for: {}", req_body.username);

    match svc.authenticate(req_body.into()).await {
        Ok(account) => Ok(Json(AccountDto::from(account))),
        Err(e) => {
            info!("Login rejected: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Get a specific account by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account found", body = AccountDto),
        (status = 404, description = "Account not found", body = api_problem::Problem)
    ),
    tag = "accounts",
    operation_id = "getAccount"
)]
pub async fn get_account(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<AccountDto>, ProblemResponse> {
    info!("Getting account with id: {}", id);

    match svc.get_account(id).await {
        Ok(account) => Ok(Json(AccountDto::from(account))),
        Err(e) => {
            error!("Failed to get account {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
