use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use tracing::{error, info};

use api_problem::ProblemResponse;

use crate::api::rest::dto::{CalculationDto, CreateCalculationReq, UpdateCalculationReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;

/// Create a new calculation
#[utoipa::path(
    post,
    path = "/calculations/",
    request_body = CreateCalculationReq,
    responses(
        (status = 201, description = "Calculation created", body = CalculationDto),
        (status = 422, description = "Malformed or unknown operation", body = api_problem::Problem)
    ),
    tag = "calculations",
    operation_id = "createCalculation"
)]
pub async fn create_calculation(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req_body): Json<CreateCalculationReq>,
) -> Result<(StatusCode, Json<CalculationDto>), ProblemResponse> {
    info!("Creating calculation: {:?}", req_body);

    match svc.create(req_body.into()).await {
        Ok(calc) => Ok((StatusCode::CREATED, Json(CalculationDto::from(calc)))),
        Err(e) => {
            error!("Failed to create calculation: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// List all calculations
#[utoipa::path(
    get,
    path = "/calculations/",
    responses(
        (status = 200, description = "All calculations", body = [CalculationDto])
    ),
    tag = "calculations",
    operation_id = "listCalculations"
)]
pub async fn list_calculations(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    uri: Uri,
) -> Result<Json<Vec<CalculationDto>>, ProblemResponse> {
    info!("Listing calculations");

    match svc.list().await {
        Ok(calcs) => Ok(Json(calcs.into_iter().map(CalculationDto::from).collect())),
        Err(e) => {
            error!("Failed to list calculations: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Get a specific calculation by ID
#[utoipa::path(
    get,
    path = "/calculations/{id}",
    params(("id" = i32, Path, description = "Calculation id")),
    responses(
        (status = 200, description = "Calculation found", body = CalculationDto),
        (status = 404, description = "Calculation not found", body = api_problem::Problem)
    ),
    tag = "calculations",
    operation_id = "getCalculation"
)]
pub async fn get_calculation(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<CalculationDto>, ProblemResponse> {
    info!("Getting calculation with id: {}", id);

    match svc.get(id).await {
        Ok(calc) => Ok(Json(CalculationDto::from(calc))),
        Err(e) => {
            error!("Failed to get calculation {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Partially update an existing calculation
#[utoipa::path(
    put,
    path = "/calculations/{id}",
    params(("id" = i32, Path, description = "Calculation id")),
    request_body = UpdateCalculationReq,
    responses(
        (status = 200, description = "Updated calculation", body = CalculationDto),
        (status = 404, description = "Calculation not found", body = api_problem::Problem),
        (status = 422, description = "Malformed or unknown operation", body = api_problem::Problem)
    ),
    tag = "calculations",
    operation_id = "updateCalculation"
)]
pub async fn update_calculation(
    uri: Uri,
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(id): Path<i32>,
    Json(req_body): Json<UpdateCalculationReq>,
) -> Result<Json<CalculationDto>, ProblemResponse> {
    info!("Updating calculation {} with: {:?}", id, req_body);

    match svc.update(id, req_body.into()).await {
        Ok(calc) => Ok(Json(CalculationDto::from(calc))),
        Err(e) => {
            error!("Failed to update calculation {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Delete a calculation by ID
#[utoipa::path(
    delete,
    path = "/calculations/{id}",
    params(("id" = i32, Path, description = "Calculation id")),
    responses(
        (status = 204, description = "Calculation deleted"),
        (status = 404, description = "Calculation not found", body = api_problem::Problem)
    ),
    tag = "calculations",
    operation_id = "deleteCalculation"
)]
pub async fn delete_calculation(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting calculation: {}", id);

    match svc.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete calculation {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
