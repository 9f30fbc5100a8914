use api_problem::{from_parts, ProblemResponse};
use axum::http::StatusCode;

use crate::domain::error::DomainError;

/// Map domain error to RFC 9457 ProblemResponse.
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::NotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "Calculation not found",
            format!("Calculation with id {} was not found", id),
            instance,
        ),
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}
