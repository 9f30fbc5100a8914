use api_problem::{from_parts, FieldError, Problem, ProblemResponse};
use axum::http::StatusCode;

use crate::domain::error::DomainError;

/// Map domain error to RFC 9457 ProblemResponse.
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::NotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "Account not found",
            format!("Account with id {} was not found", id),
            instance,
        ),
        // Clients expect 400 for duplicates, not 409.
        DomainError::Conflict => from_parts(
            StatusCode::BAD_REQUEST,
            "Duplicate account",
            "username or email already exists",
            instance,
        ),
        DomainError::InvalidCredentials => from_parts(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Invalid username or password",
            instance,
        ),
        DomainError::Validation { field, message } => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation error",
            format!("{field}: {message}"),
        )
        .with_instance(instance)
        .with_errors(vec![FieldError {
            detail: message.clone(),
            pointer: format!("/{field}"),
        }])
        .into(),
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
