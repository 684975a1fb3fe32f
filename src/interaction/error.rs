use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::base::types::InvalidInput;

/// Errors surfaced to HTTP callers.
///
/// The advice engines themselves never fail; everything here is a problem
/// with the request.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("{message}")]
    MalformedPayload { message: String },

    #[error("Onbekend middel")]
    UnknownSubstance,
}

// Unreadable requests are always a 422.

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("JSON rejection ({}): {}", rejection.status(), rejection.body_text());

        Self::MalformedPayload { message: rejection.body_text() }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        debug!("Query rejection ({}): {}", rejection.status(), rejection.body_text());

        Self::MalformedPayload { message: rejection.body_text() }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(_) | ApiError::MalformedPayload { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnknownSubstance => StatusCode::NOT_FOUND,
        };

        debug!("Rejecting request with {status}: {self}");

        (status, Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}
