//! Calculator and lookup endpoints.

use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use crate::advice::{
    future_self::{self, FutureSelfInput, FutureSelfScore},
    hangover::{self, HangoverPlan, HangoverRequest},
    harm_reduction::{self, DrugInfo},
};

use super::{
    error::ApiError,
    extract::{Payload, QueryParams},
};

#[derive(Debug, Deserialize)]
pub struct DrugQuery {
    pub substance: String,
}

/// `POST /api/hangover`
#[instrument(skip_all)]
pub async fn hangover(Payload(request): Payload<HangoverRequest>) -> Result<Json<HangoverPlan>, ApiError> {
    request.validate()?;

    Ok(Json(hangover::plan(&request)))
}

/// `GET /api/drugs/info?substance=...`
#[instrument(skip_all)]
pub async fn drug_info(QueryParams(query): QueryParams<DrugQuery>) -> Result<Json<DrugInfo>, ApiError> {
    harm_reduction::lookup(&query.substance).map(Json).ok_or(ApiError::UnknownSubstance)
}

/// `POST /api/future-self`
#[instrument(skip_all)]
pub async fn future_self(Payload(input): Payload<FutureSelfInput>) -> Result<Json<FutureSelfScore>, ApiError> {
    input.validate()?;

    Ok(Json(future_self::score(&input)))
}
