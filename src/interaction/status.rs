//! Liveness and diagnostic endpoints.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::{
    runtime::Runtime,
    service::db::{self, DiagnosticReport},
};

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// `GET /`
pub async fn root() -> Json<Greeting> {
    Json(Greeting { message: "Sjakie Backend is live" })
}

/// `GET /api/hello`
pub async fn hello() -> Json<Greeting> {
    Json(Greeting { message: "Hello from Sjakie backend!" })
}

/// `GET /test`
#[instrument(skip_all)]
pub async fn test_database(State(runtime): State<Runtime>) -> Json<DiagnosticReport> {
    Json(db::diagnose(&runtime.config, runtime.db.as_ref()).await)
}
