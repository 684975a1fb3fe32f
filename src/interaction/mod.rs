//! HTTP request handling for sjakie.
//!
//! This module wires the advice engines to the outside world:
//! - Routing and middleware (CORS, request tracing)
//! - Request extraction and boundary validation
//! - Mapping failures to JSON error responses

pub mod advice;
pub mod error;
pub mod extract;
pub mod status;
pub mod triage;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::runtime::Runtime;

/// Builds the application router.
///
/// Every advice endpoint lives under `/api/`; the liveness and diagnostic
/// endpoints live at the root.
pub fn router(runtime: Runtime) -> Router {
    let api = Router::new()
        .route("/hello", get(status::hello))
        .route("/hangover", post(advice::hangover))
        .route("/drugs/info", get(advice::drug_info))
        .route("/future-self", post(advice::future_self))
        .route("/triage/start", post(triage::start))
        .route("/triage/next", post(triage::next));

    Router::new()
        .route("/", get(status::root))
        .route("/test", get(status::test_database))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        // Any origin, with credentials; the web client is served from elsewhere.
        .layer(CorsLayer::very_permissive())
        .with_state(runtime)
}
