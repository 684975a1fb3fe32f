//! Triage conversation endpoints.
//!
//! Both endpoints are stateless: the client carries the conversation and
//! sends all of it back with every turn.

use axum::Json;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{advice::triage as engine, base::types::TriageStep};

use super::extract::Payload;

/// The opening message of a conversation.
#[derive(Debug, Deserialize)]
pub struct TriageTurn {
    pub message: String,
}

/// A follow-up turn, with everything said so far.
#[derive(Debug, Deserialize)]
pub struct TriageNextInput {
    /// Free text context or previous answer.
    pub context: String,
    pub complaint: Option<String>,
    pub last_answer: Option<String>,
}

/// `POST /api/triage/start`
#[instrument(skip_all)]
pub async fn start(Payload(turn): Payload<TriageTurn>) -> Json<TriageStep> {
    let step = engine::start(&turn.message);

    info!(terminal = step.is_terminal(), "Triage started.");

    Json(step)
}

/// `POST /api/triage/next`
#[instrument(skip_all)]
pub async fn next(Payload(input): Payload<TriageNextInput>) -> Json<TriageStep> {
    let step = engine::next(Some(&input.context), input.complaint.as_deref(), input.last_answer.as_deref());

    info!(terminal = step.is_terminal(), "Triage continued.");

    Json(step)
}
