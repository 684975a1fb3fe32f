//! Library root for `sjakie`.
//!
//! Sjakie is a small HTTP API serving independent wellness advice endpoints:
//! - A hangover recovery plan (hydration target, schedule, tips)
//! - Harm-reduction information for common substances
//! - A lifestyle ("future self") score
//! - A rule-based symptom triage conversation
//!
//! Every endpoint is a pure function of its request; nothing is remembered
//! between calls.  The triage conversation is carried by the client, which
//! resubmits the accumulated context on every turn.  An optional SurrealDB
//! connection exists only to back a connectivity diagnostic.

pub mod advice;
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up the runtime context (configuration and the optional database)
/// and serves the HTTP API until shutdown.
pub async fn start(config: Config) -> Void {
    info!("Starting sjakie ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await;

    // Start serving.
    runtime.start().await?;

    Ok(())
}
