use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::Serialize;
use tracing::{instrument, warn};

use crate::base::{config::Config, types::Res};

pub mod surreal;

/// Maximum number of collections listed in a diagnostic report.
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Maximum length of an error message echoed in a diagnostic report.
const MAX_REPORTED_ERROR_CHARS: usize = 50;

// Traits.

/// Generic database client trait that clients must implement.
///
/// The database is an optional hook; sjakie only asks it which collections
/// (tables) exist, to prove the connection works.
#[async_trait]
pub trait GenericDbClient: Send + Sync + 'static {
    /// Lists the collections in the configured database.
    async fn list_collections(&self) -> Res<Vec<String>>;
}

// Structs.

/// Database client for sjakie.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct DbClient {
    inner: Arc<dyn GenericDbClient>,
}

impl Deref for DbClient {
    type Target = dyn GenericDbClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl DbClient {
    pub fn new(inner: Arc<dyn GenericDbClient>) -> Self {
        Self { inner }
    }
}

/// Connectivity report for the backend and its optional database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn setting_status(value: Option<&str>) -> String {
    let status = if value.is_some() { "✅ Set" } else { "❌ Not Set" };
    status.to_string()
}

/// Builds a diagnostic report.
///
/// `db` is `None` when no database is configured, or when connecting to it
/// failed at startup.
#[instrument(skip_all)]
pub async fn diagnose(config: &Config, db: Option<&DbClient>) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: setting_status(config.db_endpoint.as_deref()),
        database_name: setting_status(config.db_name.as_deref()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Some(db) = db else {
        if config.db_endpoint.is_some() {
            report.database = "⚠️  Available but not initialized".to_string();
        }

        return report;
    };

    report.connection_status = "Connected".to_string();

    match db.list_collections().await {
        Ok(collections) => {
            report.database = "✅ Connected & Working".to_string();
            report.collections = collections.into_iter().take(MAX_REPORTED_COLLECTIONS).collect();
        }
        Err(err) => {
            warn!("Failed to list collections: {err}");

            let message: String = err.to_string().chars().take(MAX_REPORTED_ERROR_CHARS).collect();
            report.database = format!("⚠️  Connected but Error: {message}");
        }
    }

    report
}
