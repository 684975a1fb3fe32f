//! SurrealDB implementation of the database hook.

use std::{collections::BTreeMap, sync::Arc};

use anyhow::anyhow;
use async_trait::async_trait;
use serde::Deserialize;
use surrealdb::{
    Surreal,
    engine::any::{self, Any},
    opt::auth::Root,
};
use tracing::{info, instrument};

use crate::base::{config::Config, types::Res};

use super::{DbClient, GenericDbClient};

/// Database used when the configuration does not name one.
const DEFAULT_DB_NAME: &str = "sjakie";

// Extra methods on `DbClient` applied by the SurrealDB implementation.

impl DbClient {
    /// Connects to the SurrealDB instance at `db_endpoint`.
    ///
    /// The endpoint scheme picks the engine, e.g. `mem://` for an in-memory
    /// database or `ws://host:port` for a remote one.
    pub async fn surreal(config: &Config) -> Res<Self> {
        let client = SurrealDbClient::new(config).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

/// The subset of `INFO FOR DB` we read.
#[derive(Debug, Deserialize)]
struct DbInfo {
    #[serde(default)]
    tables: BTreeMap<String, String>,
}

/// SurrealDB client implementation.
#[derive(Clone)]
pub struct SurrealDbClient {
    db: Surreal<Any>,
}

impl SurrealDbClient {
    #[instrument(name = "SurrealDbClient::new", skip_all)]
    pub async fn new(config: &Config) -> Res<Self> {
        let endpoint = config.db_endpoint.as_deref().ok_or_else(|| anyhow!("No database endpoint configured."))?;

        let db = any::connect(endpoint).await?;

        // Authenticate, if credentials are configured.
        if let (Some(username), Some(password)) = (&config.db_username, &config.db_password) {
            db.signin(Root { username, password }).await?;
        }

        let name = config.db_name.as_deref().unwrap_or(DEFAULT_DB_NAME);
        db.use_ns(&config.db_namespace).use_db(name).await?;

        info!("Connected to database `{}/{}`.", config.db_namespace, name);

        Ok(Self { db })
    }
}

#[async_trait]
impl GenericDbClient for SurrealDbClient {
    #[instrument(skip(self))]
    async fn list_collections(&self) -> Res<Vec<String>> {
        let mut response = self.db.query("INFO FOR DB").await?;
        let info: Option<DbInfo> = response.take(0)?;

        Ok(info.map(|info| info.tables.into_keys().collect()).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use crate::base::config::ConfigInner;
    use crate::service::db::diagnose;

    use super::*;

    fn mem_config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                db_endpoint: Some("mem://".to_string()),
                db_namespace: "sjakie".to_string(),
                db_name: Some("wellness".to_string()),
                ..Default::default()
            }),
        }
    }

    #[tokio::test]
    async fn test_list_collections_reads_defined_tables() {
        let config = mem_config();
        let client = SurrealDbClient::new(&config).await.unwrap();

        assert!(client.list_collections().await.unwrap().is_empty());

        client.db.query("DEFINE TABLE triage_log; DEFINE TABLE hangover_plan").await.unwrap().check().unwrap();

        assert_eq!(client.list_collections().await.unwrap(), vec!["hangover_plan", "triage_log"]);

        let db = DbClient::new(Arc::new(client));
        let report = diagnose(&config, Some(&db)).await;

        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.database_name, "✅ Set");
        assert_eq!(report.collections, vec!["hangover_plan", "triage_log"]);
    }
}
