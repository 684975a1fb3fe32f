//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::{Res, Void};

/// Default interface to bind the HTTP server to.
fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default HTTP port.
fn default_port() -> u16 {
    8000
}

/// Default SurrealDB namespace used by the diagnostic connection.
fn default_db_namespace() -> String {
    "sjakie".to_string()
}

/// Configuration for the sjakie application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Interface to bind to (`SJAKIE_HOST`).
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on (`SJAKIE_PORT`).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional database endpoint, e.g. `mem://` or `ws://localhost:8000` (`SJAKIE_DB_ENDPOINT`).
    ///
    /// The database is only used by the connectivity diagnostic; the advice
    /// endpoints never touch it.
    pub db_endpoint: Option<String>,
    /// Database namespace (`SJAKIE_DB_NAMESPACE`).
    #[serde(default = "default_db_namespace")]
    pub db_namespace: String,
    /// Database name (`SJAKIE_DB_NAME`).
    pub db_name: Option<String>,
    /// Database username (`SJAKIE_DB_USERNAME`).
    pub db_username: Option<String>,
    /// Database password (`SJAKIE_DB_PASSWORD`).
    pub db_password: Option<String>,
}

impl ConfigInner {
    fn validate(&self) -> Void {
        if self.port == 0 {
            return Err(anyhow::anyhow!("Port must be between 1 and 65535."));
        }

        if self.db_username.is_some() != self.db_password.is_some() {
            return Err(anyhow::anyhow!("Database username and password must be provided together."));
        }

        if self.db_name.is_some() && self.db_endpoint.is_none() {
            return Err(anyhow::anyhow!("Database name is set, but no database endpoint is configured."));
        }

        Ok(())
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("SJAKIE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }
}
