//! Runtime services and shared state for sjakie.

use tokio::{net::TcpListener, signal};
use tracing::{error, info, instrument};

use crate::{
    base::{config::Config, types::Void},
    interaction,
    service::db::DbClient,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration and the optional database client.
/// It is designed to be trivially cloneable, and is used as the router state.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The database client instance, if a database is configured and reachable.
    pub db: Option<DbClient>,
}

impl Runtime {
    /// Create a new runtime instance.
    ///
    /// A database that cannot be reached is logged and skipped; it only
    /// affects the diagnostic endpoint.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Self {
        let db = match &config.db_endpoint {
            Some(endpoint) => match DbClient::surreal(&config).await {
                Ok(db) => Some(db),
                Err(err) => {
                    error!("Failed to connect to database at `{endpoint}`: {err}");
                    None
                }
            },
            None => {
                info!("No database endpoint configured; running without a database.");
                None
            }
        };

        Self { config, db }
    }

    /// Serve the HTTP API until a shutdown signal arrives.
    pub async fn start(&self) -> Void {
        let address = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&address).await?;

        info!("Listening on http://{address} ...");

        axum::serve(listener, interaction::router(self.clone())).with_graceful_shutdown(shutdown_signal()).await?;

        info!("Server shut down.");

        Ok(())
    }
}

/// Resolves on Ctrl+C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down ..."),
            Err(err) => {
                error!("Failed to install Ctrl+C handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down ...");
            }
            Err(err) => {
                error!("Failed to install terminate handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
