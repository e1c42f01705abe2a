//! Shared server state and the listener loop

use std::sync::Arc;

use graphnode_core::Store;
use graphnode_query::AllowList;
use serde::{Deserialize, Serialize};

use crate::routes::create_router;

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Socket address to listen on
    pub bind: String,

    /// Origins allowed by CORS; `"*"` allows any origin
    pub allowed_origins: Vec<String>,

    /// Answer an empty filtered result with 404 instead of 200
    pub empty_match_is_not_found: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
            empty_match_is_not_found: true,
        }
    }
}

/// State shared by every request handler.
///
/// The store is never mutated after startup, so handlers read it through the
/// `Arc` without any locking.
pub struct AppState {
    pub store: Arc<Store>,
    pub allow_list: AllowList,
    pub settings: ApiSettings,
}

impl AppState {
    pub fn new(store: impl Into<Arc<Store>>, allow_list: AllowList, settings: ApiSettings) -> Self {
        Self {
            store: store.into(),
            allow_list,
            settings,
        }
    }
}

/// Run the HTTP server until Ctrl-C
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.settings.bind.clone();
    let router = create_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("graphnode API listening on {}", addr);
    tracing::info!("  Query nodes: http://{}/api/nodes/?by=<field>&value=<value>", addr);
    tracing::info!("  All nodes: http://{}/api/nodes/all/", addr);
    tracing::info!("  Node by id: http://{}/api/nodes/<node_id>/", addr);
    tracing::info!("  Health check: http://{}/health", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("graphnode API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
