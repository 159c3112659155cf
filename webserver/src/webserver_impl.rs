//! Main webserver implementation
//!
//! Owns the shared state and the injected randomness source, builds the
//! router and runs it until a shutdown signal arrives.

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::core::HeadlineTemplates;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::RandomSource;
use crate::web::handlers::{health_check, regenerate_headline, submit_business};
use shared::{ProcessId, process_info};

/// Main webserver struct with dependency injection
pub struct WebServer<R: RandomSource + 'static> {
    state: Arc<WebServerState<R>>,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: Option<mpsc::Receiver<()>>,
}

impl<R: RandomSource + 'static> WebServer<R> {
    pub fn new(templates: HeadlineTemplates, random: R) -> Self {
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        Self {
            state: Arc::new(WebServerState::new(templates, random)),
            shutdown_tx,
            shutdown_rx: Some(shutdown_rx),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/business-data", post(submit_business::<R>))
            .route("/regenerate-headline", get(regenerate_headline::<R>))
            .route("/health", get(health_check::<R>))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive()) // dashboard is served from another origin
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Sending on the returned channel stops `run`
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Serve on `addr` until shutdown. Can only be called once.
    pub async fn run(&mut self, addr: SocketAddr) -> WebServerResult<()> {
        let mut shutdown_rx = self
            .shutdown_rx
            .take()
            .ok_or_else(|| WebServerError::ServerStartup("WebServer is already running".to_string()))?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", addr, e)))?;
        let local_addr = listener.local_addr()?;

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", local_addr);
        process_info!(
            ProcessId::current(),
            "📰 Serving {} headline templates",
            self.state.template_count()
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(async move {
                shutdown_rx.recv().await;
            })
            .await?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState<R>> {
        &self.state
    }
}
