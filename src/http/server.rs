//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the `/pingalyse` handler
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener
//! - Stop gracefully when the shutdown signal fires

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{parse_target_uri, PingalyserConfig, ValidationError};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestSpan};
use crate::ping::{HttpPingSource, PingError, PingEvaluator, PingSource, Verdict};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: PingEvaluator,
}

/// HTTP server for the pingalyser service.
pub struct HttpServer {
    router: Router,
    config: PingalyserConfig,
}

impl HttpServer {
    /// Create a server that reaches the downstream over a fresh `reqwest::Client`.
    pub fn new(config: PingalyserConfig) -> Result<Self, ValidationError> {
        let source = Arc::new(HttpPingSource::new(reqwest::Client::new()));
        Self::with_source(config, source)
    }

    /// Create a server around an arbitrary downstream capability.
    pub fn with_source(
        config: PingalyserConfig,
        source: Arc<dyn PingSource>,
    ) -> Result<Self, ValidationError> {
        let target = parse_target_uri(&config.pingalyser.target_uri)?;
        let state = AppState {
            evaluator: PingEvaluator::new(source, target),
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(RequestSpan))
            .layer(propagate_request_id_layer());

        Router::new()
            .route("/pingalyse", get(pingalyse_handler))
            .with_state(state)
            .layer(middleware)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            target_uri = %self.config.pingalyser.target_uri,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Consume the server, returning its router (useful for in-process tests).
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// `GET /pingalyse`: call the downstream and report what came back.
async fn pingalyse_handler(State(state): State<AppState>) -> Result<Verdict, PingError> {
    state.evaluator.evaluate().await
}
