//! HTTP server wiring

use axum::{middleware::from_fn_with_state, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::{ApiConfig, ConfigError},
    middleware::logging_middleware,
    routes::all_routes,
    state::AppState,
};

/// Server start-up and runtime errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Binding or serving failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the complete application router for `state`
pub fn build_router(state: AppState) -> Router {
    all_routes(&state)
        .layer(from_fn_with_state(state.clone(), logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The TrainLab HTTP server
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    /// Server over in-memory storage
    pub fn new(config: ApiConfig) -> Self {
        let state = AppState::in_memory(&config);
        Self { config, state }
    }

    /// Server over caller-provided state
    pub fn with_state(config: ApiConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Shared application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router serving this server's state
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind and serve until ctrl-c
    pub async fn serve(self) -> Result<(), ServerError> {
        let address = self.config.bind_address()?;
        let listener = TcpListener::bind(address).await?;
        tracing::info!(%address, "TrainLab API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("TrainLab API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
