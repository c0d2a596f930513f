//! HTTP server exposing the risk store under `/v1`.
//!
//! Routes:
//! - `GET /v1/risks` - list every stored risk
//! - `POST /v1/risks` - create a risk
//! - `GET /v1/risks/{id}` - fetch a risk by id

mod error;
mod handlers;

pub use error::{ApiError, ErrorResponse};

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::Result;
use crate::config::{REQUEST_TIMEOUT, ServerConfig};
use crate::storage::RiskStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Storage backend the handlers read and write.
    pub store: Arc<dyn RiskStore>,
}

/// Build the application router around the given store.
pub fn router(store: Arc<dyn RiskStore>) -> Router {
    let state = AppState { store };

    let v1 = Router::new()
        .route(
            "/risks",
            get(handlers::list_risks).post(handlers::create_risk),
        )
        .route("/risks/{id}", get(handlers::get_risk));

    Router::new()
        .nest("/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

/// Bind the listener and serve requests until ctrl-c.
pub async fn serve(config: &ServerConfig, store: Arc<dyn RiskStore>) -> Result<()> {
    let app = router(store);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    // If the handler cannot be installed we simply serve until killed.
    let _ = tokio::signal::ctrl_c().await;
}
