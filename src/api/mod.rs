//! REST API over a single park.
//!
//! Routes, nested under `/api`:
//! - `POST /set-market-price?marketPrice=N`
//! - `POST /update-production-target?delta=N`
//! - `GET /production-plan`: one `{identifier, expectedProduction}` per turbine
//! - `GET /state`: current price, target, and fleet capacity

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use parking_lot::Mutex;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::park::Park;
use crate::registry::InMemoryRegistry;

pub use types::{DeltaQuery, ErrorResponse, MarketPriceQuery, StateResponse};

/// Application state shared across all request handlers.
///
/// Every handler holds the park lock for the whole operation, so a
/// read-modify-write of the target and a plan computation each see one
/// consistent fleet and state.
pub struct AppState {
    /// The park being planned.
    pub park: Mutex<Park<InMemoryRegistry>>,
}

impl AppState {
    /// Wraps `park` for sharing between handlers.
    pub fn new(park: Park<InMemoryRegistry>) -> Arc<Self> {
        Arc::new(Self {
            park: Mutex::new(park),
        })
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/set-market-price", post(handlers::set_market_price))
        .route(
            "/update-production-target",
            post(handlers::update_production_target),
        )
        .route("/production-plan", get(handlers::get_production_plan))
        .route("/state", get(handlers::get_state))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Binds to the given address and serves the API until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind to `addr` or the server
/// fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(crate::logging::shutdown_signal())
        .await?;
    tracing::info!("API server stopped");
    Ok(())
}
