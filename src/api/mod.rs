//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
///
/// The route table below is the complete network surface of the backend:
/// anything not listed falls through to axum's 404 handler.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/data_for_train/:train_id", get(handlers::data_for_train))
        .route("/reserve", post(handlers::reserve))
        .route("/reset/:train_id", post(handlers::reset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
