//! AgroFácil Pest Alert Service
//!
//! HTTP service that answers pest alert queries with the pest alert engine.
//! Bind to 127.0.0.1 by default (internal only).

pub mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
  routing::{get, post},
  Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{ConfigError, ServiceConfig};
pub use handlers::{evaluate_crop, evaluate_registry, health, list_crops};
pub use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/alerts", post(evaluate_registry))
    .route("/alerts/crop", post(evaluate_crop))
    .route("/catalog/crops", get(list_crops))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
