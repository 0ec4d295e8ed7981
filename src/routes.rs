//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /user/{id}` - Aggregated user detail (public)
//! - `GET /health`    - Health check: DB, cache (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, user_detail_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/user/{id}", get(user_detail_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
