//! API layer - HTTP entry points.

pub mod http;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app::App;

/// Router with application state attached and request tracing enabled.
pub fn router(app: Arc<App>) -> Router {
    http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}
