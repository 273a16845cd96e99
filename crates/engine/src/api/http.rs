//! HTTP routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/profile", get(get_profile))
}

async fn health() -> &'static str {
    "OK"
}

async fn get_profile(State(app): State<Arc<App>>) -> &'static str {
    let profile = app.profile();
    tracing::debug!(profile = %profile.kind(), "Serving system profile");
    profile.describe()
}
