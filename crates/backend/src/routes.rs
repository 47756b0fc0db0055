use axum::{routing::get, Router};

use crate::api::{handlers, AppState};

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D100 Marketing overview dashboard
        .route(
            "/api/d100/overview",
            get(handlers::d100_marketing_overview::get_overview),
        )
        .route(
            "/api/d100/channels/:channel",
            get(handlers::d100_marketing_overview::get_channel),
        )
        .with_state(state)
}
