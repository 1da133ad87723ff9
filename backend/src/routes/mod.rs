//! Route definitions for the Correria reports server

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Campaign picker
        .route("/correrias", get(handlers::list_correrias))
        // Reports
        .nest("/reports", report_routes())
        // Snapshot hand-off from the data-entry side
        .route(
            "/snapshot",
            get(handlers::get_snapshot).put(handlers::replace_snapshot),
        )
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new().route("/:kind", get(handlers::get_report))
}
