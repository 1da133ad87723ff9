//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::{reporting::SnapshotSummary, ReportingService};
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub snapshot: SnapshotSummary,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = ReportingService::new(state.snapshot.clone());

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        snapshot: service.get_summary().await,
    })
}
