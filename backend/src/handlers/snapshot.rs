//! Snapshot handlers

use axum::{extract::State, Json};
use serde::Serialize;
use shared::{AppSnapshot, SnapshotIssue};

use crate::error::AppResult;
use crate::AppState;

#[derive(Serialize)]
pub struct ReplaceSnapshotResponse {
    pub status: String,
    pub issues: Vec<SnapshotIssue>,
}

/// Replace the snapshot the reports are computed from
///
/// The body is decoded like a stored document, so absent collections are
/// filled from the seed. Suspicious records are reported back but never
/// rejected.
pub async fn replace_snapshot(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<ReplaceSnapshotResponse>> {
    let snapshot = AppSnapshot::migrate_from_json(&body)?;
    let issues = state.snapshot.replace(snapshot).await;

    Ok(Json(ReplaceSnapshotResponse {
        status: "replaced".to_string(),
        issues,
    }))
}

/// Get the current snapshot
pub async fn get_snapshot(State(state): State<AppState>) -> Json<AppSnapshot> {
    Json(state.snapshot.read().await.clone())
}
