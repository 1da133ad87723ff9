//! Reporting handlers for stock and sales reports

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{CampaignOption, ReportKind};

use crate::error::{AppError, AppResult};
use crate::services::{reporting::ReportFilter, ReportingService};
use crate::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    /// "global" or a correria id
    pub correria: Option<String>,
    pub filter: Option<String>,
    pub format: Option<String>, // "json" or "csv"
}

/// Get one report by kind (kardex, ref, client, seller, seller-by-id)
pub async fn get_report(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    let kind: ReportKind = kind
        .parse()
        .map_err(|_| AppError::NotFound(format!("Report {}", kind)))?;

    let format = query.format.as_deref().unwrap_or("json");
    if format != "json" && format != "csv" {
        return Err(AppError::ValidationError(format!(
            "Unsupported format {}, expected json or csv",
            format
        )));
    }

    let service = ReportingService::new(state.snapshot.clone());
    let filter = ReportFilter {
        correria: query.correria,
        filter: query.filter,
    };
    let data = service.get_report(kind, &filter).await?;

    if format == "csv" {
        let csv = ReportingService::table_to_csv(&data)?;
        let disposition = format!("attachment; filename=\"{}.csv\"", kind);
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(data).into_response())
    }
}

/// List campaign picker options
pub async fn list_correrias(State(state): State<AppState>) -> Json<Vec<CampaignOption>> {
    let service = ReportingService::new(state.snapshot.clone());
    Json(service.get_campaign_options().await)
}
