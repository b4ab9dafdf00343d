use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::services::ReportService;
use crate::domain::{SpendingReport, TimeRange};
use crate::http::{parse_id, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "timeRange")]
    pub time_range: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportEnvelope {
    pub success: bool,
    pub report: SpendingReport,
}

/// Aggregates all of a user's expenses into the chart series, optionally
/// restricted to a time window anchored at today.
pub async fn spending_report(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportEnvelope>, ApiError> {
    let user_id = parse_id(&raw)?;
    let range = query
        .time_range
        .as_deref()
        .map(TimeRange::parse)
        .unwrap_or_default();
    let reference = Utc::now().date_naive();
    let report = state
        .store
        .read(|db| ReportService::spending_report(db, user_id, range, reference))?;
    Ok(Json(ReportEnvelope {
        success: true,
        report,
    }))
}
