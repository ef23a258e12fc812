//! HTTP handlers for summary statistics

use axum::{extract::State, Json};
use shared::StatsSummary;

use crate::error::AppResult;
use crate::services::StatsService;
use crate::AppState;

/// Summary cards over the historical AQI readings
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsSummary>> {
    let service = StatsService::new(state.dataset);
    let summary = service.summary()?;
    Ok(Json(summary))
}
