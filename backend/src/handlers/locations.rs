//! HTTP handlers for the location registry

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// A city as seen by both forecast domains
#[derive(Debug, Clone, Serialize)]
pub struct LocationSummary {
    pub id: String,
    pub display_name: String,
    pub region: String,
    pub aqi_adjustment: Option<f64>,
    pub temperature_adjustment: Option<f64>,
    pub air_quality_description: Option<String>,
    pub climate_description: Option<String>,
}

fn summarize_location(state: &AppState, id: &str) -> Option<LocationSummary> {
    let aqi = state.dataset.aqi_locations.get(id);
    let weather = state.dataset.weather_locations.get(id);
    let base = aqi.or(weather)?;

    Some(LocationSummary {
        id: base.id.clone(),
        display_name: base.display_name.clone(),
        region: base.region.clone(),
        aqi_adjustment: aqi.map(|l| l.adjustment),
        temperature_adjustment: weather.map(|l| l.adjustment),
        air_quality_description: aqi.map(|l| l.description.clone()),
        climate_description: weather.map(|l| l.description.clone()),
    })
}

/// List every known location
pub async fn list_locations(State(state): State<AppState>) -> Json<Vec<LocationSummary>> {
    let mut ids: Vec<&str> = state
        .dataset
        .aqi_locations
        .iter()
        .chain(state.dataset.weather_locations.iter())
        .map(|l| l.id.as_str())
        .collect();
    // registries keep insertion order; keep the first sighting of each id
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(*id));

    Json(
        ids.into_iter()
            .filter_map(|id| summarize_location(&state, id))
            .collect(),
    )
}

/// Get one location by id, case-insensitive
pub async fn get_location(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> AppResult<Json<LocationSummary>> {
    let id = location_id.to_lowercase();
    summarize_location(&state, &id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Location '{}'", location_id)))
}
