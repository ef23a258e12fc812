//! HTTP handlers for chart rollups

use axum::{extract::State, Json};

use crate::services::stats::{AirQualityTrends, WeatherTrends};
use crate::services::StatsService;
use crate::AppState;

/// Monthly and yearly AQI averages
pub async fn get_air_quality_trends(State(state): State<AppState>) -> Json<AirQualityTrends> {
    Json(StatsService::new(state.dataset).air_quality_trends())
}

/// Monthly and yearly temperature, humidity and rainfall averages
pub async fn get_weather_trends(State(state): State<AppState>) -> Json<WeatherTrends> {
    Json(StatsService::new(state.dataset).weather_trends())
}
