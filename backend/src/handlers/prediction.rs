//! HTTP handlers for forecast endpoints

use axum::{extract::State, Json};
use validator::Validate;

use crate::error::AppResult;
use crate::services::prediction::{
    AirQualityPrediction, AirQualityPredictionInput, WeatherPrediction, WeatherPredictionInput,
};
use crate::services::PredictionService;
use crate::AppState;

/// Predict AQI for a city and month
pub async fn predict_air_quality(
    State(state): State<AppState>,
    Json(input): Json<AirQualityPredictionInput>,
) -> AppResult<Json<AirQualityPrediction>> {
    input.validate()?;
    let service = PredictionService::new(state.dataset);
    let prediction = service.predict_air_quality(&input, PredictionService::current_month())?;
    Ok(Json(prediction))
}

/// Predict temperature, humidity and rainfall for a month
pub async fn predict_weather(
    State(state): State<AppState>,
    Json(input): Json<WeatherPredictionInput>,
) -> AppResult<Json<WeatherPrediction>> {
    input.validate()?;
    let service = PredictionService::new(state.dataset);
    let prediction = service.predict_weather(&input, PredictionService::current_month())?;
    Ok(Json(prediction))
}
