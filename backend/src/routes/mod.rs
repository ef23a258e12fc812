//! API route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::AppState;

/// Build all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(prediction_routes())
        .merge(history_routes())
        .nest("/locations", location_routes())
}

/// Forecast routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(handlers::predict_air_quality))
        .route("/weather/predict", post(handlers::predict_weather))
}

/// Statistics and chart rollups over the historical dataset
fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::get_stats))
        .route("/trends/air-quality", get(handlers::get_air_quality_trends))
        .route("/trends/weather", get(handlers::get_weather_trends))
}

/// Location registry routes
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_locations))
        .route("/:location_id", get(handlers::get_location))
}
