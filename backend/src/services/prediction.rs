//! Prediction service wrapping the air quality and weather engines

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::forecast::domains::{HUMIDITY, RAINFALL};
use shared::{
    classify_aqi, classify_temperature, ForecastEngine, ForecastRequest, PredictionResult,
    TrendLabel, YearMonth,
};
use validator::Validate;

use super::dataset::Dataset;
use crate::error::AppResult;

/// Body of `POST /predict`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AirQualityPredictionInput {
    #[validate(length(min = 1, max = 64, message = "city must be 1-64 characters"))]
    pub city: String,
    pub year: i32,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: u32,
}

/// Body of `POST /weather/predict`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeatherPredictionInput {
    #[validate(length(min = 1, max = 64, message = "city must be 1-64 characters"))]
    pub city: Option<String>,
    pub year: i32,
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AirQualityPrediction {
    pub aqi: f64,
    pub category: String,
    pub city: String,
    pub year: i32,
    pub month: u32,
    pub confidence: u8,
    pub confidence_label: String,
    pub months_ahead: i64,
    pub trend: TrendLabel,
    pub trend_slope: f64,
    pub seasonal_factor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_factor: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherPrediction {
    pub temperature: f64,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub year: i32,
    pub month: u32,
    pub confidence: u8,
    pub confidence_label: String,
    pub months_ahead: i64,
    pub trend: TrendLabel,
    pub trend_slope: f64,
    pub seasonal_factor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_factor: Option<String>,
}

/// Prediction service over an immutable dataset snapshot
#[derive(Clone)]
pub struct PredictionService {
    dataset: Arc<Dataset>,
    air_quality: ForecastEngine,
    weather: ForecastEngine,
}

impl PredictionService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            air_quality: ForecastEngine::air_quality(),
            weather: ForecastEngine::weather(),
        }
    }

    /// Current calendar month, read from the wall clock
    pub fn current_month() -> YearMonth {
        Utc::now().date_naive().into()
    }

    /// Forecast AQI for a city and month
    pub fn predict_air_quality(
        &self,
        input: &AirQualityPredictionInput,
        now: YearMonth,
    ) -> AppResult<AirQualityPrediction> {
        let request = ForecastRequest::new(input.year, input.month)
            .at_location(input.city.trim().to_lowercase());

        let result = self.air_quality.forecast(
            &self.dataset.air_quality,
            &self.dataset.aqi_locations,
            &request,
            now,
        )?;

        tracing::info!(
            city = %input.city,
            target = %result.target,
            aqi = result.predicted_primary,
            "AQI prediction served"
        );

        Ok(AirQualityPrediction {
            aqi: result.predicted_primary,
            category: classify_aqi(result.predicted_primary).to_string(),
            city: input.city.clone(),
            year: input.year,
            month: input.month,
            confidence: result.confidence,
            confidence_label: result.confidence_label,
            months_ahead: result.months_ahead,
            trend: result.trend_label,
            trend_slope: result.trend_slope,
            seasonal_factor: result.seasonal_narrative,
            location_factor: result.location_narrative,
        })
    }

    /// Forecast temperature, humidity and rainfall for a month
    pub fn predict_weather(
        &self,
        input: &WeatherPredictionInput,
        now: YearMonth,
    ) -> AppResult<WeatherPrediction> {
        let mut request = ForecastRequest::new(input.year, input.month);
        if let Some(city) = &input.city {
            request = request.at_location(city.trim().to_lowercase());
        }

        let result: PredictionResult = self.weather.forecast(
            &self.dataset.weather,
            &self.dataset.weather_locations,
            &request,
            now,
        )?;

        tracing::info!(
            city = ?input.city,
            target = %result.target,
            temperature = result.predicted_primary,
            "Weather prediction served"
        );

        Ok(WeatherPrediction {
            temperature: result.predicted_primary,
            humidity: result.predicted_secondary.get(HUMIDITY).copied(),
            rainfall: result.predicted_secondary.get(RAINFALL).copied(),
            category: classify_temperature(result.predicted_primary).to_string(),
            city: input.city.clone(),
            year: input.year,
            month: input.month,
            confidence: result.confidence,
            confidence_label: result.confidence_label,
            months_ahead: result.months_ahead,
            trend: result.trend_label,
            trend_slope: result.trend_slope,
            seasonal_factor: result.seasonal_narrative,
            location_factor: result.location_narrative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: YearMonth = YearMonth { year: 2025, month: 3 };

    fn service() -> PredictionService {
        PredictionService::new(Arc::new(Dataset::embedded()))
    }

    fn aqi_input(city: &str, year: i32, month: u32) -> AirQualityPredictionInput {
        AirQualityPredictionInput {
            city: city.to_string(),
            year,
            month,
        }
    }

    #[test]
    fn test_city_is_matched_case_insensitively() {
        let service = service();
        let upper = service.predict_air_quality(&aqi_input("Delhi", 2025, 11), NOW).unwrap();
        let lower = service.predict_air_quality(&aqi_input("delhi", 2025, 11), NOW).unwrap();
        assert_eq!(upper.aqi, lower.aqi);
        assert!(upper.location_factor.is_some());
        assert_eq!(upper.city, "Delhi");
    }

    #[test]
    fn test_unknown_city_has_no_location_factor() {
        let service = service();
        let result = service.predict_air_quality(&aqi_input("Atlantis", 2025, 11), NOW).unwrap();
        assert!(result.location_factor.is_none());
        assert!((0.0..=500.0).contains(&result.aqi));
    }

    #[test]
    fn test_category_matches_value() {
        let service = service();
        let result = service.predict_air_quality(&aqi_input("Mumbai", 2026, 1), NOW).unwrap();
        assert_eq!(result.category, classify_aqi(result.aqi).to_string());
        assert_eq!(result.months_ahead, 10);
        assert_eq!(result.confidence, 68);
    }

    #[test]
    fn test_weather_prediction_has_secondaries() {
        let service = service();
        let input = WeatherPredictionInput {
            city: Some("Mumbai".to_string()),
            year: 2025,
            month: 7,
        };
        let result = service.predict_weather(&input, NOW).unwrap();
        let humidity = result.humidity.unwrap();
        assert!((20.0..=95.0).contains(&humidity));
        assert!(result.rainfall.unwrap() >= 0.0);
        assert!(result.seasonal_factor.starts_with("Monsoon season"));
        assert_eq!(result.trend, TrendLabel::Warming);
    }

    #[test]
    fn test_input_validation() {
        assert!(aqi_input("Delhi", 2025, 0).validate().is_err());
        assert!(aqi_input("Delhi", 2025, 13).validate().is_err());
        assert!(aqi_input("", 2025, 5).validate().is_err());
        assert!(aqi_input("Delhi", 2025, 5).validate().is_ok());

        let input = WeatherPredictionInput {
            city: None,
            year: 2030,
            month: 12,
        };
        assert!(input.validate().is_ok());
    }
}
