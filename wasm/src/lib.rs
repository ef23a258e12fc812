//! WebAssembly module for the Airwise dashboard
//!
//! Provides client-side computation for:
//! - Air quality and weather forecasts over the embedded dataset
//! - Monthly and yearly chart rollups
//! - AQI and temperature category lookup
//!
//! Every export returns JSON text; errors surface as string `JsValue`s.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use shared::data;
use shared::forecast::domains::{HUMIDITY, RAINFALL};
use shared::{
    classify_aqi, classify_temperature, monthly_means, yearly_means, DomainConfig, ForecastEngine,
    ForecastRequest, HistoricalSeries, LocationRegistry, MonthlyAverage, Quantity, YearMonth,
    YearlyAverage,
};

fn to_js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

/// The caller's `now`, or the browser clock when neither part is passed
fn resolve_now(now_year: Option<i32>, now_month: Option<u32>) -> Result<YearMonth, String> {
    match (now_year, now_month) {
        (Some(year), Some(month)) => YearMonth::new(year, month).map_err(|e| e.to_string()),
        (None, None) => {
            let date = js_sys::Date::new_0();
            Ok(YearMonth {
                year: date.get_full_year() as i32,
                // JS months are zero-based
                month: date.get_month() + 1,
            })
        }
        _ => Err("now_year and now_month must be passed together".to_string()),
    }
}

fn warn_unknown_location(locations: &LocationRegistry, location_id: Option<&str>) {
    if let Some(id) = location_id {
        if locations.get(&normalize_id(id)).is_none() {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "Unknown location '{}', forecasting without location adjustment",
                id
            )));
        }
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

fn forecast_json(
    engine: &ForecastEngine,
    series: &HistoricalSeries,
    locations: &LocationRegistry,
    year: i32,
    month: u32,
    location_id: Option<&str>,
    now: YearMonth,
) -> Result<String, String> {
    let mut request = ForecastRequest::new(year, month);
    if let Some(id) = location_id {
        request = request.at_location(normalize_id(id));
    }
    let result = engine
        .forecast(series, locations, &request, now)
        .map_err(|e| e.to_string())?;
    to_json(&result)
}

fn predict_air_quality_json(
    year: i32,
    month: u32,
    location_id: Option<&str>,
    now: YearMonth,
) -> Result<String, String> {
    forecast_json(
        &ForecastEngine::air_quality(),
        &data::air_quality_series(),
        &data::air_quality_locations(),
        year,
        month,
        location_id,
        now,
    )
}

fn predict_weather_json(
    year: i32,
    month: u32,
    location_id: Option<&str>,
    now: YearMonth,
) -> Result<String, String> {
    forecast_json(
        &ForecastEngine::weather(),
        &data::weather_series(),
        &data::weather_locations(),
        year,
        month,
        location_id,
        now,
    )
}

fn monthly_rounded(
    series: &HistoricalSeries,
    config: &DomainConfig,
    quantity: Quantity,
) -> Vec<MonthlyAverage> {
    let decimals = config.precision_of(&quantity);
    monthly_means(series, &quantity)
        .into_iter()
        .map(|m| m.rounded(decimals))
        .collect()
}

fn yearly_rounded(
    series: &HistoricalSeries,
    config: &DomainConfig,
    quantity: Quantity,
) -> Vec<YearlyAverage> {
    let decimals = config.precision_of(&quantity);
    yearly_means(series, &quantity)
        .into_iter()
        .map(|y| y.rounded(decimals))
        .collect()
}

#[derive(Serialize)]
struct WeatherMonthly {
    temperature: Vec<MonthlyAverage>,
    humidity: Vec<MonthlyAverage>,
    rainfall: Vec<MonthlyAverage>,
}

fn weather_monthly_json() -> Result<String, String> {
    let series = data::weather_series();
    let config = DomainConfig::weather();
    to_json(&WeatherMonthly {
        temperature: monthly_rounded(&series, &config, Quantity::Primary),
        humidity: monthly_rounded(&series, &config, Quantity::secondary(HUMIDITY)),
        rainfall: monthly_rounded(&series, &config, Quantity::secondary(RAINFALL)),
    })
}

/// Forecast AQI for a month, optionally at a location
#[wasm_bindgen]
pub fn predict_air_quality(
    year: i32,
    month: u32,
    location_id: Option<String>,
    now_year: Option<i32>,
    now_month: Option<u32>,
) -> Result<String, JsValue> {
    let now = resolve_now(now_year, now_month).map_err(to_js_error)?;
    warn_unknown_location(&data::air_quality_locations(), location_id.as_deref());
    predict_air_quality_json(year, month, location_id.as_deref(), now).map_err(to_js_error)
}

/// Forecast temperature, humidity and rainfall for a month
#[wasm_bindgen]
pub fn predict_weather(
    year: i32,
    month: u32,
    location_id: Option<String>,
    now_year: Option<i32>,
    now_month: Option<u32>,
) -> Result<String, JsValue> {
    let now = resolve_now(now_year, now_month).map_err(to_js_error)?;
    warn_unknown_location(&data::weather_locations(), location_id.as_deref());
    predict_weather_json(year, month, location_id.as_deref(), now).map_err(to_js_error)
}

/// Average AQI per calendar month
#[wasm_bindgen]
pub fn air_quality_monthly_averages() -> Result<String, JsValue> {
    let monthly = monthly_rounded(
        &data::air_quality_series(),
        &DomainConfig::air_quality(),
        Quantity::Primary,
    );
    to_json(&monthly).map_err(to_js_error)
}

/// Average AQI per year
#[wasm_bindgen]
pub fn air_quality_yearly_trend() -> Result<String, JsValue> {
    let yearly = yearly_rounded(
        &data::air_quality_series(),
        &DomainConfig::air_quality(),
        Quantity::Primary,
    );
    to_json(&yearly).map_err(to_js_error)
}

/// Average temperature, humidity and rainfall per calendar month
#[wasm_bindgen]
pub fn weather_monthly_averages() -> Result<String, JsValue> {
    weather_monthly_json().map_err(to_js_error)
}

/// Average temperature per year
#[wasm_bindgen]
pub fn weather_yearly_trend() -> Result<String, JsValue> {
    let yearly = yearly_rounded(&data::weather_series(), &DomainConfig::weather(), Quantity::Primary);
    to_json(&yearly).map_err(to_js_error)
}

/// AQI category label, e.g. "Very Poor"
#[wasm_bindgen]
pub fn classify_aqi_value(aqi: f64) -> String {
    classify_aqi(aqi).to_string()
}

/// Temperature category label, e.g. "Pleasant"
#[wasm_bindgen]
pub fn classify_temperature_value(celsius: f64) -> String {
    classify_temperature(celsius).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const NOW: YearMonth = YearMonth { year: 2025, month: 3 };

    #[test]
    fn test_predict_air_quality_json() {
        let json = predict_air_quality_json(2025, 11, Some("Delhi"), NOW).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["target"]["month"], 11);
        assert_eq!(value["confidence"], 68);
        assert_eq!(
            value["location_narrative"],
            "High pollution from traffic and industry"
        );
    }

    #[test]
    fn test_predict_weather_json() {
        let json = predict_weather_json(2025, 7, None, NOW).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value["predicted_secondary"]["humidity"].is_number());
        assert!(value["predicted_secondary"]["rainfall"].is_number());
        assert_eq!(value["trend_label"], "warming");
    }

    #[test]
    fn test_invalid_month_is_error() {
        let err = predict_air_quality_json(2025, 13, None, NOW).unwrap_err();
        assert!(err.contains("13"));
    }

    #[test]
    fn test_weather_monthly_rollups() {
        let value: Value = serde_json::from_str(&weather_monthly_json().unwrap()).unwrap();
        assert_eq!(value["rainfall"].as_array().map(Vec::len), Some(12));
        assert_eq!(value["temperature"][0]["label"], "Jan");
    }

    #[test]
    fn test_explicit_now_is_validated() {
        assert_eq!(resolve_now(Some(2025), Some(3)), Ok(NOW));
        assert!(resolve_now(Some(2025), Some(0)).unwrap_err().contains("0"));
        assert!(resolve_now(Some(2025), Some(13)).unwrap_err().contains("13"));
        assert!(resolve_now(Some(2025), None).is_err());
        assert!(resolve_now(None, Some(3)).is_err());
    }

    #[test]
    fn test_rollups_use_display_precision() {
        let yearly = yearly_rounded(
            &data::air_quality_series(),
            &DomainConfig::air_quality(),
            Quantity::Primary,
        );
        // 127.5 before rounding
        assert_eq!(yearly[5].mean, 128.0);

        let value: Value = serde_json::from_str(&weather_monthly_json().unwrap()).unwrap();
        let humidity = value["humidity"][0]["value"].as_f64().unwrap();
        assert_eq!(humidity.fract(), 0.0);
    }

    #[test]
    fn test_classify_values() {
        assert_eq!(classify_aqi_value(45.0), "Good");
        assert_eq!(classify_aqi_value(350.0), "Very Poor");
        assert_eq!(classify_temperature_value(22.0), "Pleasant");
        assert_eq!(classify_temperature_value(42.0), "Extreme Heat");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_browser_clock_fallback() {
        let now = resolve_now(None, None).unwrap();
        assert!((1..=12).contains(&now.month));
        assert!(predict_air_quality(2030, 1, None, Some(2025), Some(13)).is_err());
        assert!(predict_air_quality(2030, 1, Some("nowhere".into()), None, None).is_ok());
    }
}
