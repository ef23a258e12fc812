//! Category classification for predicted values

use serde::{Deserialize, Serialize};

/// AQI category reported alongside a prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Satisfactory,
    /// 101-200
    Moderate,
    /// 201-300
    Poor,
    /// 301-400
    VeryPoor,
    /// 400+
    Severe,
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AqiCategory::Good => write!(f, "Good"),
            AqiCategory::Satisfactory => write!(f, "Satisfactory"),
            AqiCategory::Moderate => write!(f, "Moderate"),
            AqiCategory::Poor => write!(f, "Poor"),
            AqiCategory::VeryPoor => write!(f, "Very Poor"),
            AqiCategory::Severe => write!(f, "Severe"),
        }
    }
}

/// Classify an AQI value into its category
pub fn classify_aqi(aqi: f64) -> AqiCategory {
    if aqi <= 50.0 {
        AqiCategory::Good
    } else if aqi <= 100.0 {
        AqiCategory::Satisfactory
    } else if aqi <= 200.0 {
        AqiCategory::Moderate
    } else if aqi <= 300.0 {
        AqiCategory::Poor
    } else if aqi <= 400.0 {
        AqiCategory::VeryPoor
    } else {
        AqiCategory::Severe
    }
}

/// Temperature band reported alongside a weather prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureCategory {
    VeryCold,
    Cold,
    Pleasant,
    Warm,
    Hot,
    ExtremeHeat,
}

impl std::fmt::Display for TemperatureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureCategory::VeryCold => write!(f, "Very Cold"),
            TemperatureCategory::Cold => write!(f, "Cold"),
            TemperatureCategory::Pleasant => write!(f, "Pleasant"),
            TemperatureCategory::Warm => write!(f, "Warm"),
            TemperatureCategory::Hot => write!(f, "Hot"),
            TemperatureCategory::ExtremeHeat => write!(f, "Extreme Heat"),
        }
    }
}

/// Classify a temperature in °C; bands are lower-inclusive
pub fn classify_temperature(celsius: f64) -> TemperatureCategory {
    if celsius < 10.0 {
        TemperatureCategory::VeryCold
    } else if celsius < 18.0 {
        TemperatureCategory::Cold
    } else if celsius < 25.0 {
        TemperatureCategory::Pleasant
    } else if celsius < 32.0 {
        TemperatureCategory::Warm
    } else if celsius < 40.0 {
        TemperatureCategory::Hot
    } else {
        TemperatureCategory::ExtremeHeat
    }
}
