//! Historical dataset loading
//!
//! The dataset is read once at startup, from CSV files when configured and
//! from the embedded reference tables otherwise, and is never mutated after.

use std::path::Path;

use serde::Deserialize;
use shared::data;
use shared::forecast::domains::{HUMIDITY, RAINFALL};
use shared::{HistoricalSeries, LocationRegistry, Observation, Reading};

use crate::config::DatasetConfig;
use crate::error::{AppError, AppResult};

/// Immutable snapshot of everything the handlers forecast from
#[derive(Debug, Clone)]
pub struct Dataset {
    pub air_quality: HistoricalSeries,
    pub air_quality_readings: Vec<Reading>,
    pub weather: HistoricalSeries,
    pub aqi_locations: LocationRegistry,
    pub weather_locations: LocationRegistry,
    pub baseline_year: Option<i32>,
}

/// `City,Year,Month,AQI`
#[derive(Debug, Deserialize)]
struct AirQualityRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "AQI")]
    aqi: f64,
}

/// `Year,Month,AvgTemp,AvgHumidity,AvgRainfall`
#[derive(Debug, Deserialize)]
struct WeatherRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "AvgTemp")]
    avg_temp: f64,
    #[serde(rename = "AvgHumidity")]
    avg_humidity: f64,
    #[serde(rename = "AvgRainfall")]
    avg_rainfall: f64,
}

impl Dataset {
    /// Built-in reference data
    pub fn embedded() -> Self {
        Self {
            air_quality: data::air_quality_series(),
            air_quality_readings: data::air_quality_readings(),
            weather: data::weather_series(),
            aqi_locations: data::air_quality_locations(),
            weather_locations: data::weather_locations(),
            baseline_year: None,
        }
    }

    /// Load according to configuration, falling back to embedded data per source
    pub fn load(config: &DatasetConfig) -> AppResult<Self> {
        let mut dataset = Self::embedded();
        dataset.baseline_year = config.baseline_year;

        if let Some(path) = &config.air_quality_csv {
            let readings = read_air_quality_csv(Path::new(path))?;
            dataset.air_quality = HistoricalSeries::from_readings(&readings)
                .map_err(|e| AppError::Dataset(format!("{}: {}", path, e)))?;
            dataset.air_quality_readings = readings;
            tracing::info!(path = %path, records = dataset.air_quality_readings.len(), "Loaded air quality dataset");
        }

        if let Some(path) = &config.weather_csv {
            dataset.weather = read_weather_csv(Path::new(path))?;
            tracing::info!(path = %path, records = dataset.weather.len(), "Loaded weather dataset");
        }

        Ok(dataset)
    }
}

fn read_air_quality_csv(path: &Path) -> AppResult<Vec<Reading>> {
    let reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::Dataset(format!("{}: {}", path.display(), e)))?;
    parse_air_quality(reader)
}

fn parse_air_quality<R: std::io::Read>(mut reader: csv::Reader<R>) -> AppResult<Vec<Reading>> {
    reader
        .deserialize::<AirQualityRow>()
        .map(|row| {
            let row = row.map_err(|e| AppError::Dataset(e.to_string()))?;
            Ok(Reading {
                location: row.city,
                year: row.year,
                month: row.month,
                value: row.aqi,
            })
        })
        .collect()
}

fn read_weather_csv(path: &Path) -> AppResult<HistoricalSeries> {
    let reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::Dataset(format!("{}: {}", path.display(), e)))?;
    parse_weather(reader)
}

fn parse_weather<R: std::io::Read>(mut reader: csv::Reader<R>) -> AppResult<HistoricalSeries> {
    let observations = reader
        .deserialize::<WeatherRow>()
        .map(|row| {
            let row = row.map_err(|e| AppError::Dataset(e.to_string()))?;
            Ok(Observation::new(row.year, row.month, row.avg_temp)
                .with_secondary(HUMIDITY, row.avg_humidity)
                .with_secondary(RAINFALL, row.avg_rainfall))
        })
        .collect::<AppResult<Vec<_>>>()?;

    HistoricalSeries::new(observations).map_err(|e| AppError::Dataset(e.to_string()))
}
