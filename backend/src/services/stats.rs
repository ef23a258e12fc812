//! Summary statistics and chart rollups over the loaded dataset

use std::sync::Arc;

use serde::Serialize;
use shared::forecast::domains::{HUMIDITY, RAINFALL};
use shared::{
    monthly_means, summarize, yearly_means, DomainConfig, HistoricalSeries, MonthlyAverage,
    Quantity, StatsSummary, YearlyAverage,
};

use super::dataset::Dataset;
use crate::error::AppResult;

/// Chart series for one quantity
#[derive(Debug, Clone, Serialize)]
pub struct QuantityTrend {
    pub monthly: Vec<MonthlyAverage>,
    pub yearly: Vec<YearlyAverage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AirQualityTrends {
    pub aqi: QuantityTrend,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherTrends {
    pub temperature: QuantityTrend,
    pub humidity: QuantityTrend,
    pub rainfall: QuantityTrend,
}

#[derive(Clone)]
pub struct StatsService {
    dataset: Arc<Dataset>,
}

impl StatsService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Dashboard summary cards over the raw AQI readings
    pub fn summary(&self) -> AppResult<StatsSummary> {
        let summary = summarize(&self.dataset.air_quality_readings, self.dataset.baseline_year)?;
        Ok(summary)
    }

    pub fn air_quality_trends(&self) -> AirQualityTrends {
        let config = DomainConfig::air_quality();
        AirQualityTrends {
            aqi: self.trend(&self.dataset.air_quality, &config, Quantity::Primary),
        }
    }

    pub fn weather_trends(&self) -> WeatherTrends {
        let series = &self.dataset.weather;
        let config = DomainConfig::weather();
        WeatherTrends {
            temperature: self.trend(series, &config, Quantity::Primary),
            humidity: self.trend(series, &config, Quantity::secondary(HUMIDITY)),
            rainfall: self.trend(series, &config, Quantity::secondary(RAINFALL)),
        }
    }

    /// Rollups rounded to the domain's display precision
    fn trend(
        &self,
        series: &HistoricalSeries,
        config: &DomainConfig,
        quantity: Quantity,
    ) -> QuantityTrend {
        let decimals = config.precision_of(&quantity);
        QuantityTrend {
            monthly: monthly_means(series, &quantity)
                .into_iter()
                .map(|m| m.rounded(decimals))
                .collect(),
            yearly: yearly_means(series, &quantity)
                .into_iter()
                .map(|y| y.rounded(decimals))
                .collect(),
        }
    }
}
