//! Forecast orchestration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::forecast::config::DomainConfig;
use crate::forecast::seasonal::{absolute_profile, deviation_profile};
use crate::forecast::trend::fit_trend;
use crate::models::{HistoricalSeries, Location, LocationRegistry, PredictionResult};
use crate::types::{round_to, YearMonth};
use crate::validation::{validate_forecastable, validate_month};

/// Target of a forecast call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRequest {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub location_id: Option<String>,
}

impl ForecastRequest {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            location_id: None,
        }
    }

    pub fn at_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }
}

/// Stateless forecaster for one domain
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    config: DomainConfig,
}

impl ForecastEngine {
    pub fn new(config: DomainConfig) -> Self {
        Self { config }
    }

    pub fn air_quality() -> Self {
        Self::new(DomainConfig::air_quality())
    }

    pub fn weather() -> Self {
        Self::new(DomainConfig::weather())
    }

    pub fn config(&self) -> &DomainConfig {
        &self.config
    }

    /// Predict the target month from the series.
    ///
    /// `now` anchors the confidence horizon. An unknown location id is not an
    /// error: the prediction is returned without location adjustment.
    pub fn forecast(
        &self,
        series: &HistoricalSeries,
        locations: &LocationRegistry,
        request: &ForecastRequest,
        now: YearMonth,
    ) -> Result<PredictionResult> {
        validate_month(request.month)?;
        validate_forecastable(series)?;

        let config = &self.config;
        let target = YearMonth {
            year: request.year,
            month: request.month,
        };

        let trend = fit_trend(series)?;
        let seasonal = deviation_profile(series);
        let seasonal_adjustment = seasonal.get(request.month).unwrap_or(0.0);

        let baseline = trend.at(request.year);
        let mut predicted = round_to(baseline + seasonal_adjustment, config.precision);

        let location = self.resolve_location(locations, request.location_id.as_deref());
        if let Some(location) = location {
            predicted += location.adjustment;
        }
        let predicted_primary = config.valid_range.clamp(predicted);

        let predicted_secondary = self.predict_secondary(series, location, request.month);

        let trend_label = config.labels.classify(trend.slope, &config.trend);
        let months_ahead = now.months_until(target);
        let confidence = config.confidence.for_months_ahead(months_ahead);

        tracing::debug!(
            domain = config.name,
            %target,
            slope = trend.slope,
            predicted = predicted_primary,
            confidence,
            "forecast computed"
        );

        Ok(PredictionResult {
            target,
            predicted_primary,
            predicted_secondary,
            confidence,
            confidence_label: config.confidence_labels.label(confidence).to_string(),
            months_ahead,
            trend_label,
            trend_slope: trend.slope,
            seasonal_narrative: config.narrative.describe(request.month, seasonal_adjustment),
            location_narrative: location.map(|l| l.description.clone()),
        })
    }

    fn resolve_location<'a>(
        &self,
        locations: &'a LocationRegistry,
        location_id: Option<&str>,
    ) -> Option<&'a Location> {
        let id = location_id?;
        let location = locations.get(id);
        if location.is_none() {
            tracing::warn!(
                domain = self.config.name,
                location_id = id,
                "unknown location, skipping adjustment"
            );
        }
        location
    }

    fn predict_secondary(
        &self,
        series: &HistoricalSeries,
        location: Option<&Location>,
        month: u32,
    ) -> BTreeMap<String, f64> {
        self.config
            .secondary
            .iter()
            .map(|quantity| {
                let profile = absolute_profile(series, quantity.name, quantity.default);
                let profiled = profile.get(month).unwrap_or(quantity.default);
                let mut value = round_to(profiled, quantity.precision);
                if let Some(modifier) =
                    location.and_then(|l| quantity.location_modifiers.get(l.id.as_str()))
                {
                    value += modifier;
                }
                (quantity.name.to_string(), quantity.valid_range.clamp(value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use crate::models::{Observation, TrendLabel};

    const NOW: YearMonth = YearMonth { year: 2025, month: 6 };

    /// Yearly means 142, 137.6, ... 120 across 2020..=2025 with a winter peak
    fn declining_series() -> HistoricalSeries {
        let observations = (2020..=2025)
            .flat_map(|year| {
                let year_mean = 142.0 - (year - 2020) as f64 * 4.4;
                (1..=12).map(move |m| {
                    let seasonal = match m {
                        12 | 1 | 2 => 30.0,
                        6..=8 => -30.0,
                        _ => 0.0,
                    };
                    Observation::new(year, m, year_mean + seasonal)
                })
            })
            .collect();
        HistoricalSeries::new(observations).unwrap()
    }

    fn registry() -> LocationRegistry {
        LocationRegistry::new(vec![Location {
            id: "delhi".into(),
            display_name: "Delhi".into(),
            region: "India".into(),
            adjustment: 45.0,
            description: "High pollution from traffic and industry".into(),
        }])
    }

    #[test]
    fn test_declining_series_is_improving() {
        let engine = ForecastEngine::air_quality();
        let series = declining_series();
        let result = engine
            .forecast(&series, &registry(), &ForecastRequest::new(2026, 1), NOW)
            .unwrap();

        assert_eq!(result.trend_label, TrendLabel::Improving);
        assert!(result.predicted_primary < series.observations()[0].primary);
        assert_eq!(result.seasonal_narrative, "Winter typically sees higher pollution levels");
        assert!(result.location_narrative.is_none());
        assert!(result.predicted_secondary.is_empty());
    }

    #[test]
    fn test_known_location_shifts_prediction() {
        let engine = ForecastEngine::air_quality();
        let series = declining_series();
        let base = engine
            .forecast(&series, &registry(), &ForecastRequest::new(2026, 4), NOW)
            .unwrap();
        let delhi = engine
            .forecast(
                &series,
                &registry(),
                &ForecastRequest::new(2026, 4).at_location("delhi"),
                NOW,
            )
            .unwrap();

        assert_eq!(delhi.predicted_primary - base.predicted_primary, 45.0);
        assert_eq!(
            delhi.location_narrative.as_deref(),
            Some("High pollution from traffic and industry")
        );
    }

    #[test]
    fn test_unknown_location_degrades_gracefully() {
        let engine = ForecastEngine::air_quality();
        let series = declining_series();
        let base = engine
            .forecast(&series, &registry(), &ForecastRequest::new(2026, 4), NOW)
            .unwrap();
        let unknown = engine
            .forecast(
                &series,
                &registry(),
                &ForecastRequest::new(2026, 4).at_location("atlantis"),
                NOW,
            )
            .unwrap();
        assert_eq!(base, unknown);
    }

    #[test]
    fn test_invalid_month_checked_before_series() {
        let engine = ForecastEngine::air_quality();
        let empty = HistoricalSeries::default();
        for month in [0, 13] {
            assert_eq!(
                engine.forecast(&empty, &registry(), &ForecastRequest::new(2026, month), NOW),
                Err(ForecastError::InvalidMonth(month))
            );
        }
    }

    #[test]
    fn test_empty_and_single_year_series_fail() {
        let engine = ForecastEngine::weather();
        let request = ForecastRequest::new(2026, 3);
        assert_eq!(
            engine.forecast(&HistoricalSeries::default(), &registry(), &request, NOW),
            Err(ForecastError::EmptySeries)
        );

        let single = HistoricalSeries::new(
            (1..=12).map(|m| Observation::new(2024, m, 25.0)).collect(),
        )
        .unwrap();
        assert_eq!(
            engine.forecast(&single, &registry(), &request, NOW),
            Err(ForecastError::DegenerateInput { distinct_years: 1 })
        );
    }

    #[test]
    fn test_far_future_is_clamped() {
        let engine = ForecastEngine::air_quality();
        let series = declining_series();
        let result = engine
            .forecast(&series, &registry(), &ForecastRequest::new(2500, 7), NOW)
            .unwrap();
        assert_eq!(result.predicted_primary, 0.0);
        assert_eq!(result.confidence, 30);
        assert_eq!(result.confidence_label, "Very Low");
    }

    #[test]
    fn test_weather_secondaries() {
        let observations = (2020..=2021)
            .flat_map(|year| {
                (1..=12).map(move |m| {
                    Observation::new(year, m, 20.0 + m as f64)
                        .with_secondary("humidity", if m == 7 { 88.0 } else { 40.0 })
                        .with_secondary("rainfall", if m == 7 { 280.0 } else { 10.0 })
                })
            })
            .collect();
        let series = HistoricalSeries::new(observations).unwrap();
        let locations = LocationRegistry::new(vec![Location {
            id: "mumbai".into(),
            display_name: "Mumbai".into(),
            region: "India".into(),
            adjustment: -2.0,
            description: "Coastal".into(),
        }]);

        let engine = ForecastEngine::weather();
        let result = engine
            .forecast(
                &series,
                &locations,
                &ForecastRequest::new(2026, 7).at_location("mumbai"),
                NOW,
            )
            .unwrap();

        assert_eq!(result.predicted_secondary.get("humidity"), Some(&95.0));
        assert_eq!(result.predicted_secondary.get("rainfall"), Some(&280.0));
        assert_eq!(result.trend_label, TrendLabel::Stable);
        assert_eq!(result.confidence, 52);
    }
}
