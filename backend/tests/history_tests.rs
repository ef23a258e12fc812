//! Historical data integration tests
//!
//! Tests for chart rollups, summary statistics and the embedded datasets:
//! - Rollups agree with the averages the engine forecasts from
//! - Summary statistics over per-city readings
//! - Category classification boundaries

use proptest::prelude::*;
use shared::data;
use shared::{
    classify_aqi, classify_temperature, fit_trend, monthly_means, summarize, yearly_means,
    AqiCategory, ForecastEngine, ForecastRequest, HistoricalSeries, Observation, Quantity,
    Reading, TemperatureCategory, TrendLabel, YearMonth,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn city_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Delhi".to_string()),
        Just("Mumbai".to_string()),
        Just("Bengaluru".to_string()),
        Just("Chennai".to_string()),
    ]
}

fn reading_strategy() -> impl Strategy<Value = Reading> {
    (city_strategy(), 2015i32..2025, 1u32..=12, 10.0f64..480.0).prop_map(
        |(location, year, month, value)| Reading {
            location,
            year,
            month,
            value,
        },
    )
}

fn observations_strategy() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::btree_map((2015i32..2025, 1u32..=12), 0.0f64..500.0, 1..60).prop_map(
        |map| {
            map.into_iter()
                .map(|((year, month), value)| Observation::new(year, month, value))
                .collect()
        },
    )
}

// ============================================================================
// Rollups
// ============================================================================

mod rollups {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Monthly rollup always has twelve calendar-ordered entries
        #[test]
        fn prop_monthly_means_calendar_order(observations in observations_strategy()) {
            let series = HistoricalSeries::new(observations).unwrap();
            let monthly = monthly_means(&series, &Quantity::Primary);
            prop_assert_eq!(monthly.len(), 12);
            for (entry, month) in monthly.iter().zip(1u32..) {
                prop_assert_eq!(entry.month, month);
                let recorded = series.observations().iter().any(|o| o.month == month);
                prop_assert_eq!(entry.value.is_some(), recorded);
                if let Some(value) = entry.value {
                    prop_assert!(!value.is_nan());
                }
            }
        }

        /// Yearly rollup has one chronological entry per distinct year
        #[test]
        fn prop_yearly_means_match_distinct_years(observations in observations_strategy()) {
            let series = HistoricalSeries::new(observations).unwrap();
            let years: Vec<i32> = yearly_means(&series, &Quantity::Primary)
                .iter()
                .map(|y| y.year)
                .collect();
            prop_assert_eq!(years, series.distinct_years());
        }

        /// The fitted line goes through the centroid of the yearly means
        #[test]
        fn prop_trend_uses_yearly_rollup(observations in observations_strategy()) {
            let series = HistoricalSeries::new(observations).unwrap();
            let yearly = yearly_means(&series, &Quantity::Primary);
            prop_assume!(yearly.len() >= 2);

            let trend = fit_trend(&series).unwrap();
            let n = yearly.len() as f64;
            let mean_year = yearly.iter().map(|y| y.year as f64).sum::<f64>() / n;
            let mean_value = yearly.iter().map(|y| y.mean).sum::<f64>() / n;
            let at_centroid = trend.slope * mean_year + trend.intercept;
            prop_assert!((at_centroid - mean_value).abs() < 1e-6);
        }
    }

    #[test]
    fn test_missing_secondary_is_none() {
        let series = data::air_quality_series();
        let monthly = monthly_means(&series, &Quantity::secondary("humidity"));
        assert!(monthly.iter().all(|m| m.value.is_none()));
        assert!(yearly_means(&series, &Quantity::secondary("humidity")).is_empty());
    }

    #[test]
    fn test_embedded_aqi_rollups() {
        let series = data::air_quality_series();
        let yearly = yearly_means(&series, &Quantity::Primary);
        assert_eq!(yearly.len(), 6);
        assert_eq!(yearly[5].year, 2025);
        assert_eq!(yearly[5].mean, 127.5);

        let monthly = monthly_means(&series, &Quantity::Primary);
        assert_eq!(monthly[11].label, "Dec");
        assert_eq!(monthly[11].value, Some(137.6));
    }
}

// ============================================================================
// Summary Statistics
// ============================================================================

mod statistics {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Best and worst bound every reading and the average
        #[test]
        fn prop_summary_bounds(readings in prop::collection::vec(reading_strategy(), 1..80)) {
            let summary = summarize(&readings, None).unwrap();
            prop_assert_eq!(summary.total_records, readings.len());
            prop_assert!(summary.best_recorded.value <= summary.historical_average.value + 1e-9);
            prop_assert!(summary.worst_recorded.value >= summary.historical_average.value - 1e-9);
            for reading in &readings {
                prop_assert!(reading.value >= summary.best_recorded.value);
                prop_assert!(reading.value <= summary.worst_recorded.value);
                prop_assert!(reading.period() <= summary.latest.period);
            }
            let counted: usize = summary.location_stats.iter().map(|s| s.records).sum();
            prop_assert_eq!(counted, readings.len());
        }
    }

    #[test]
    fn test_embedded_summary() {
        let summary = summarize(&data::air_quality_readings(), None).unwrap();
        assert_eq!(summary.total_records, 62);
        assert_eq!(summary.latest.period, YearMonth { year: 2025, month: 2 });
        assert_eq!(summary.latest.value, 120.0);
        assert_eq!(summary.best_recorded.value, 48.0);
        assert_eq!(summary.best_recorded.period, YearMonth { year: 2024, month: 5 });
        assert_eq!(summary.worst_recorded.value, 155.0);
        assert_eq!(summary.location_stats.len(), 1);
        assert_eq!(summary.location_stats[0].location, data::ALL_CITIES);
        assert_eq!(summary.improvement.from_year, 2020);
        assert_eq!(summary.improvement.to_year, 2025);
    }

    #[test]
    fn test_baseline_year_override() {
        let readings = data::air_quality_readings();
        let summary = summarize(&readings, Some(2024)).unwrap();
        assert_eq!(summary.improvement.from_year, 2024);
        assert!(summary.improvement.percentage.is_some());

        let summary = summarize(&readings, Some(1999)).unwrap();
        assert_eq!(summary.improvement.percentage, None);
    }
}

// ============================================================================
// Embedded Dataset Forecasts
// ============================================================================

mod embedded_forecasts {
    use super::*;

    const NOW: YearMonth = YearMonth { year: 2025, month: 3 };

    #[test]
    fn test_air_quality_winter_narrative() {
        let result = ForecastEngine::air_quality()
            .forecast(
                &data::air_quality_series(),
                &data::air_quality_locations(),
                &ForecastRequest::new(2025, 12).at_location("delhi"),
                NOW,
            )
            .unwrap();
        assert_eq!(
            result.seasonal_narrative,
            "Winter typically sees higher pollution levels"
        );
        assert_eq!(
            result.location_narrative.as_deref(),
            Some("High pollution from traffic and industry")
        );
        assert_eq!(result.confidence, 68);
    }

    #[test]
    fn test_weather_forecast_is_warming() {
        let result = ForecastEngine::weather()
            .forecast(
                &data::weather_series(),
                &data::weather_locations(),
                &ForecastRequest::new(2026, 5).at_location("delhi"),
                NOW,
            )
            .unwrap();
        assert_eq!(result.trend_label, TrendLabel::Warming);
        // pre-monsoon humidity with the delhi modifier applied
        assert_eq!(result.predicted_secondary.get("humidity"), Some(&25.0));
        assert_eq!(result.predicted_secondary.get("rainfall"), Some(&15.0));
        assert_eq!(
            result.location_narrative.as_deref(),
            Some("Landlocked capital with hot summers and dry winters")
        );
    }
}

// ============================================================================
// Categories
// ============================================================================

mod categories {
    use super::*;

    #[test]
    fn test_aqi_boundaries() {
        assert_eq!(classify_aqi(50.0), AqiCategory::Good);
        assert_eq!(classify_aqi(50.5), AqiCategory::Satisfactory);
        assert_eq!(classify_aqi(200.0), AqiCategory::Moderate);
        assert_eq!(classify_aqi(400.0), AqiCategory::VeryPoor);
        assert_eq!(classify_aqi(401.0), AqiCategory::Severe);
        assert_eq!(AqiCategory::VeryPoor.to_string(), "Very Poor");
    }

    #[test]
    fn test_temperature_boundaries() {
        assert_eq!(classify_temperature(9.9), TemperatureCategory::VeryCold);
        assert_eq!(classify_temperature(18.0), TemperatureCategory::Pleasant);
        assert_eq!(classify_temperature(40.0), TemperatureCategory::ExtremeHeat);
    }
}
