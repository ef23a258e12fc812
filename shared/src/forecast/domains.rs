//! The two shipped engine instantiations
//!
//! Air quality and weather share the pipeline but not its tuning: each
//! keeps its own confidence table, clamp range and trend vocabulary.

use std::collections::BTreeMap;

use crate::forecast::confidence::{ConfidenceBuckets, ConfidenceLabels};
use crate::forecast::config::{DomainConfig, SecondaryQuantity, TrendThresholds, TrendVocabulary};
use crate::forecast::narrative::{Season, SeasonCalendar, SeasonalNarrative};
use crate::models::TrendLabel;
use crate::types::ValueRange;

pub const AIR_QUALITY_RANGE: ValueRange = ValueRange::new(0.0, 500.0);

/// (max months ahead, confidence) for air quality
pub const AIR_QUALITY_CONFIDENCE: [(i64, u8); 6] =
    [(0, 95), (3, 88), (6, 78), (12, 68), (24, 55), (36, 42)];
pub const AIR_QUALITY_CONFIDENCE_BEYOND: u8 = 30;

/// (max months ahead, confidence) for weather
pub const WEATHER_CONFIDENCE: [(i64, u8); 6] =
    [(0, 92), (3, 85), (6, 75), (12, 65), (24, 52), (36, 40)];
pub const WEATHER_CONFIDENCE_BEYOND: u8 = 28;

/// AQI points per year below which the trend is stable
pub const AIR_QUALITY_STABLE_SLOPE: f64 = 2.0;
/// °C per year below which the trend is stable
pub const WEATHER_STABLE_SLOPE: f64 = 0.1;

pub const AIR_QUALITY_NARRATIVE_THRESHOLD: f64 = 20.0;
pub const WEATHER_NARRATIVE_THRESHOLD: f64 = 2.0;

pub const HUMIDITY: &str = "humidity";
pub const RAINFALL: &str = "rainfall";

/// Humidity assumed for a month with no history, in percent
pub const DEFAULT_HUMIDITY: f64 = 50.0;
pub const DEFAULT_RAINFALL: f64 = 0.0;
pub const HUMIDITY_RANGE: ValueRange = ValueRange::new(20.0, 95.0);
pub const RAINFALL_RANGE: ValueRange = ValueRange::at_least(0.0);

impl DomainConfig {
    pub fn air_quality() -> Self {
        Self {
            name: "air_quality",
            valid_range: AIR_QUALITY_RANGE,
            precision: 0,
            confidence: ConfidenceBuckets::new(
                &AIR_QUALITY_CONFIDENCE,
                AIR_QUALITY_CONFIDENCE_BEYOND,
            ),
            confidence_labels: ConfidenceLabels::new(
                &[(85, "High"), (65, "Moderate"), (45, "Low")],
                "Very Low",
            ),
            trend: TrendThresholds {
                stable_epsilon: AIR_QUALITY_STABLE_SLOPE,
            },
            labels: TrendVocabulary {
                rising: TrendLabel::Worsening,
                stable: TrendLabel::Stable,
                falling: TrendLabel::Improving,
            },
            narrative: SeasonalNarrative {
                calendar: SeasonCalendar {
                    seasons: vec![
                        Season::new("Spring", 3, 5, ""),
                        Season::new("Summer", 6, 8, ""),
                        Season::new("Fall", 9, 11, ""),
                    ],
                    fallback: Season::new("Winter", 12, 2, ""),
                },
                elevated_above: AIR_QUALITY_NARRATIVE_THRESHOLD,
                reduced_below: -AIR_QUALITY_NARRATIVE_THRESHOLD,
                elevated: "{season} typically sees higher pollution levels",
                reduced: "{season} typically has better air quality",
                moderate: "{season} shows moderate air quality patterns",
            },
            secondary: Vec::new(),
        }
    }

    pub fn weather() -> Self {
        Self {
            name: "weather",
            valid_range: ValueRange::OPEN,
            precision: 1,
            confidence: ConfidenceBuckets::new(&WEATHER_CONFIDENCE, WEATHER_CONFIDENCE_BEYOND),
            confidence_labels: ConfidenceLabels::new(
                &[(85, "Very High"), (70, "High"), (55, "Moderate"), (40, "Low")],
                "Very Low",
            ),
            trend: TrendThresholds {
                stable_epsilon: WEATHER_STABLE_SLOPE,
            },
            labels: TrendVocabulary {
                rising: TrendLabel::Warming,
                stable: TrendLabel::Stable,
                falling: TrendLabel::Cooling,
            },
            narrative: SeasonalNarrative {
                calendar: SeasonCalendar {
                    seasons: vec![
                        Season::new("Pre-monsoon", 3, 5, "hot and dry conditions"),
                        Season::new("Monsoon", 6, 9, "heavy rainfall expected"),
                        Season::new("Post-monsoon", 10, 11, "retreating monsoon patterns"),
                    ],
                    fallback: Season::new("Winter", 12, 2, "cool and dry weather"),
                },
                elevated_above: WEATHER_NARRATIVE_THRESHOLD,
                reduced_below: -WEATHER_NARRATIVE_THRESHOLD,
                elevated: "{season} season with {outlook}, typically warmer than the yearly average",
                reduced: "{season} season with {outlook}, typically cooler than the yearly average",
                moderate: "{season} season with {outlook}, close to the yearly average",
            },
            secondary: vec![
                SecondaryQuantity {
                    name: HUMIDITY,
                    default: DEFAULT_HUMIDITY,
                    valid_range: HUMIDITY_RANGE,
                    precision: 0,
                    location_modifiers: BTreeMap::from([
                        ("delhi", -10.0),
                        ("mumbai", 15.0),
                        ("bengaluru", 5.0),
                    ]),
                },
                SecondaryQuantity {
                    name: RAINFALL,
                    default: DEFAULT_RAINFALL,
                    valid_range: RAINFALL_RANGE,
                    precision: 0,
                    location_modifiers: BTreeMap::new(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_tables_differ() {
        let aqi = DomainConfig::air_quality();
        let weather = DomainConfig::weather();
        assert_eq!(aqi.confidence.highest(), 95);
        assert_eq!(weather.confidence.highest(), 92);
        assert_eq!(aqi.confidence.for_months_ahead(100), 30);
        assert_eq!(weather.confidence.for_months_ahead(100), 28);
        assert_ne!(aqi.valid_range, weather.valid_range);
    }

    #[test]
    fn test_display_precision_per_quantity() {
        use crate::types::Quantity;

        let weather = DomainConfig::weather();
        assert_eq!(DomainConfig::air_quality().precision_of(&Quantity::Primary), 0);
        assert_eq!(weather.precision_of(&Quantity::Primary), 1);
        assert_eq!(weather.precision_of(&Quantity::secondary(HUMIDITY)), 0);
        assert_eq!(weather.precision_of(&Quantity::secondary("wind")), 1);
    }

    #[test]
    fn test_trend_vocabulary() {
        let aqi = DomainConfig::air_quality();
        assert_eq!(aqi.labels.classify(-2.5, &aqi.trend), TrendLabel::Improving);
        assert_eq!(aqi.labels.classify(2.0, &aqi.trend), TrendLabel::Stable);
        assert_eq!(aqi.labels.classify(3.0, &aqi.trend), TrendLabel::Worsening);

        let weather = DomainConfig::weather();
        assert_eq!(weather.labels.classify(0.15, &weather.trend), TrendLabel::Warming);
        assert_eq!(weather.labels.classify(-0.2, &weather.trend), TrendLabel::Cooling);
        assert_eq!(weather.labels.classify(0.0, &weather.trend), TrendLabel::Stable);
    }

    #[test]
    fn test_weather_narrative_uses_monsoon_calendar() {
        let weather = DomainConfig::weather();
        assert_eq!(
            weather.narrative.describe(7, -0.5),
            "Monsoon season with heavy rainfall expected, close to the yearly average"
        );
        assert_eq!(
            weather.narrative.describe(5, 6.0),
            "Pre-monsoon season with hot and dry conditions, typically warmer than the yearly average"
        );
    }
}
