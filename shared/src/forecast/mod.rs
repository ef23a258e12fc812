//! Trend + seasonal forecasting engine
//!
//! A forecast is built in a fixed pipeline: fit a straight line through the
//! yearly means, add the target month's seasonal deviation, apply the
//! location offset, clamp to the domain's valid range, then attach a trend
//! label, a horizon-based confidence and a seasonal narrative. Everything
//! is recomputed from the series on each call.

pub mod confidence;
pub mod config;
pub mod domains;
pub mod engine;
pub mod narrative;
pub mod seasonal;
pub mod trend;

pub use confidence::{ConfidenceBuckets, ConfidenceLabels, ConfidenceTier};
pub use config::{DomainConfig, SecondaryQuantity, TrendThresholds, TrendVocabulary};
pub use engine::{ForecastEngine, ForecastRequest};
pub use narrative::{Season, SeasonCalendar, SeasonalNarrative};
pub use seasonal::{absolute_profile, deviation_profile, SeasonalProfile};
pub use trend::{fit_trend, TrendLine};
