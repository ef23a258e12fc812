//! Forecast result models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::YearMonth;

/// Qualitative direction of the long-term trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    Improving,
    Stable,
    Worsening,
    Warming,
    Cooling,
}

impl std::fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendLabel::Improving => write!(f, "improving"),
            TrendLabel::Stable => write!(f, "stable"),
            TrendLabel::Worsening => write!(f, "worsening"),
            TrendLabel::Warming => write!(f, "warming"),
            TrendLabel::Cooling => write!(f, "cooling"),
        }
    }
}

/// Output of a single forecast call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub target: YearMonth,
    pub predicted_primary: f64,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub predicted_secondary: BTreeMap<String, f64>,
    /// Heuristic reliability score, 0-100
    pub confidence: u8,
    pub confidence_label: String,
    pub months_ahead: i64,
    pub trend_label: TrendLabel,
    pub trend_slope: f64,
    pub seasonal_narrative: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_narrative: Option<String>,
}
