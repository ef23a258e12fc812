//! Per-domain engine configuration

use std::collections::BTreeMap;

use serde::Serialize;

use crate::forecast::confidence::{ConfidenceBuckets, ConfidenceLabels};
use crate::forecast::narrative::SeasonalNarrative;
use crate::models::TrendLabel;
use crate::types::{Quantity, ValueRange};

/// Slope band treated as "no meaningful trend"
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TrendThresholds {
    /// Slopes with `|slope| <= stable_epsilon` are stable
    pub stable_epsilon: f64,
}

/// Labels emitted for rising, flat and falling trends
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrendVocabulary {
    pub rising: TrendLabel,
    pub stable: TrendLabel,
    pub falling: TrendLabel,
}

impl TrendVocabulary {
    pub fn classify(&self, slope: f64, thresholds: &TrendThresholds) -> TrendLabel {
        if slope > thresholds.stable_epsilon {
            self.rising
        } else if slope < -thresholds.stable_epsilon {
            self.falling
        } else {
            self.stable
        }
    }
}

/// A quantity predicted straight from its monthly profile (no trend)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SecondaryQuantity {
    pub name: &'static str,
    /// Profile value for months with no history
    pub default: f64,
    pub valid_range: ValueRange,
    pub precision: u32,
    /// Additive offset per location id
    pub location_modifiers: BTreeMap<&'static str, f64>,
}

/// Everything that differs between the air-quality and weather engines
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DomainConfig {
    pub name: &'static str,
    pub valid_range: ValueRange,
    /// Decimal places kept on the primary prediction
    pub precision: u32,
    pub confidence: ConfidenceBuckets,
    pub confidence_labels: ConfidenceLabels,
    pub trend: TrendThresholds,
    pub labels: TrendVocabulary,
    pub narrative: SeasonalNarrative,
    pub secondary: Vec<SecondaryQuantity>,
}

impl DomainConfig {
    /// Display precision of a quantity; unknown secondaries keep the primary's
    pub fn precision_of(&self, quantity: &Quantity) -> u32 {
        match quantity {
            Quantity::Primary => self.precision,
            Quantity::Secondary(name) => self
                .secondary
                .iter()
                .find(|q| q.name == name.as_str())
                .map_or(self.precision, |q| q.precision),
        }
    }
}
