//! Horizon-based confidence scoring

use serde::Serialize;

use crate::types::YearMonth;

/// Confidence granted to every target at most `max_months_ahead` away
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ConfidenceTier {
    pub max_months_ahead: i64,
    pub confidence: u8,
}

/// Piecewise-constant decay table; tiers are checked in order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfidenceBuckets {
    pub tiers: Vec<ConfidenceTier>,
    /// Confidence past the last tier
    pub beyond: u8,
}

impl ConfidenceBuckets {
    pub fn new(tiers: &[(i64, u8)], beyond: u8) -> Self {
        Self {
            tiers: tiers
                .iter()
                .map(|&(max_months_ahead, confidence)| ConfidenceTier {
                    max_months_ahead,
                    confidence,
                })
                .collect(),
            beyond,
        }
    }

    pub fn for_months_ahead(&self, months_ahead: i64) -> u8 {
        self.tiers
            .iter()
            .find(|tier| months_ahead <= tier.max_months_ahead)
            .map_or(self.beyond, |tier| tier.confidence)
            .min(100)
    }

    pub fn confidence(&self, target: YearMonth, now: YearMonth) -> u8 {
        self.for_months_ahead(now.months_until(target))
    }

    /// Confidence for present or past targets
    pub fn highest(&self) -> u8 {
        self.for_months_ahead(i64::MIN)
    }
}

/// Descending score thresholds mapped to display labels
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfidenceLabels {
    pub thresholds: Vec<(u8, &'static str)>,
    pub fallback: &'static str,
}

impl ConfidenceLabels {
    pub fn new(thresholds: &[(u8, &'static str)], fallback: &'static str) -> Self {
        Self {
            thresholds: thresholds.to_vec(),
            fallback,
        }
    }

    pub fn label(&self, confidence: u8) -> &'static str {
        self.thresholds
            .iter()
            .find(|(min, _)| confidence >= *min)
            .map_or(self.fallback, |&(_, label)| label)
    }
}
