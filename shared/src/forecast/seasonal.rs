//! Month-level seasonal profiles

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::HistoricalSeries;
use crate::rollup::{monthly_means, yearly_means};
use crate::types::Quantity;

/// Twelve per-month values, January first
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SeasonalProfile([f64; 12]);

impl SeasonalProfile {
    /// Value for a calendar month, `None` outside 1..=12
    pub fn get(&self, month: u32) -> Option<f64> {
        month
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx as usize))
            .copied()
    }

    pub fn values(&self) -> &[f64; 12] {
        &self.0
    }
}

/// Average deviation of each calendar month from its own year's mean.
///
/// Months with no observations contribute a neutral 0.
pub fn deviation_profile(series: &HistoricalSeries) -> SeasonalProfile {
    let year_means: BTreeMap<i32, f64> = yearly_means(series, &Quantity::Primary)
        .into_iter()
        .map(|y| (y.year, y.mean))
        .collect();

    let mut sums = [(0.0f64, 0usize); 12];
    for obs in series.observations() {
        if let Some(&year_mean) = year_means.get(&obs.year) {
            let slot = &mut sums[(obs.month - 1) as usize];
            slot.0 += obs.primary - year_mean;
            slot.1 += 1;
        }
    }

    let mut profile = [0.0; 12];
    for (value, &(sum, count)) in profile.iter_mut().zip(sums.iter()) {
        if count > 0 {
            *value = sum / count as f64;
        }
    }
    SeasonalProfile(profile)
}

/// Plain per-month average of a secondary quantity, with `default` for
/// months that never recorded it.
pub fn absolute_profile(series: &HistoricalSeries, name: &str, default: f64) -> SeasonalProfile {
    let monthly = monthly_means(series, &Quantity::secondary(name));
    let mut profile = [default; 12];
    for (value, month) in profile.iter_mut().zip(monthly) {
        if let Some(mean) = month.value {
            *value = mean;
        }
    }
    SeasonalProfile(profile)
}
