//! Monthly and yearly rollups
//!
//! The same grouping backs the chart endpoints and the engine's own trend
//! and seasonal computations, so the numbers a chart shows always match the
//! averages a forecast was built from.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::HistoricalSeries;
use crate::types::{month_abbrev, round_to, Quantity};

/// Mean of one quantity over all recorded months of a year
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearlyAverage {
    pub year: i32,
    pub mean: f64,
}

impl YearlyAverage {
    pub fn rounded(self, decimals: u32) -> Self {
        Self {
            mean: round_to(self.mean, decimals),
            ..self
        }
    }
}

/// Mean of one quantity for a calendar month across all years
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyAverage {
    pub month: u32,
    pub label: &'static str,
    /// `None` when no year recorded this month
    pub value: Option<f64>,
}

impl MonthlyAverage {
    pub fn rounded(self, decimals: u32) -> Self {
        Self {
            value: self.value.map(|v| round_to(v, decimals)),
            ..self
        }
    }
}

/// One entry per distinct year, chronological
pub fn yearly_means(series: &HistoricalSeries, quantity: &Quantity) -> Vec<YearlyAverage> {
    let mut groups: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for obs in series.observations() {
        if let Some(value) = obs.value(quantity) {
            let entry = groups.entry(obs.year).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(year, (sum, count))| YearlyAverage {
            year,
            mean: sum / count as f64,
        })
        .collect()
}

/// Twelve entries, January first
pub fn monthly_means(series: &HistoricalSeries, quantity: &Quantity) -> Vec<MonthlyAverage> {
    let mut sums = [(0.0f64, 0usize); 12];
    for obs in series.observations() {
        if let Some(value) = obs.value(quantity) {
            let slot = &mut sums[(obs.month - 1) as usize];
            slot.0 += value;
            slot.1 += 1;
        }
    }

    sums.iter()
        .zip(1u32..)
        .map(|(&(sum, count), month)| MonthlyAverage {
            month,
            label: month_abbrev(month).unwrap_or_default(),
            value: (count > 0).then(|| sum / count as f64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;

    fn series() -> HistoricalSeries {
        HistoricalSeries::new(vec![
            Observation::new(2021, 1, 100.0).with_secondary("rainfall", 10.0),
            Observation::new(2021, 2, 80.0),
            Observation::new(2020, 1, 140.0).with_secondary("rainfall", 20.0),
            Observation::new(2020, 2, 120.0).with_secondary("rainfall", 6.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_yearly_means_are_chronological() {
        let yearly = yearly_means(&series(), &Quantity::Primary);
        assert_eq!(
            yearly,
            vec![
                YearlyAverage { year: 2020, mean: 130.0 },
                YearlyAverage { year: 2021, mean: 90.0 },
            ]
        );
    }

    #[test]
    fn test_monthly_means_cover_all_months() {
        let monthly = monthly_means(&series(), &Quantity::Primary);
        assert_eq!(monthly.len(), 12);
        assert_eq!(monthly[0].label, "Jan");
        assert_eq!(monthly[0].value, Some(120.0));
        assert_eq!(monthly[1].value, Some(100.0));
        assert!(monthly[2..].iter().all(|m| m.value.is_none()));
    }

    #[test]
    fn test_rounded_keeps_missing_months() {
        let series = HistoricalSeries::new(vec![
            Observation::new(2020, 1, 127.0),
            Observation::new(2021, 1, 128.0),
            Observation::new(2021, 2, 128.0),
        ])
        .unwrap();
        let monthly: Vec<_> = monthly_means(&series, &Quantity::Primary)
            .into_iter()
            .map(|m| m.rounded(0))
            .collect();
        assert_eq!(monthly[0].value, Some(128.0));
        assert_eq!(monthly[2].value, None);

        let yearly = YearlyAverage { year: 2020, mean: 27.349 }.rounded(1);
        assert_eq!(yearly.mean, 27.3);
    }

    #[test]
    fn test_secondary_skips_missing_values() {
        let rainfall = Quantity::secondary("rainfall");
        let yearly = yearly_means(&series(), &rainfall);
        assert_eq!(yearly[0].mean, 13.0);
        assert_eq!(yearly[1].mean, 10.0);

        let monthly = monthly_means(&series(), &rainfall);
        assert_eq!(monthly[1].value, Some(6.0));
    }
}
