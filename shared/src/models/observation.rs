//! Historical observation models

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::types::{Quantity, YearMonth};

/// One historical monthly record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub month: u32,
    pub primary: f64,
    /// Additional quantities recorded for the same month (humidity, rainfall)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secondary: BTreeMap<String, f64>,
}

impl Observation {
    pub fn new(year: i32, month: u32, primary: f64) -> Self {
        Self {
            year,
            month,
            primary,
            secondary: BTreeMap::new(),
        }
    }

    pub fn with_secondary(mut self, name: impl Into<String>, value: f64) -> Self {
        self.secondary.insert(name.into(), value);
        self
    }

    pub fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Primary and every secondary value are finite
    pub fn is_finite(&self) -> bool {
        self.primary.is_finite() && self.secondary.values().all(|v| v.is_finite())
    }

    /// Value of the requested quantity, `None` if a secondary is not recorded
    pub fn value(&self, quantity: &Quantity) -> Option<f64> {
        match quantity {
            Quantity::Primary => Some(self.primary),
            Quantity::Secondary(name) => self.secondary.get(name).copied(),
        }
    }
}

/// A raw historical record tagged with the place it was measured
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
    pub location: String,
    pub year: i32,
    pub month: u32,
    pub value: f64,
}

impl Reading {
    pub fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }
}

/// Immutable, chronologically ordered monthly series
///
/// Holds at most one observation per (year, month).
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct HistoricalSeries {
    /// Sorted by (year, month), no duplicates
    pub(crate) observations: Vec<Observation>,
}

impl HistoricalSeries {
    pub fn new(mut observations: Vec<Observation>) -> Result<Self> {
        for obs in &observations {
            if !(1..=12).contains(&obs.month) {
                return Err(ForecastError::InvalidMonth(obs.month));
            }
            if !obs.is_finite() {
                return Err(ForecastError::NonFiniteValue {
                    year: obs.year,
                    month: obs.month,
                });
            }
        }

        observations.sort_by_key(|obs| obs.period());

        if let Some(dup) = observations
            .windows(2)
            .find(|pair| pair[0].period() == pair[1].period())
        {
            return Err(ForecastError::DuplicateObservation {
                year: dup[1].year,
                month: dup[1].month,
            });
        }

        Ok(Self { observations })
    }

    /// Collapse per-location readings into one observation per month by
    /// averaging every reading that falls in that month.
    pub fn from_readings(readings: &[Reading]) -> Result<Self> {
        let mut grouped: BTreeMap<YearMonth, (f64, usize)> = BTreeMap::new();
        for reading in readings {
            let period = YearMonth::new(reading.year, reading.month)?;
            let entry = grouped.entry(period).or_insert((0.0, 0));
            entry.0 += reading.value;
            entry.1 += 1;
        }

        let observations = grouped
            .into_iter()
            .map(|(period, (sum, count))| {
                Observation::new(period.year, period.month, sum / count as f64)
            })
            .collect();

        Self::new(observations)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Years present in the series, ascending
    pub fn distinct_years(&self) -> Vec<i32> {
        self.observations
            .iter()
            .map(|obs| obs.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
