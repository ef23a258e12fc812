//! Aggregate statistics over historical readings
//! Backs the dashboard's summary cards: averages, records and improvement

use serde::Serialize;

use crate::error::{ForecastError, Result};
use crate::models::Reading;
use crate::types::{round_to, YearMonth};

/// A single notable reading
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecordedValue {
    pub value: f64,
    pub location: String,
    pub period: YearMonth,
}

impl From<&Reading> for RecordedValue {
    fn from(reading: &Reading) -> Self {
        Self {
            value: reading.value,
            location: reading.location.clone(),
            period: reading.period(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoricalAverage {
    pub value: f64,
    /// "FIRST-LAST" year span
    pub period: String,
}

/// Relative change between the baseline year's and the last year's mean.
/// Positive means values went down.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Improvement {
    pub percentage: Option<f64>,
    pub from_year: i32,
    pub to_year: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationStats {
    pub location: String,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub records: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsSummary {
    pub latest: RecordedValue,
    pub historical_average: HistoricalAverage,
    pub best_recorded: RecordedValue,
    pub worst_recorded: RecordedValue,
    pub improvement: Improvement,
    pub location_stats: Vec<LocationStats>,
    pub total_records: usize,
}

/// Summarize raw readings.
///
/// `baseline_year` defaults to the first year present.
pub fn summarize(readings: &[Reading], baseline_year: Option<i32>) -> Result<StatsSummary> {
    let first = readings.first().ok_or(ForecastError::EmptySeries)?;

    let mut latest = first;
    let mut best = first;
    let mut worst = first;
    let mut total = 0.0;
    let mut first_year = first.year;
    let mut last_year = first.year;

    for reading in readings {
        if reading.period() >= latest.period() {
            latest = reading;
        }
        if reading.value < best.value {
            best = reading;
        }
        if reading.value > worst.value {
            worst = reading;
        }
        total += reading.value;
        first_year = first_year.min(reading.year);
        last_year = last_year.max(reading.year);
    }

    let from_year = baseline_year.unwrap_or(first_year);
    let percentage = match (year_mean(readings, from_year), year_mean(readings, last_year)) {
        (Some(from), Some(to)) if from != 0.0 => Some(round_to((from - to) / from * 100.0, 1)),
        _ => None,
    };

    Ok(StatsSummary {
        latest: latest.into(),
        historical_average: HistoricalAverage {
            value: total / readings.len() as f64,
            period: format!("{}-{}", first_year, last_year),
        },
        best_recorded: best.into(),
        worst_recorded: worst.into(),
        improvement: Improvement {
            percentage,
            from_year,
            to_year: last_year,
        },
        location_stats: location_stats(readings),
        total_records: readings.len(),
    })
}

fn year_mean(readings: &[Reading], year: i32) -> Option<f64> {
    let (sum, count) = readings
        .iter()
        .filter(|r| r.year == year)
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Per-location breakdown in order of first appearance
fn location_stats(readings: &[Reading]) -> Vec<LocationStats> {
    let mut stats: Vec<LocationStats> = Vec::new();
    for reading in readings {
        match stats.iter_mut().find(|s| s.location == reading.location) {
            Some(entry) => {
                // running sum, divided out below
                entry.average += reading.value;
                entry.min = entry.min.min(reading.value);
                entry.max = entry.max.max(reading.value);
                entry.records += 1;
            }
            None => stats.push(LocationStats {
                location: reading.location.clone(),
                average: reading.value,
                min: reading.value,
                max: reading.value,
                records: 1,
            }),
        }
    }

    for entry in &mut stats {
        entry.average /= entry.records as f64;
    }
    stats
}
