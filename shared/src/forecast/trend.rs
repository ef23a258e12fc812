//! Least-squares trend over yearly means

use serde::Serialize;

use crate::error::{ForecastError, Result};
use crate::models::HistoricalSeries;
use crate::rollup::yearly_means;
use crate::types::Quantity;
use crate::validation::validate_forecastable;

/// `mean ≈ slope * year + intercept`
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn at(&self, year: i32) -> f64 {
        self.slope * year as f64 + self.intercept
    }
}

/// Fit an ordinary least-squares line through the primary quantity's yearly
/// means using the closed-form normal equations.
pub fn fit_trend(series: &HistoricalSeries) -> Result<TrendLine> {
    validate_forecastable(series)?;

    let yearly = yearly_means(series, &Quantity::Primary);
    let n = yearly.len() as f64;

    // centred on the mean year and offset by the first mean so sums stay small
    let origin = yearly.first().map_or(0.0, |point| point.mean);
    let mean_year = yearly.iter().map(|point| point.year as f64).sum::<f64>() / n;
    let mean_offset = yearly.iter().map(|point| point.mean - origin).sum::<f64>() / n;

    let (sxy, sxx) = yearly.iter().fold((0.0, 0.0), |(sxy, sxx), point| {
        let dx = point.year as f64 - mean_year;
        (sxy + dx * (point.mean - origin), sxx + dx * dx)
    });

    if sxx == 0.0 {
        return Err(ForecastError::DegenerateInput {
            distinct_years: yearly.len(),
        });
    }

    let slope = sxy / sxx;
    let intercept = origin + mean_offset - slope * mean_year;

    Ok(TrendLine { slope, intercept })
}
