//! Validation utilities for forecast inputs
//!
//! Every check here is a fail-fast precondition: the engine runs them before
//! doing any arithmetic so that bad input never turns into `NaN` output.

use crate::error::{ForecastError, Result};
use crate::models::HistoricalSeries;

/// Validate that a month number lies in 1..=12
pub fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(ForecastError::InvalidMonth(month));
    }
    Ok(())
}

/// Validate that a series can support a yearly trend fit
pub fn validate_forecastable(series: &HistoricalSeries) -> Result<()> {
    if series.is_empty() {
        return Err(ForecastError::EmptySeries);
    }
    let distinct_years = series.distinct_years().len();
    if distinct_years < 2 {
        return Err(ForecastError::DegenerateInput { distinct_years });
    }
    Ok(())
}
