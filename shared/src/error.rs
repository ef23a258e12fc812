//! Error types for the forecasting engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while building a series or producing a forecast.
///
/// Every variant is a deterministic precondition failure: retrying with the
/// same inputs yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// The historical series contains no observations.
    #[error("historical series is empty")]
    EmptySeries,

    /// Fewer than two distinct years, so the yearly trend is undefined.
    #[error("degenerate input: need at least 2 distinct years, got {distinct_years}")]
    DegenerateInput { distinct_years: usize },

    /// Month outside 1..=12.
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Two observations share the same (year, month).
    #[error("duplicate observation for {year}-{month:02}")]
    DuplicateObservation { year: i32, month: u32 },

    /// An observation carries NaN or an infinite value.
    #[error("non-finite value for {year}-{month:02}")]
    NonFiniteValue { year: i32, month: u32 },
}
