//! Shared types and forecasting engine for the Airwise dashboard
//!
//! This crate contains the pure computation shared between the backend, the
//! browser (via WASM), and tests: the historical data model, the
//! trend/seasonal forecasting engine, chart rollups and aggregate statistics.

pub mod data;
pub mod error;
pub mod forecast;
pub mod models;
pub mod rollup;
pub mod stats;
pub mod types;
pub mod validation;

pub use error::{ForecastError, Result};
pub use forecast::*;
pub use models::*;
pub use rollup::*;
pub use stats::*;
pub use types::*;
pub use validation::*;
