//! Services for the Airwise server

pub mod dataset;
pub mod prediction;
pub mod stats;

pub use dataset::Dataset;
pub use prediction::PredictionService;
pub use stats::StatsService;
