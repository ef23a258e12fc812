//! HTTP handlers for the Airwise API

pub mod health;
pub mod locations;
pub mod prediction;
pub mod stats;
pub mod trends;

pub use health::*;
pub use locations::*;
pub use prediction::*;
pub use stats::*;
pub use trends::*;
