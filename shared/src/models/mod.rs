//! Domain models for the Airwise dashboard

mod category;
mod location;
mod observation;
mod prediction;

pub use category::*;
pub use location::*;
pub use observation::*;
pub use prediction::*;
