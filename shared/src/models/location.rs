//! Location registry models

use serde::{Deserialize, Serialize};

/// A place the dashboard can forecast for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: String,
    pub display_name: String,
    pub region: String,
    /// Additive offset applied to the primary prediction
    pub adjustment: f64,
    pub description: String,
}

/// Immutable lookup table of locations keyed by id
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    /// Build a registry; a later entry with an already-seen id is ignored.
    pub fn new(locations: Vec<Location>) -> Self {
        let mut unique: Vec<Location> = Vec::with_capacity(locations.len());
        for location in locations {
            if unique.iter().all(|l| l.id != location.id) {
                unique.push(location);
            }
        }
        Self { locations: unique }
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
