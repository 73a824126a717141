//! Core seams for the clustering engine.
//!
//! Kept minimal: anything with a time of day and an optional location can be
//! clustered, and any metric returning meters can drive the clustering.

use crate::itinerary::{Activity, Coordinate, Location, Meal};

/// An itinerary entry that happens at a time of day and maybe at a place.
pub trait Located {
    /// Time of day as a zero-padded `HH:MM` string.
    fn time(&self) -> &str;

    fn location(&self) -> Option<&Location>;

    /// Location, only if its coordinates are usable for distance math.
    fn valid_location(&self) -> Option<&Location> {
        self.location().filter(|location| location.is_valid())
    }
}

impl Located for Activity {
    fn time(&self) -> &str {
        &self.time
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

impl Located for Meal {
    fn time(&self) -> &str {
        &self.time
    }

    fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

/// Distance between two coordinates in meters.
pub trait DistanceMetric {
    fn distance_m(&self, from: &Coordinate, to: &Coordinate) -> f64;
}
