//! trip-geo: geospatial refinement for generated trip itineraries.
//!
//! WGS84 <-> GCJ-02 coordinate conversion, great-circle distance, and greedy
//! spatial clustering that reorders each day to cut down on backtracking.

pub mod traits;
pub mod itinerary;
pub mod haversine;
pub mod coords;
pub mod cluster;
pub mod optimizer;
pub mod error;
