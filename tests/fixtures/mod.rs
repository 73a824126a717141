//! Test fixtures for trip-geo.
//!
//! Provides realistic test data including:
//! - Beijing landmarks grouped by district
//! - Reference cities across mainland China and abroad
//! - Builders for activities, meals and day plans

pub mod china_locations;

pub use china_locations::*;
