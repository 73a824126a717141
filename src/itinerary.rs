//! Itinerary value objects.
//!
//! These mirror the JSON documents exchanged with the trip-generation and
//! rendering services. Coordinates are stored as (longitude, latitude) in
//! whatever frame the producer used; for mapping-provider data that is GCJ-02.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::OptimizeError;

/// A (longitude, latitude) pair in decimal degrees.
///
/// A missing or `null` component loads as NaN, which fails [`is_valid`]
/// instead of rejecting the whole document.
///
/// [`is_valid`]: Coordinate::is_valid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(default = "unknown_degrees", deserialize_with = "nullable_degrees")]
    pub lng: f64,
    #[serde(default = "unknown_degrees", deserialize_with = "nullable_degrees")]
    pub lat: f64,
}

fn unknown_degrees() -> f64 {
    f64::NAN
}

fn nullable_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Coordinate {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Placeholder for a location that came without coordinates.
    pub const fn unknown() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// True when both components are finite and within geographic range.
    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// Great-circle distance to another coordinate in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::haversine::haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

/// A named point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "Coordinate::unknown")]
    pub coordinates: Coordinate,
}

impl Location {
    pub fn new(name: impl Into<String>, address: impl Into<String>, coordinates: Coordinate) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            coordinates,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.coordinates.is_valid()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Time of day, `HH:MM`.
    pub time: String,
    /// Expected duration in minutes.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Activity {
    pub fn new(name: impl Into<String>, time: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            time: time.into(),
            duration_minutes: None,
            cost: None,
            location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "type")]
    pub kind: MealKind,
    /// Restaurant or venue name.
    pub name: String,
    /// Time of day, `HH:MM`.
    pub time: String,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Meal {
    pub fn new(
        kind: MealKind,
        name: impl Into<String>,
        time: impl Into<String>,
        location: Option<Location>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            time: time.into(),
            cost: None,
            location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub name: String,
    #[serde(default)]
    pub cost_per_night: Option<f64>,
    #[serde(default)]
    pub location: Option<Location>,
}

/// One day of an itinerary.
///
/// The optimizer only ever rewrites `activities` and `meals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub accommodation: Option<Accommodation>,
}

impl DayPlan {
    pub fn new(day: u32, activities: Vec<Activity>, meals: Vec<Meal>) -> Self {
        Self {
            day,
            date: String::new(),
            theme: String::new(),
            activities,
            meals,
            accommodation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Itinerary {
    pub fn new(days: Vec<DayPlan>) -> Self {
        Self {
            days,
            total_cost: None,
            currency: None,
            notes: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, OptimizeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, OptimizeError> {
        Ok(serde_json::to_string(self)?)
    }
}
