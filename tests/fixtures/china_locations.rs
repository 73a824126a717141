//! Real landmark coordinates for realistic test fixtures.
//!
//! Beijing points are as shown on mainland map providers (GCJ-02); reference
//! cities are city-center WGS84 values rounded to three decimals.

#![allow(dead_code)]

use trip_geo::itinerary::{Activity, Coordinate, Location, Meal, MealKind};

/// A named point with (longitude, latitude) coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Landmark {
    pub name: &'static str,
    pub lng: f64,
    pub lat: f64,
}

impl Landmark {
    pub const fn new(name: &'static str, lng: f64, lat: f64) -> Self {
        Self { name, lng, lat }
    }

    pub fn coordinates(&self) -> Coordinate {
        Coordinate::new(self.lng, self.lat)
    }

    pub fn location(&self) -> Location {
        Location::new(self.name, "Beijing", self.coordinates())
    }

    pub fn activity(&self, time: &str) -> Activity {
        Activity::new(self.name, time, Some(self.location()))
    }

    pub fn meal(&self, kind: MealKind, time: &str) -> Meal {
        Meal::new(kind, self.name, time, Some(self.location()))
    }
}

// ============================================================================
// Beijing: central axis
// ============================================================================

pub const TIANANMEN: Landmark = Landmark::new("Tiananmen Square", 116.3975, 39.9055);
pub const FORBIDDEN_CITY: Landmark = Landmark::new("Forbidden City", 116.3972, 39.9163);
pub const JINGSHAN: Landmark = Landmark::new("Jingshan Park", 116.3966, 39.9250);
pub const BEIHAI: Landmark = Landmark::new("Beihai Park", 116.3894, 39.9254);
pub const QIANMEN: Landmark = Landmark::new("Qianmen Street", 116.3980, 39.8990);
pub const WANGFUJING: Landmark = Landmark::new("Wangfujing", 116.4108, 39.9144);
pub const TEMPLE_OF_HEAVEN: Landmark = Landmark::new("Temple of Heaven", 116.4107, 39.8822);

// ============================================================================
// Beijing: northwest
// ============================================================================

pub const SUMMER_PALACE: Landmark = Landmark::new("Summer Palace", 116.2755, 39.9999);
pub const SUMMER_PALACE_CANTEEN: Landmark = Landmark::new("Tingliguan Restaurant", 116.2740, 39.9930);
pub const OLD_SUMMER_PALACE: Landmark = Landmark::new("Old Summer Palace", 116.3004, 40.0083);

// ============================================================================
// Reference cities (WGS84)
// ============================================================================

pub const BEIJING: Landmark = Landmark::new("Beijing", 116.404, 39.915);
pub const SHANGHAI: Landmark = Landmark::new("Shanghai", 121.472, 31.231);
pub const GUANGZHOU: Landmark = Landmark::new("Guangzhou", 113.264, 23.129);
pub const CHENGDU: Landmark = Landmark::new("Chengdu", 104.066, 30.572);
pub const XIAN: Landmark = Landmark::new("Xi'an", 108.940, 34.341);
pub const HANGZHOU: Landmark = Landmark::new("Hangzhou", 120.155, 30.274);
pub const SHENZHEN: Landmark = Landmark::new("Shenzhen", 114.057, 22.543);
pub const WUHAN: Landmark = Landmark::new("Wuhan", 114.305, 30.593);
pub const KUNMING: Landmark = Landmark::new("Kunming", 102.833, 24.880);
pub const URUMQI: Landmark = Landmark::new("Urumqi", 87.617, 43.826);
pub const LHASA: Landmark = Landmark::new("Lhasa", 91.117, 29.647);
pub const CHONGQING: Landmark = Landmark::new("Chongqing", 106.550, 29.563);
pub const HARBIN: Landmark = Landmark::new("Harbin", 126.535, 45.803);

pub const NEW_YORK: Landmark = Landmark::new("New York", -73.9857, 40.7580);
pub const LONDON: Landmark = Landmark::new("London", -0.1276, 51.5072);
pub const TOKYO: Landmark = Landmark::new("Tokyo", 139.6917, 35.6895);
pub const NULL_ISLAND: Landmark = Landmark::new("Null Island", 0.0, 0.0);

/// Cities where the single-step GCJ-02 inverse stays within 2e-5 degrees.
pub const MAJOR_CITIES: &[Landmark] = &[
    BEIJING, SHANGHAI, GUANGZHOU, CHENGDU, XIAN, HANGZHOU, SHENZHEN, WUHAN, KUNMING, URUMQI, LHASA,
    CHONGQING,
];

pub const FOREIGN_CITIES: &[Landmark] = &[NEW_YORK, LONDON, TOKYO, NULL_ISLAND];
