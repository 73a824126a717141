//! Errors raised while optimizing or (de)serializing itineraries.

use std::fmt;

#[derive(Debug)]
pub enum OptimizeError {
    /// Clustering threshold is negative or not a finite number.
    InvalidThreshold { value: f64 },
    /// The rebuilt day does not hold the same number of items as the input.
    ItemsLost { expected: usize, actual: usize },
    Json(serde_json::Error),
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizeError::InvalidThreshold { value } => {
                write!(f, "clustering threshold must be a finite, non-negative distance, got {}", value)
            }
            OptimizeError::ItemsLost { expected, actual } => {
                write!(f, "optimized day holds {} items, expected {}", actual, expected)
            }
            OptimizeError::Json(err) => write!(f, "invalid itinerary JSON: {}", err),
        }
    }
}

impl std::error::Error for OptimizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptimizeError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for OptimizeError {
    fn from(err: serde_json::Error) -> Self {
        OptimizeError::Json(err)
    }
}
