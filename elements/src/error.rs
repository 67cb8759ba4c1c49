//! Bounds validation errors.

use std::fmt;

/// Result type for bounds operations.
pub type BoundsResult<T> = Result<T, BoundsError>;

/// Errors that can occur when building or validating sampling bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsError {
    /// Latitude range is empty, inverted, or not finite.
    InvalidLatitudeRange { min: f64, max: f64 },

    /// Longitude range is empty, inverted, or not finite.
    InvalidLongitudeRange { min: f64, max: f64 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitudeRange { min, max } => {
                write!(f, "invalid latitude range: [{min}, {max}]")
            }
            Self::InvalidLongitudeRange { min, max } => {
                write!(f, "invalid longitude range: [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for BoundsError {}
