//! Degree-space distance helpers.
//!
//! Distances are Euclidean over raw WGS84 degrees with no latitude
//! correction. At the metro scale the application serves, the error stays
//! well below the granularity that matters for ranking, and the original
//! behaviour depends on it: cutoff constants are calibrated in degree units.

use geo::Coord;

/// Approximate miles per coordinate degree at the target metro's latitude.
///
/// The upstream application used this single factor for both axes when
/// presenting distances to users.
pub const COORD_DEGREES_TO_MILES: f64 = 88.0;

/// Euclidean distance between two coordinates in raw degree units.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_recommend::degree_distance;
///
/// let a = Coord { x: -71.06, y: 42.36 };
/// let b = Coord { x: -71.03, y: 42.36 };
/// assert!((degree_distance(a, b) - 0.03).abs() < 1e-9);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance over degree coordinates"
)]
#[must_use]
pub fn degree_distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx.hypot(dy)
}

/// Convert a degree-space distance to approximate miles.
#[expect(clippy::float_arithmetic, reason = "unit conversion by constant factor")]
#[must_use]
pub fn degrees_to_miles(degrees: f64) -> f64 {
    degrees * COORD_DEGREES_TO_MILES
}

/// Convert a mile distance to approximate degree units.
#[expect(clippy::float_arithmetic, reason = "unit conversion by constant factor")]
#[must_use]
pub fn miles_to_degrees(miles: f64) -> f64 {
    miles / COORD_DEGREES_TO_MILES
}
