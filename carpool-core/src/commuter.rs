//! Commuter profiles and their carpool-relevant attributes.
//!
//! A [`CommuterProfile`] is an immutable value object assembled at the
//! boundary from whatever record store the caller uses. Validation happens
//! here, once; the scoring engine trusts every profile it receives.

use geo::Coord;
use thiserror::Error;

use crate::dates::DateRange;
use crate::schedule::WeekSchedule;
use crate::time::TimeOfDay;

/// Opaque commuter identifier.
///
/// Ordering is lexicographic and is used by callers as a stable secondary
/// sort key when scores tie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CommuterId(String);

impl CommuterId {
    /// Wrap an identifier string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommuterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommuterId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for CommuterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// How a commuter participates in carpooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Role {
    /// Offers seats in their own car.
    Driver,
    /// Looks for a seat in someone else's car.
    Rider,
    /// Browses the map without participating; never scored.
    Viewer,
}

impl Role {
    /// Uppercase wire name, matching the upstream records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "DRIVER",
            Self::Rider => "RIDER",
            Self::Viewer => "VIEWER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DRIVER" => Ok(Self::Driver),
            "RIDER" => Ok(Self::Rider),
            "VIEWER" => Ok(Self::Viewer),
            _ => Err(format!("unknown role '{s}'")),
        }
    }
}

/// Whether a profile should appear in matching at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum CommuterStatus {
    /// Eligible for matching.
    Active,
    /// Hidden from matching; callers filter these out before scoring.
    Inactive,
}

/// Errors returned by [`CommuterProfile::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommuterProfileError {
    /// A coordinate component was NaN or infinite.
    #[error("{field} coordinate must be finite, got ({x}, {y})")]
    NonFiniteCoordinate {
        /// Which location field was malformed.
        field: &'static str,
        /// Offending longitude.
        x: f64,
        /// Offending latitude.
        y: f64,
    },
}

/// One commuter's carpool-relevant attributes.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`, already
/// resolved from street addresses by the caller's geocoder. Distances over
/// them are Euclidean in raw degree space; at the metro scale the
/// application targets this is accurate enough for ranking.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::{CommuterProfile, Role, WeekSchedule, Weekday};
///
/// let profile = CommuterProfile::new(
///     "u1".into(),
///     Role::Rider,
///     Coord { x: -71.15, y: 42.30 },
///     Coord { x: -71.06, y: 42.36 },
///     WeekSchedule::from_days(&[Weekday::Monday, Weekday::Friday]),
/// )?;
/// assert!(profile.start_time.is_none());
/// # Ok::<(), carpool_core::CommuterProfileError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommuterProfile {
    /// Unique identifier.
    pub id: CommuterId,
    /// Driver, rider, or viewer.
    pub role: Role,
    /// Free seats; meaningful only for drivers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seat_avail: u32,
    /// Home location.
    pub start: Coord<f64>,
    /// Workplace location.
    pub company: Coord<f64>,
    /// Days of the week the commuter travels.
    pub days_working: WeekSchedule,
    /// Commute start time; `None` means no fixed schedule.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_time: Option<TimeOfDay>,
    /// Commute end time; `None` means no fixed schedule.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_time: Option<TimeOfDay>,
    /// Matching eligibility.
    #[cfg_attr(feature = "serde", serde(default = "default_status"))]
    pub status: CommuterStatus,
    /// Co-op term dates, when declared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coop_range: Option<DateRange>,
    /// Carpool group membership; members of the same group are never
    /// re-matched with each other.
    #[cfg_attr(feature = "serde", serde(default))]
    pub carpool_id: Option<String>,
}

#[cfg(feature = "serde")]
const fn default_status() -> CommuterStatus {
    CommuterStatus::Active
}

impl CommuterProfile {
    /// Validate and construct a profile with no fixed schedule.
    ///
    /// Schedule times, status, seats, and term dates are filled in via the
    /// `with_*` helpers.
    ///
    /// # Errors
    /// Returns [`CommuterProfileError::NonFiniteCoordinate`] when either
    /// location contains a NaN or infinite component.
    pub fn new(
        id: CommuterId,
        role: Role,
        start: Coord<f64>,
        company: Coord<f64>,
        days_working: WeekSchedule,
    ) -> Result<Self, CommuterProfileError> {
        require_finite("start", start)?;
        require_finite("company", company)?;
        Ok(Self {
            id,
            role,
            seat_avail: 0,
            start,
            company,
            days_working,
            start_time: None,
            end_time: None,
            status: CommuterStatus::Active,
            coop_range: None,
            carpool_id: None,
        })
    }

    /// Set both commute times while returning `self` for chaining.
    #[must_use]
    pub const fn with_times(mut self, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    /// Set the free seat count while returning `self` for chaining.
    #[must_use]
    pub const fn with_seats(mut self, seat_avail: u32) -> Self {
        self.seat_avail = seat_avail;
        self
    }

    /// Set the matching status while returning `self` for chaining.
    #[must_use]
    pub const fn with_status(mut self, status: CommuterStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the co-op term dates while returning `self` for chaining.
    #[must_use]
    pub const fn with_coop_range(mut self, range: DateRange) -> Self {
        self.coop_range = Some(range);
        self
    }

    /// Set carpool group membership while returning `self` for chaining.
    #[must_use]
    pub fn with_carpool(mut self, carpool_id: impl Into<String>) -> Self {
        self.carpool_id = Some(carpool_id.into());
        self
    }

    /// Whether both commute times are declared.
    #[must_use]
    pub const fn has_schedule(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}

fn require_finite(field: &'static str, coord: Coord<f64>) -> Result<(), CommuterProfileError> {
    if coord.x.is_finite() && coord.y.is_finite() {
        Ok(())
    } else {
        Err(CommuterProfileError::NonFiniteCoordinate {
            field,
            x: coord.x,
            y: coord.y,
        })
    }
}
