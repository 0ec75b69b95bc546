//! Role and seat compatibility between two profiles.

use carpool_core::{CommuterProfile, Role};

/// Whether a pairing could ever form a carpool.
///
/// Mirrors the guard the application applies before presenting a candidate
/// on the map: riders need a driver with free seats, a seatless driver has
/// nothing to offer, viewers never participate, and members of the same
/// carpool group are not re-matched.
///
/// The weighted scoring engine does not consult this predicate; its role
/// handling is limited to deprioritizing driver-driver pairs so callers can
/// still surface them when the candidate pool runs dry.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::{CommuterProfile, Role, WeekSchedule};
/// use carpool_recommend::pairing_viable;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let rider = CommuterProfile::new(
///     "r".into(), Role::Rider, origin, origin, WeekSchedule::default(),
/// )?;
/// let seatless = CommuterProfile::new(
///     "d".into(), Role::Driver, origin, origin, WeekSchedule::default(),
/// )?;
/// assert!(!pairing_viable(&rider, &seatless));
/// assert!(pairing_viable(&rider, &seatless.clone().with_seats(2)));
/// # Ok::<(), carpool_core::CommuterProfileError>(())
/// ```
#[must_use]
pub fn pairing_viable(reference: &CommuterProfile, candidate: &CommuterProfile) -> bool {
    if reference.role == Role::Viewer || candidate.role == Role::Viewer {
        return false;
    }
    if reference.role == Role::Rider
        && (candidate.role == Role::Rider || candidate.seat_avail == 0)
    {
        return false;
    }
    if reference.role == Role::Driver && candidate.role == Role::Driver {
        return false;
    }
    if reference.role == Role::Driver && reference.seat_avail == 0 {
        return false;
    }
    if let (Some(mine), Some(theirs)) = (&reference.carpool_id, &candidate.carpool_id)
        && mine == theirs
    {
        return false;
    }
    true
}
