//! The match-scoring contract.
//!
//! A [`MatchScorer`] compares a reference commuter against one candidate and
//! either produces a [`Recommendation`] or excludes the candidate outright.
//! Exclusion is absence, not an error: a candidate past a hard cutoff simply
//! yields `None`.

use crate::commuter::{CommuterId, CommuterProfile};

/// A match-quality score for one candidate, lower is better.
///
/// Emitted scores are always finite and non-negative; a perfect match
/// scores exactly `0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// The scored candidate.
    pub id: CommuterId,
    /// Weighted match distance; `0.0` is a perfect match.
    pub score: f64,
}

/// Score a candidate commuter against a reference commuter.
///
/// Implementations must be pure: no I/O, no shared mutable state, and
/// identical inputs always produce identical output. They must also be
/// `Send + Sync` so batch scoring can map over candidates from any thread.
///
/// Callers are responsible for pre-filtering the candidate set (active,
/// onboarded, not the reference itself, opposite role) and for sorting the
/// surviving recommendations ascending by score.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use carpool_core::{CommuterProfile, MatchScorer, Recommendation, Role, WeekSchedule};
///
/// struct ZeroScorer;
///
/// impl MatchScorer for ZeroScorer {
///     fn score(
///         &self,
///         _reference: &CommuterProfile,
///         candidate: &CommuterProfile,
///     ) -> Option<Recommendation> {
///         Some(Recommendation {
///             id: candidate.id.clone(),
///             score: 0.0,
///         })
///     }
/// }
///
/// let a = CommuterProfile::new(
///     "a".into(),
///     Role::Driver,
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 0.0, y: 0.0 },
///     WeekSchedule::default(),
/// )?;
/// let b = CommuterProfile::new(
///     "b".into(),
///     Role::Rider,
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 0.0, y: 0.0 },
///     WeekSchedule::default(),
/// )?;
/// let rec = ZeroScorer.score(&a, &b).expect("included");
/// assert_eq!(rec.id.as_str(), "b");
/// # Ok::<(), carpool_core::CommuterProfileError>(())
/// ```
pub trait MatchScorer: Send + Sync {
    /// Score `candidate` relative to `reference`.
    ///
    /// Returns `None` when the candidate violates a hard cutoff.
    fn score(
        &self,
        reference: &CommuterProfile,
        candidate: &CommuterProfile,
    ) -> Option<Recommendation>;
}
