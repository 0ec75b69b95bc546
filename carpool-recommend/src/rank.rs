//! Batch scoring and ordering of candidate sets.

use carpool_core::{CommuterProfile, MatchScorer, Recommendation};

/// Result cap for the personalized recommendations list.
pub const RECOMMENDATIONS_CAP: usize = 20;

/// Result cap for the map display.
pub const MAP_RESULTS_CAP: usize = 50;

/// Score every candidate against `reference` and return the best matches.
///
/// Candidates excluded by the scorer simply do not appear; one excluded
/// candidate never affects the rest of the batch. Survivors are ordered
/// ascending by score with the commuter id as a stable secondary key, then
/// truncated to `limit`.
///
/// The scorer is pure, so the batch is an embarrassingly parallel map;
/// this sequential version is plenty for the candidate-set sizes the
/// application caps at.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carpool_core::{CommuterProfile, Role, WeekSchedule};
/// use carpool_recommend::{MatchEngine, RECOMMENDATIONS_CAP, rank};
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let reference = CommuterProfile::new(
///     "me".into(), Role::Driver, origin, origin, WeekSchedule::default(),
/// )?;
/// let candidates = vec![CommuterProfile {
///     id: "other".into(),
///     role: Role::Rider,
///     ..reference.clone()
/// }];
/// let recs = rank(&MatchEngine::new(), &reference, &candidates, RECOMMENDATIONS_CAP);
/// assert_eq!(recs.len(), 1);
/// # Ok::<(), carpool_core::CommuterProfileError>(())
/// ```
#[must_use]
pub fn rank(
    scorer: &dyn MatchScorer,
    reference: &CommuterProfile,
    candidates: &[CommuterProfile],
    limit: usize,
) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = candidates
        .iter()
        .filter_map(|candidate| scorer.score(reference, candidate))
        .collect();
    recs.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.id.cmp(&b.id)));
    recs.truncate(limit);
    recs
}
