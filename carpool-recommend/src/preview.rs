//! Location-only scoring for the map preview.

use carpool_core::{CommuterProfile, MatchScorer, Recommendation};

use crate::distance::{degree_distance, degrees_to_miles};
use crate::viability::pairing_viable;

/// Scores candidates by combined home and workplace distance alone.
///
/// The map preview shows every viable commuter in the area, so this scorer
/// applies no schedule or distance cutoffs; only [`pairing_viable`] can
/// exclude a candidate. The score is the sum of both legs in approximate
/// miles, lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceScorer;

impl MatchScorer for DistanceScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "score sums the two converted leg distances"
    )]
    fn score(
        &self,
        reference: &CommuterProfile,
        candidate: &CommuterProfile,
    ) -> Option<Recommendation> {
        if !pairing_viable(reference, candidate) {
            return None;
        }
        let start_miles = degrees_to_miles(degree_distance(reference.start, candidate.start));
        let company_miles = degrees_to_miles(degree_distance(reference.company, candidate.company));
        Some(Recommendation {
            id: candidate.id.clone(),
            score: start_miles + company_miles,
        })
    }
}
