//! The weighted match-scoring engine.

use carpool_core::{
    CommuterProfile, DateRange, MatchScorer, Recommendation, Role, TimeOfDay, WeekSchedule,
};
use crate::distance::degree_distance;
use crate::filter::{DateOverlapMode, DayMatchMode, FilterConfig};
use crate::weights::{Cutoffs, ScoreWeights, WeightsError};

/// Half-hour grace absorbed before time deviation starts scoring.
///
/// Scheduling noise below thirty minutes should not separate otherwise
/// equal candidates.
const TIME_GRACE_HOURS: f64 = 0.5;

/// Scores candidate commuters against a reference commuter.
///
/// The engine applies hard cutoffs first; any violation excludes the
/// candidate entirely. Survivors receive a weighted match distance where
/// `0.0` is a perfect match. See the crate docs for the full formula.
///
/// Construction either uses the fixed legacy thresholds ([`MatchEngine::new`])
/// or derives thresholds from the interactive filter panel
/// ([`MatchEngine::from_filter`]).
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEngine {
    weights: ScoreWeights,
    cutoffs: Cutoffs,
    day_mode: DayMatchMode,
    selected_days: Option<WeekSchedule>,
    date_overlap: DateOverlapMode,
    selected_range: Option<DateRange>,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Engine with the legacy weights and cutoffs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
            cutoffs: Cutoffs::default(),
            day_mode: DayMatchMode::Any,
            selected_days: None,
            date_overlap: DateOverlapMode::Any,
            selected_range: None,
        }
    }

    /// Engine with caller-supplied weights and the legacy cutoffs.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when the weights fail validation.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
            ..Self::new()
        })
    }

    /// Replace the cutoff thresholds while returning `self` for chaining.
    #[must_use]
    pub const fn with_cutoffs(mut self, cutoffs: Cutoffs) -> Self {
        self.cutoffs = cutoffs;
        self
    }

    /// Engine whose thresholds come from the interactive filter panel.
    ///
    /// Scoring weights stay at their defaults; only exclusion behaviour
    /// changes.
    #[must_use]
    pub fn from_filter(config: FilterConfig) -> Self {
        Self {
            weights: ScoreWeights::default(),
            cutoffs: config.cutoffs(),
            day_mode: config.day_mode,
            selected_days: config.selected_days,
            date_overlap: config.date_overlap,
            selected_range: config.selected_range,
        }
    }

    fn passes_day_rule(&self, reference: &CommuterProfile, candidate: &CommuterProfile) -> bool {
        let selected = self.selected_days.unwrap_or(reference.days_working);
        match self.day_mode {
            DayMatchMode::Any => {
                let missed = reference.days_working.missed_days(candidate.days_working);
                self.cutoffs.max_missed_days.is_none_or(|cap| missed <= cap)
            }
            DayMatchMode::Exact => candidate.days_working == selected,
            DayMatchMode::Flex { min_shared } => {
                selected.shared_days(candidate.days_working) >= min_shared
            }
        }
    }

    fn passes_time_cutoffs(&self, reference: &CommuterProfile, candidate: &CommuterProfile) -> bool {
        within_deviation(
            reference.start_time,
            candidate.start_time,
            self.cutoffs.start_hour_deviation,
        ) && within_deviation(
            reference.end_time,
            candidate.end_time,
            self.cutoffs.end_hour_deviation,
        )
    }

    fn passes_distance_cutoffs(&self, start_dist: f64, company_dist: f64) -> bool {
        within_distance(start_dist, self.cutoffs.start_distance_deg)
            && within_distance(company_dist, self.cutoffs.company_distance_deg)
    }

    fn passes_date_rule(&self, reference: &CommuterProfile, candidate: &CommuterProfile) -> bool {
        let selected = self.selected_range.or(reference.coop_range);
        match self.date_overlap {
            DateOverlapMode::Any => true,
            // A profile without declared term dates cannot demonstrate
            // overlap, so it fails the stricter modes.
            DateOverlapMode::Partial => match (selected, candidate.coop_range) {
                (Some(a), Some(b)) => a.intersects(b),
                _ => false,
            },
            DateOverlapMode::Full => match (selected, candidate.coop_range) {
                (Some(a), Some(b)) => a.contains(b) || b.contains(a),
                _ => false,
            },
        }
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "weighted scoring over distances and small day counts"
    )]
    fn weighted_score(
        &self,
        reference: &CommuterProfile,
        candidate: &CommuterProfile,
        start_dist: f64,
        company_dist: f64,
    ) -> f64 {
        let w = self.weights;
        let missed = reference.days_working.missed_days(candidate.days_working) as f64;
        let base =
            w.start_distance * start_dist + w.company_distance * company_dist + w.days * missed;

        let mut total = match schedule_deviation(reference, candidate) {
            Some(time_score) => base + w.time * time_score,
            None => base * w.missing_schedule_scale() + w.missing_schedule_penalty,
        };

        if reference.role == Role::Driver && candidate.role == Role::Driver {
            total += w.driver_pair_penalty;
        }
        total
    }
}

impl MatchScorer for MatchEngine {
    fn score(
        &self,
        reference: &CommuterProfile,
        candidate: &CommuterProfile,
    ) -> Option<Recommendation> {
        let start_dist = degree_distance(reference.start, candidate.start);
        let company_dist = degree_distance(reference.company, candidate.company);

        if !self.passes_distance_cutoffs(start_dist, company_dist) {
            log::debug!(
                "excluding {}: distance over cap (start {start_dist:.4}, company {company_dist:.4})",
                candidate.id
            );
            return None;
        }
        if !self.passes_time_cutoffs(reference, candidate) {
            log::debug!("excluding {}: commute time deviation over cap", candidate.id);
            return None;
        }
        if !self.passes_day_rule(reference, candidate) {
            log::debug!("excluding {}: working days fail the day rule", candidate.id);
            return None;
        }
        if !self.passes_date_rule(reference, candidate) {
            log::debug!("excluding {}: term dates fail the overlap rule", candidate.id);
            return None;
        }

        Some(Recommendation {
            id: candidate.id.clone(),
            score: self.weighted_score(reference, candidate, start_dist, company_dist),
        })
    }
}

fn within_distance(distance: f64, cap: Option<f64>) -> bool {
    cap.is_none_or(|limit| distance <= limit)
}

fn within_deviation(a: Option<TimeOfDay>, b: Option<TimeOfDay>, cap: Option<u8>) -> bool {
    match (a, b, cap) {
        (Some(mine), Some(theirs), Some(limit)) => mine.hour_distance(theirs) <= limit,
        // Missing fields are non-exclusionary; the weighting path penalizes
        // them instead.
        _ => true,
    }
}

/// Half-hour-tolerant commute-time deviation in fractional hours.
///
/// `None` when either profile lacks a complete schedule.
#[expect(
    clippy::float_arithmetic,
    reason = "deviation is a difference of fractional hours"
)]
fn schedule_deviation(reference: &CommuterProfile, candidate: &CommuterProfile) -> Option<f64> {
    let (ref_start, ref_end) = (reference.start_time?, reference.end_time?);
    let (cand_start, cand_end) = (candidate.start_time?, candidate.end_time?);
    let start_gap = (ref_start.fractional_hours() - cand_start.fractional_hours()).abs();
    let end_gap = (ref_end.fractional_hours() - cand_end.fractional_hours()).abs();
    Some((start_gap - TIME_GRACE_HOURS).max(0.0) + (end_gap - TIME_GRACE_HOURS).max(0.0))
}
