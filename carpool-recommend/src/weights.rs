//! Scoring weights and hard cutoff thresholds.

use thiserror::Error;

/// Errors raised when configuring the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A weight was NaN, infinite, or negative.
    #[error("weights must be finite and non-negative")]
    InvalidWeight,
    /// The time weight consumed the whole weight budget, leaving the
    /// missing-schedule upscale factor undefined.
    #[error("time weight must be smaller than the sum of the other weights")]
    TimeWeightTooLarge,
}

/// Relative weighting of the score components.
///
/// Destination proximity is weighted twice as heavily as home proximity:
/// carpool groups share the destination leg, so a nearby workplace matters
/// more than a nearby home.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    /// Multiplier on the home-to-home degree distance.
    pub start_distance: f64,
    /// Multiplier on the workplace-to-workplace degree distance.
    pub company_distance: f64,
    /// Multiplier on the asymmetric day-mismatch count.
    pub days: f64,
    /// Multiplier on the half-hour-tolerant commute-time deviation.
    pub time: f64,
    /// Additive penalty for pairing two drivers; drivers need riders, not
    /// other drivers.
    pub driver_pair_penalty: f64,
    /// Additive penalty when either side has no declared schedule, so a
    /// location-perfect candidate with unknown hours still ranks strictly
    /// behind a complete perfect match.
    pub missing_schedule_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            start_distance: 10.0,
            company_distance: 20.0,
            days: 1.0,
            time: 5.0,
            driver_pair_penalty: 2.0,
            missing_schedule_penalty: 0.5,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when any weight is non-finite or negative,
    /// or when the time weight is not strictly smaller than the total of
    /// the distance and day weights plus itself.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let all = [
            self.start_distance,
            self.company_distance,
            self.days,
            self.time,
            self.driver_pair_penalty,
            self.missing_schedule_penalty,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(WeightsError::InvalidWeight);
        }
        if self.time >= self.weight_sum() {
            return Err(WeightsError::TimeWeightTooLarge);
        }
        Ok(self)
    }

    /// Total of the four weighted score terms.
    #[expect(clippy::float_arithmetic, reason = "summing configured weights")]
    #[must_use]
    pub fn weight_sum(self) -> f64 {
        self.start_distance + self.company_distance + self.days + self.time
    }

    /// Upscale factor applied to the distance-and-days score when commute
    /// times are unavailable.
    ///
    /// Scaling by `weight_sum / (weight_sum - time)` keeps schedule-missing
    /// candidates comparable in magnitude to schedule-complete ones while
    /// still penalizing the information gap.
    #[expect(clippy::float_arithmetic, reason = "ratio of configured weights")]
    #[must_use]
    pub fn missing_schedule_scale(self) -> f64 {
        let sum = self.weight_sum();
        sum / (sum - self.time)
    }
}

/// Hard exclusion thresholds; `None` disables a cutoff.
///
/// The defaults reproduce the legacy behaviour, calibrated against the
/// original fixture data: a coordinate delta of `0.04` degrees is included
/// while `0.05` is excluded, two missed days are included while three are
/// excluded, and a two-hour commute-time deviation is the last included
/// step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cutoffs {
    /// Maximum home-to-home distance in degree units.
    pub start_distance_deg: Option<f64>,
    /// Maximum workplace-to-workplace distance in degree units.
    pub company_distance_deg: Option<f64>,
    /// Maximum whole-hour deviation between start times.
    pub start_hour_deviation: Option<u8>,
    /// Maximum whole-hour deviation between end times.
    pub end_hour_deviation: Option<u8>,
    /// Maximum count of reference days the candidate misses.
    pub max_missed_days: Option<usize>,
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self {
            start_distance_deg: Some(0.04),
            company_distance_deg: Some(0.04),
            start_hour_deviation: Some(2),
            end_hour_deviation: Some(2),
            max_missed_days: Some(2),
        }
    }
}

impl Cutoffs {
    /// Disable every cutoff.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            start_distance_deg: None,
            company_distance_deg: None,
            start_hour_deviation: None,
            end_hour_deviation: None,
            max_missed_days: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_weights_validate() {
        assert!(ScoreWeights::default().validate().is_ok());
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(-1.0)]
    fn rejects_unusable_day_weights(#[case] days: f64) {
        let weights = ScoreWeights {
            days,
            ..ScoreWeights::default()
        };
        assert_eq!(weights.validate(), Err(WeightsError::InvalidWeight));
    }

    #[rstest]
    fn rejects_time_weight_consuming_the_budget() {
        let weights = ScoreWeights {
            start_distance: 0.0,
            company_distance: 0.0,
            days: 0.0,
            time: 5.0,
            ..ScoreWeights::default()
        };
        assert_eq!(weights.validate(), Err(WeightsError::TimeWeightTooLarge));
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "test compares a computed ratio")]
    fn default_missing_schedule_scale_matches_legacy_ratio() {
        let scale = ScoreWeights::default().missing_schedule_scale();
        assert!((scale - 36.0 / 31.0).abs() < 1e-12);
    }

    #[rstest]
    fn cutoffs_can_be_disabled_entirely() {
        let cutoffs = Cutoffs::none();
        assert!(cutoffs.start_distance_deg.is_none());
        assert!(cutoffs.max_missed_days.is_none());
    }
}
