//! Caller-configurable filtering on top of the fixed legacy cutoffs.
//!
//! The interactive filter panel exposes the same distance, day, and time
//! primitives the scorer uses, but with user-adjustable thresholds. Sliders
//! saturate at a sentinel meaning "no limit": 20 miles for distances and
//! four hours for commute-time deviation, mirroring the upstream UI.

use carpool_core::{DateRange, WeekSchedule};
use thiserror::Error;

use crate::distance::miles_to_degrees;
use crate::weights::Cutoffs;

/// Distance slider maximum; at or beyond this the cap is disabled.
pub const DISTANCE_SLIDER_MAX_MILES: f64 = 20.0;

/// Time-deviation slider maximum; at or beyond this the cap is disabled.
pub const TIME_SLIDER_MAX_HOURS: u8 = 4;

/// How candidate working days are matched against the selected day-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DayMatchMode {
    /// No day-based exclusion; mismatches still feed the weighted score.
    #[default]
    Any,
    /// The candidate must work precisely the selected day-set.
    Exact,
    /// The candidate must share at least `min_shared` of the selected days.
    Flex {
        /// Minimum size of the day-set intersection.
        min_shared: usize,
    },
}

/// How co-op term date ranges are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DateOverlapMode {
    /// Term dates are ignored.
    #[default]
    Any,
    /// The two terms must share at least one day.
    Partial,
    /// One term must wholly contain the other; equal terms qualify.
    Full,
}

/// Errors returned by [`FilterConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A distance cap was NaN, infinite, or negative.
    #[error("distance caps must be finite and non-negative")]
    InvalidDistanceCap,
    /// A flex day threshold exceeded the length of a week.
    #[error("flex day threshold must be at most 7, got {0}")]
    FlexThresholdTooLarge(usize),
}

/// User-adjustable matching thresholds from the filter panel.
///
/// # Examples
/// ```
/// use carpool_recommend::{DayMatchMode, FilterConfig};
///
/// let config = FilterConfig {
///     day_mode: DayMatchMode::Flex { min_shared: 3 },
///     start_distance_miles: 5.0,
///     ..FilterConfig::default()
/// }
/// .validate()?;
/// assert_eq!(config.cutoffs().start_distance_deg, Some(5.0 / 88.0));
/// # Ok::<(), carpool_recommend::FilterError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    /// Day-matching mode.
    pub day_mode: DayMatchMode,
    /// Day-set for `Exact` and `Flex` modes; `None` uses the reference
    /// commuter's own working days.
    pub selected_days: Option<WeekSchedule>,
    /// Home-distance cap in miles; saturates off at
    /// [`DISTANCE_SLIDER_MAX_MILES`].
    pub start_distance_miles: f64,
    /// Workplace-distance cap in miles; saturates off at
    /// [`DISTANCE_SLIDER_MAX_MILES`].
    pub end_distance_miles: f64,
    /// Start-time deviation cap in whole hours; saturates off at
    /// [`TIME_SLIDER_MAX_HOURS`].
    pub start_time_deviation_hours: u8,
    /// End-time deviation cap in whole hours; saturates off at
    /// [`TIME_SLIDER_MAX_HOURS`].
    pub end_time_deviation_hours: u8,
    /// Term date comparison mode.
    pub date_overlap: DateOverlapMode,
    /// Term range for `Partial` and `Full` modes; `None` uses the reference
    /// commuter's own co-op range.
    pub selected_range: Option<DateRange>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            day_mode: DayMatchMode::Any,
            selected_days: None,
            start_distance_miles: DISTANCE_SLIDER_MAX_MILES,
            end_distance_miles: DISTANCE_SLIDER_MAX_MILES,
            start_time_deviation_hours: TIME_SLIDER_MAX_HOURS,
            end_time_deviation_hours: TIME_SLIDER_MAX_HOURS,
            date_overlap: DateOverlapMode::Any,
            selected_range: None,
        }
    }
}

impl FilterConfig {
    /// Validate the configuration and return it.
    ///
    /// # Errors
    /// Returns [`FilterError`] for non-finite or negative distance caps and
    /// for flex thresholds above seven days.
    pub fn validate(self) -> Result<Self, FilterError> {
        let caps = [self.start_distance_miles, self.end_distance_miles];
        if caps.iter().any(|cap| !cap.is_finite() || *cap < 0.0) {
            return Err(FilterError::InvalidDistanceCap);
        }
        if let DayMatchMode::Flex { min_shared } = self.day_mode
            && min_shared > 7
        {
            return Err(FilterError::FlexThresholdTooLarge(min_shared));
        }
        Ok(self)
    }

    /// Translate the filter thresholds into engine cutoffs.
    ///
    /// Day matching is governed by [`FilterConfig::day_mode`] rather than a
    /// missed-day cap, so the resulting cutoffs never exclude on day count.
    #[must_use]
    pub fn cutoffs(&self) -> Cutoffs {
        Cutoffs {
            start_distance_deg: distance_cap(self.start_distance_miles),
            company_distance_deg: distance_cap(self.end_distance_miles),
            start_hour_deviation: deviation_cap(self.start_time_deviation_hours),
            end_hour_deviation: deviation_cap(self.end_time_deviation_hours),
            max_missed_days: None,
        }
    }
}

fn distance_cap(miles: f64) -> Option<f64> {
    (miles < DISTANCE_SLIDER_MAX_MILES).then(|| miles_to_degrees(miles))
}

const fn deviation_cap(hours: u8) -> Option<u8> {
    if hours < TIME_SLIDER_MAX_HOURS {
        Some(hours)
    } else {
        None
    }
}
