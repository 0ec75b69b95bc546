//! Co-op term date ranges.
//!
//! Commuters at the co-op employer declare a term start and end; the filter
//! layer compares these as closed calendar-date intervals.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by [`DateRange::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRangeError {
    /// The end date preceded the start date.
    #[error("date range must not end ({end}) before it starts ({start})")]
    Inverted {
        /// Declared first day of the range.
        start: NaiveDate,
        /// Declared last day of the range.
        end: NaiveDate,
    },
}

/// A closed interval of calendar dates, `[start, end]` inclusive.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use carpool_core::DateRange;
///
/// let spring = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 26).unwrap(),
/// )?;
/// assert_eq!(spring.start().to_string(), "2024-01-08");
/// # Ok::<(), carpool_core::DateRangeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDateRange", into = "RawDateRange")
)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unvalidated mirror used to funnel deserialization through
/// [`DateRange::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDateRange> for DateRange {
    type Error = DateRangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

#[cfg(feature = "serde")]
impl From<DateRange> for RawDateRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl DateRange {
    /// Validate and construct a date range.
    ///
    /// A single-day range (`start == end`) is valid.
    ///
    /// # Errors
    /// Returns [`DateRangeError::Inverted`] when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.end
    }

    /// Whether the two closed intervals share at least one day.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether `self` wholly contains `other`; equal ranges qualify.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
