//! Clock times for commute schedules.
//!
//! A [`TimeOfDay`] carries only the hour and minute of a commute start or
//! end. The original records hold full timestamps, but the date component is
//! meaningless for matching and is deliberately unrepresentable here.

use thiserror::Error;

/// An hour-and-minute time of day, date-free.
///
/// # Examples
/// ```
/// use carpool_core::TimeOfDay;
///
/// let nine_thirty: TimeOfDay = "09:30".parse()?;
/// assert_eq!(nine_thirty.hour(), 9);
/// assert_eq!(nine_thirty.minute(), 30);
/// # Ok::<(), carpool_core::TimeOfDayError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

/// Errors returned by [`TimeOfDay::new`] and the `FromStr` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeOfDayError {
    /// Hour was 24 or greater.
    #[error("hour must be below 24, got {0}")]
    HourOutOfRange(u8),
    /// Minute was 60 or greater.
    #[error("minute must be below 60, got {0}")]
    MinuteOutOfRange(u8),
    /// The textual form was not `HH:MM`.
    #[error("time must be formatted as HH:MM, got {0:?}")]
    Malformed(String),
}

impl TimeOfDay {
    /// Validate and construct a time of day.
    ///
    /// # Errors
    /// Returns [`TimeOfDayError`] when the hour or minute is out of range.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TimeOfDayError> {
        if hour >= 24 {
            return Err(TimeOfDayError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(TimeOfDayError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// The hour component, `0..=23`.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// The minute component, `0..=59`.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// The time expressed as fractional hours since midnight.
    ///
    /// # Examples
    /// ```
    /// use carpool_core::TimeOfDay;
    ///
    /// let t = TimeOfDay::new(9, 30)?;
    /// assert!((t.fractional_hours() - 9.5).abs() < f64::EPSILON);
    /// # Ok::<(), carpool_core::TimeOfDayError>(())
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "fractional hours are inherently a float quantity"
    )]
    #[must_use]
    pub fn fractional_hours(self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }

    /// Whole-hour distance to another time, ignoring minutes.
    ///
    /// Matches the legacy cutoff behaviour, which compared hour components
    /// only.
    #[must_use]
    pub const fn hour_distance(self, other: Self) -> u8 {
        self.hour.abs_diff(other.hour)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeOfDayError::Malformed(s.to_owned());
        let (hour_part, minute_part) = s.split_once(':').ok_or_else(malformed)?;
        let hour: u8 = hour_part.parse().map_err(|_| malformed())?;
        let minute: u8 = minute_part.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
