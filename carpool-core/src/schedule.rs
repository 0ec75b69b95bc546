//! Weekly commute schedules.
//!
//! A [`WeekSchedule`] records which days of the week a commuter travels to
//! work. The seven-entry invariant is enforced by the type itself: the only
//! fallible path is [`WeekSchedule::from_slice`], which rejects any other
//! length instead of silently truncating or padding.

use thiserror::Error;

/// Days of the week, Sunday-indexed to match the upstream records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    /// Sunday, index 0.
    Sunday,
    /// Monday, index 1.
    Monday,
    /// Tuesday, index 2.
    Tuesday,
    /// Wednesday, index 3.
    Wednesday,
    /// Thursday, index 4.
    Thursday,
    /// Friday, index 5.
    Friday,
    /// Saturday, index 6.
    Saturday,
}

impl Weekday {
    /// All seven days in index order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Position within the week, `0..=6` from Sunday.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Lowercase day name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when constructing a [`WeekSchedule`] from loose input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekScheduleError {
    /// The input did not contain exactly seven entries.
    #[error("week schedule requires exactly 7 entries, got {0}")]
    WrongLength(usize),
    /// A textual entry was neither `0` nor `1`.
    #[error("week schedule entries must be '0' or '1', got {0:?}")]
    InvalidEntry(String),
}

/// Which days of the week a commuter travels, Sunday first.
///
/// # Examples
/// ```
/// use carpool_core::{WeekSchedule, Weekday};
///
/// let weekdays = WeekSchedule::from_days(&[
///     Weekday::Monday,
///     Weekday::Tuesday,
///     Weekday::Wednesday,
///     Weekday::Thursday,
///     Weekday::Friday,
/// ]);
/// assert!(weekdays.works_on(Weekday::Monday));
/// assert!(!weekdays.works_on(Weekday::Sunday));
/// assert_eq!(weekdays.active_days(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekSchedule([bool; 7]);

impl WeekSchedule {
    /// Construct from a fixed-size day array, Sunday first.
    #[must_use]
    pub const fn new(days: [bool; 7]) -> Self {
        Self(days)
    }

    /// Construct from a variable-length slice.
    ///
    /// # Errors
    /// Returns [`WeekScheduleError::WrongLength`] unless exactly seven
    /// entries are supplied.
    pub fn from_slice(days: &[bool]) -> Result<Self, WeekScheduleError> {
        let fixed: [bool; 7] = days
            .try_into()
            .map_err(|_| WeekScheduleError::WrongLength(days.len()))?;
        Ok(Self(fixed))
    }

    /// Construct from a list of working days; unlisted days are off.
    #[must_use]
    pub fn from_days(days: &[Weekday]) -> Self {
        let mut schedule = [false; 7];
        for day in days {
            if let Some(entry) = schedule.get_mut(day.index()) {
                *entry = true;
            }
        }
        Self(schedule)
    }

    /// Whether the commuter travels on `day`.
    #[must_use]
    pub const fn works_on(self, day: Weekday) -> bool {
        let [sun, mon, tue, wed, thu, fri, sat] = self.0;
        match day {
            Weekday::Sunday => sun,
            Weekday::Monday => mon,
            Weekday::Tuesday => tue,
            Weekday::Wednesday => wed,
            Weekday::Thursday => thu,
            Weekday::Friday => fri,
            Weekday::Saturday => sat,
        }
    }

    /// Number of days worked.
    #[must_use]
    pub fn active_days(self) -> usize {
        self.0.iter().filter(|worked| **worked).count()
    }

    /// Days `self` works that `other` does not.
    ///
    /// This is the asymmetric day-mismatch count used by the scoring engine:
    /// extra days worked by `other` never contribute.
    ///
    /// # Examples
    /// ```
    /// use carpool_core::{WeekSchedule, Weekday};
    ///
    /// let full = WeekSchedule::from_days(&[Weekday::Monday, Weekday::Tuesday]);
    /// let partial = WeekSchedule::from_days(&[Weekday::Monday, Weekday::Saturday]);
    /// assert_eq!(full.missed_days(partial), 1);
    /// assert_eq!(partial.missed_days(full), 1);
    /// ```
    #[must_use]
    pub fn missed_days(self, other: Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(mine, theirs)| **mine && !**theirs)
            .count()
    }

    /// Days both schedules work.
    #[must_use]
    pub fn shared_days(self, other: Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(mine, theirs)| **mine && **theirs)
            .count()
    }

    /// Iterate over the week in index order.
    pub fn iter(self) -> impl Iterator<Item = (Weekday, bool)> {
        Weekday::ALL.into_iter().zip(self.0)
    }
}

impl std::str::FromStr for WeekSchedule {
    type Err = WeekScheduleError;

    /// Parse the upstream comma-separated form, e.g. `"0,1,1,1,1,1,0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries: Vec<bool> = s
            .split(',')
            .map(|entry| match entry {
                "0" => Ok(false),
                "1" => Ok(true),
                other => Err(WeekScheduleError::InvalidEntry(other.to_owned())),
            })
            .collect::<Result<_, _>>()?;
        Self::from_slice(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[true; 6])]
    #[case(&[true; 8])]
    #[case(&[])]
    fn from_slice_rejects_wrong_length(#[case] days: &[bool]) {
        assert!(matches!(
            WeekSchedule::from_slice(days),
            Err(WeekScheduleError::WrongLength(_))
        ));
    }

    #[rstest]
    fn parses_upstream_day_strings() {
        let schedule: WeekSchedule = "0,1,1,1,1,1,0".parse().expect("valid schedule");
        assert!(!schedule.works_on(Weekday::Sunday));
        assert!(schedule.works_on(Weekday::Wednesday));
        assert_eq!(schedule.active_days(), 5);
    }

    #[rstest]
    #[case("0,1,1,1,1,1")]
    #[case("0,1,1,1,1,1,0,0")]
    #[case("0,1,2,1,1,1,0")]
    fn rejects_malformed_day_strings(#[case] input: &str) {
        assert!(input.parse::<WeekSchedule>().is_err());
    }

    #[rstest]
    fn missed_days_are_asymmetric() {
        let reference = WeekSchedule::from_days(&[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
        ]);
        let candidate = WeekSchedule::from_days(&[Weekday::Monday, Weekday::Saturday]);
        assert_eq!(reference.missed_days(candidate), 2);
        // Saturday is extra for the candidate, so only one day goes unmatched
        // in the other direction.
        assert_eq!(candidate.missed_days(reference), 1);
    }

    #[rstest]
    fn shared_days_counts_the_intersection() {
        let a = WeekSchedule::from_days(&[Weekday::Monday, Weekday::Tuesday, Weekday::Friday]);
        let b = WeekSchedule::from_days(&[Weekday::Tuesday, Weekday::Friday, Weekday::Saturday]);
        assert_eq!(a.shared_days(b), 2);
        assert_eq!(b.shared_days(a), 2);
    }

    #[rstest]
    fn iteration_follows_sunday_first_order() {
        let schedule = WeekSchedule::from_days(&[Weekday::Sunday]);
        let first = schedule.iter().next().expect("seven entries");
        assert_eq!(first, (Weekday::Sunday, true));
        assert_eq!(schedule.iter().count(), 7);
    }
}
