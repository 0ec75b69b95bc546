//! Core domain types for the carpool matching engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early;
//! the scoring engine itself never re-validates and never panics on
//! well-formed profiles.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod commuter;
pub mod dates;
pub mod schedule;
pub mod scorer;
pub mod time;

pub use commuter::{CommuterId, CommuterProfile, CommuterProfileError, CommuterStatus, Role};
pub use dates::{DateRange, DateRangeError};
pub use schedule::{WeekSchedule, WeekScheduleError, Weekday};
pub use scorer::{MatchScorer, Recommendation};
pub use time::{TimeOfDay, TimeOfDayError};
