//! Facade crate for the carpool matching engine.
//!
//! This crate re-exports the core domain types and the recommendation
//! scorers so applications can depend on a single entry point.

#![forbid(unsafe_code)]

pub use carpool_core::{
    CommuterId, CommuterProfile, CommuterProfileError, CommuterStatus, DateRange, DateRangeError,
    MatchScorer, Recommendation, Role, TimeOfDay, TimeOfDayError, WeekSchedule, WeekScheduleError,
    Weekday,
};

pub use carpool_recommend::{
    COORD_DEGREES_TO_MILES, Cutoffs, DateOverlapMode, DayMatchMode, DistanceScorer, FilterConfig,
    FilterError, MAP_RESULTS_CAP, MatchEngine, RECOMMENDATIONS_CAP, ScoreWeights, WeightsError,
    degree_distance, degrees_to_miles, miles_to_degrees, pairing_viable, rank,
};
