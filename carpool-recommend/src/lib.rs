//! Match-scoring engine for carpool recommendations.
//!
//! The crate provides two complementary scorers over
//! [`CommuterProfile`](carpool_core::CommuterProfile) pairs:
//! - [`MatchEngine`] computes the weighted match distance used by the
//!   personalized recommendations list: hard cutoffs on schedule and
//!   location first, then a weighted sum over start distance, destination
//!   distance, day mismatches, and commute-time deviation.
//! - [`DistanceScorer`] is the cheaper location-only scorer behind the map
//!   preview, with no cutoffs beyond pairing viability.
//!
//! Both implement the [`MatchScorer`](carpool_core::MatchScorer) trait, so
//! callers can rank candidate sets with [`rank`] regardless of which scorer
//! drives the listing.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use carpool_core::{CommuterProfile, MatchScorer, Role, TimeOfDay, WeekSchedule, Weekday};
//! use carpool_recommend::MatchEngine;
//!
//! let days = WeekSchedule::from_days(&[Weekday::Monday, Weekday::Friday]);
//! let reference = CommuterProfile::new(
//!     "driver".into(),
//!     Role::Driver,
//!     Coord { x: -71.15, y: 42.30 },
//!     Coord { x: -71.06, y: 42.36 },
//!     days,
//! )?
//! .with_times(TimeOfDay::new(9, 30)?, TimeOfDay::new(16, 30)?);
//! let candidate = CommuterProfile {
//!     id: "rider".into(),
//!     role: Role::Rider,
//!     ..reference.clone()
//! };
//!
//! let engine = MatchEngine::new();
//! let rec = engine.score(&reference, &candidate).expect("included");
//! assert_eq!(rec.score, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod engine;
mod filter;
mod preview;
mod rank;
mod viability;
mod weights;

pub use distance::{COORD_DEGREES_TO_MILES, degree_distance, degrees_to_miles, miles_to_degrees};
pub use engine::MatchEngine;
pub use filter::{DayMatchMode, DateOverlapMode, FilterConfig, FilterError};
pub use preview::DistanceScorer;
pub use rank::{MAP_RESULTS_CAP, RECOMMENDATIONS_CAP, rank};
pub use viability::pairing_viable;
pub use weights::{Cutoffs, ScoreWeights, WeightsError};
