#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Cutoff boundary coverage for the default engine thresholds.
//!
//! Each candidate perturbs exactly one dimension of an otherwise perfect
//! match: coordinates inside and beyond the 0.04-degree cap, working days
//! on either side of the two-missed-days cap, and start times on either
//! side of the two-hour cap.

use carpool_core::{CommuterProfile, MatchScorer, Role, TimeOfDay, WeekSchedule, Weekday};
use carpool_recommend::{MatchEngine, rank};
use geo::Coord;
use rstest::{fixture, rstest};

const TOLERANCE: f64 = 1e-9;

fn time(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).expect("valid time")
}

fn weekdays() -> WeekSchedule {
    WeekSchedule::from_days(&[
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ])
}

#[fixture]
fn reference() -> CommuterProfile {
    CommuterProfile::new(
        "driver".into(),
        Role::Driver,
        Coord { x: -71.15, y: 42.30 },
        Coord {
            x: -71.06,
            y: 42.355_625,
        },
        weekdays(),
    )
    .expect("valid profile")
    .with_seats(2)
    .with_times(time(9, 30), time(16, 30))
}

fn rider(reference: &CommuterProfile, id: &str) -> CommuterProfile {
    CommuterProfile {
        id: id.into(),
        role: Role::Rider,
        seat_avail: 0,
        ..reference.clone()
    }
}

#[expect(clippy::float_arithmetic, reason = "fixtures shift coordinates")]
fn with_start_offset(reference: &CommuterProfile, id: &str, dx: f64) -> CommuterProfile {
    let mut candidate = rider(reference, id);
    candidate.start.x += dx;
    candidate
}

#[expect(clippy::float_arithmetic, reason = "fixtures shift coordinates")]
fn with_company_offset(reference: &CommuterProfile, id: &str, dx: f64) -> CommuterProfile {
    let mut candidate = rider(reference, id);
    candidate.company.x += dx;
    candidate
}

#[rstest]
fn identical_rider_scores_zero(reference: CommuterProfile) {
    let rec = MatchEngine::new()
        .score(&reference, &rider(&reference, "twin"))
        .expect("included");
    assert!(rec.score.abs() < TOLERANCE);
}

#[rstest]
#[case(0.03, true)]
#[case(0.05, false)]
fn start_distance_boundary(reference: CommuterProfile, #[case] dx: f64, #[case] included: bool) {
    let candidate = with_start_offset(&reference, "start-shift", dx);
    let result = MatchEngine::new().score(&reference, &candidate);
    assert_eq!(result.is_some(), included);
}

#[rstest]
#[case(0.03, true)]
#[case(0.05, false)]
fn company_distance_boundary(reference: CommuterProfile, #[case] dx: f64, #[case] included: bool) {
    let candidate = with_company_offset(&reference, "company-shift", dx);
    let result = MatchEngine::new().score(&reference, &candidate);
    assert_eq!(result.is_some(), included);
}

/// The distance cap is a closed bound: a candidate sitting exactly on it
/// stays in. Coordinates here are chosen so the deltas are exact in
/// floating point.
#[rstest]
fn distance_cap_is_inclusive() {
    let origin = Coord { x: 0.0, y: 0.0 };
    let reference = CommuterProfile::new(
        "driver".into(),
        Role::Driver,
        origin,
        origin,
        weekdays(),
    )
    .expect("valid profile")
    .with_seats(2)
    .with_times(time(9, 30), time(16, 30));

    let mut on_cap = rider(&reference, "on-cap");
    on_cap.start.x = 0.04;
    assert!(MatchEngine::new().score(&reference, &on_cap).is_some());

    let mut past_cap = rider(&reference, "past-cap");
    past_cap.start.x = 0.05;
    assert!(MatchEngine::new().score(&reference, &past_cap).is_none());
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test computes the expected score")]
fn included_company_shift_scores_proportionally(reference: CommuterProfile) {
    let candidate = with_company_offset(&reference, "company-near", 0.03);
    let rec = MatchEngine::new()
        .score(&reference, &candidate)
        .expect("included");
    assert!((rec.score - 0.03 * 20.0).abs() < TOLERANCE);
}

#[rstest]
#[expect(clippy::float_arithmetic, reason = "test compares the expected day score")]
fn two_missed_days_included_three_excluded(reference: CommuterProfile) {
    let engine = MatchEngine::new();

    let mut two_missed = rider(&reference, "two-missed");
    two_missed.days_working = WeekSchedule::from_days(&[
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
    ]);
    let rec = engine.score(&reference, &two_missed).expect("included");
    assert!((rec.score - 2.0).abs() < TOLERANCE);

    let mut three_missed = rider(&reference, "three-missed");
    three_missed.days_working =
        WeekSchedule::from_days(&[Weekday::Monday, Weekday::Tuesday]);
    assert!(engine.score(&reference, &three_missed).is_none());
}

#[rstest]
#[case(11, 30, true)]
#[case(12, 30, false)]
fn start_time_deviation_boundary(
    reference: CommuterProfile,
    #[case] hour: u8,
    #[case] minute: u8,
    #[case] included: bool,
) {
    let mut candidate = rider(&reference, "time-shift");
    candidate.start_time = Some(time(hour, minute));
    let result = MatchEngine::new().score(&reference, &candidate);
    assert_eq!(result.is_some(), included);
}

#[rstest]
#[case(14, 30, true)]
#[case(19, 30, false)]
fn end_time_deviation_boundary(
    reference: CommuterProfile,
    #[case] hour: u8,
    #[case] minute: u8,
    #[case] included: bool,
) {
    let mut candidate = rider(&reference, "end-shift");
    candidate.end_time = Some(time(hour, minute));
    let result = MatchEngine::new().score(&reference, &candidate);
    assert_eq!(result.is_some(), included);
}

/// The whole perturbation fixture at once, ranked: exclusions disappear and
/// the survivors come back ordered by how far they drifted.
#[rstest]
fn ranked_fixture_keeps_only_in_cutoff_candidates(reference: CommuterProfile) {
    let mut two_missed = rider(&reference, "two-missed");
    two_missed.days_working = WeekSchedule::from_days(&[
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
    ]);
    let mut three_missed = rider(&reference, "three-missed");
    three_missed.days_working =
        WeekSchedule::from_days(&[Weekday::Monday, Weekday::Tuesday]);

    let candidates = vec![
        rider(&reference, "twin"),
        with_start_offset(&reference, "start-in", 0.02),
        with_start_offset(&reference, "start-out", 0.05),
        with_company_offset(&reference, "company-in", 0.03),
        with_company_offset(&reference, "company-out", 0.05),
        two_missed,
        three_missed,
    ];

    let recs = rank(&MatchEngine::new(), &reference, &candidates, 50);
    let ids: Vec<&str> = recs.iter().map(|rec| rec.id.as_str()).collect();
    // twin 0.0, start-in 0.2, company-in 0.6, two-missed 2.0.
    assert_eq!(ids, ["twin", "start-in", "company-in", "two-missed"]);
}
