//! Unit tests covering rank CLI configuration and request handling.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use carpool_core::{CommuterProfile, Role, TimeOfDay, WeekSchedule};
use carpool_recommend::RECOMMENDATIONS_CAP;
use geo::Coord;
use rank::{RankArgs, RankConfig};
use rstest::rstest;
use tempfile::TempDir;

fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

fn weekdays() -> WeekSchedule {
    WeekSchedule::from_slice(&[false, true, true, true, true, true, false])
        .expect("seven days")
}

fn profile(id: &str, role: Role, start_x: f64) -> CommuterProfile {
    CommuterProfile::new(
        id.into(),
        role,
        Coord { x: start_x, y: 42.30 },
        Coord {
            x: -71.06,
            y: 42.355_625,
        },
        weekdays(),
    )
    .expect("finite coordinates")
    .with_times(
        TimeOfDay::new(9, 30).expect("valid clock"),
        TimeOfDay::new(16, 30).expect("valid clock"),
    )
}

fn request_json(reference: &CommuterProfile, candidates: &[CommuterProfile]) -> String {
    serde_json::to_string(&serde_json::json!({
        "reference": reference,
        "candidates": candidates,
    }))
    .expect("serializable request")
}

fn workspace_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace")
}

#[rstest]
fn converting_rank_without_request_errors() {
    let args = RankArgs {
        request_path: None,
        ..RankArgs::default()
    };

    let err = RankConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RANK_REQUEST);
            assert_eq!(env, ENV_RANK_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn rank_config_defaults_the_result_cap() {
    let args = RankArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        filter: None,
        limit: None,
    };

    let config = RankConfig::try_from(args).expect("config should build");
    assert_eq!(config.limit, RECOMMENDATIONS_CAP);
    assert!(config.filter.is_none());
}

#[rstest]
#[case::missing_request(ARG_RANK_REQUEST, false)]
#[case::missing_filter(ARG_RANK_FILTER, true)]
fn validate_sources_reports_missing_files(
    #[case] expected_field: &'static str,
    #[case] request_exists: bool,
) {
    let tmp = TempDir::new().expect("tempdir");
    let root = workspace_root(&tmp);
    let request_path = root.join("request.json");
    if request_exists {
        write_utf8(&request_path, b"{}");
    }

    let config = RankConfig {
        request_path,
        filter: Some(root.join("filter.json")),
        limit: RECOMMENDATIONS_CAP,
    };

    let err = config.validate_sources().expect_err("missing file should error");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn execute_ranks_candidates_from_the_request_file() {
    let tmp = TempDir::new().expect("tempdir");
    let root = workspace_root(&tmp);
    let request_path = root.join("request.json");

    let reference = profile("me", Role::Rider, -71.15);
    let near = profile("near", Role::Driver, -71.15).with_seats(2);
    let farther = profile("farther", Role::Driver, -71.12).with_seats(2);
    write_utf8(
        &request_path,
        request_json(&reference, &[farther, near]).as_bytes(),
    );

    let config = RankConfig {
        request_path,
        filter: None,
        limit: RECOMMENDATIONS_CAP,
    };

    let mut out = Vec::new();
    rank::execute(&config, &mut out).expect("ranking should succeed");

    let recs: serde_json::Value = serde_json::from_slice(&out).expect("JSON output");
    let ids: Vec<&str> = recs
        .as_array()
        .expect("array of recommendations")
        .iter()
        .map(|rec| rec["id"].as_str().expect("string id"))
        .collect();
    assert_eq!(ids, ["near", "farther"]);
}

#[rstest]
fn execute_honours_the_result_cap() {
    let tmp = TempDir::new().expect("tempdir");
    let root = workspace_root(&tmp);
    let request_path = root.join("request.json");

    let reference = profile("me", Role::Rider, -71.15);
    let first = profile("a", Role::Driver, -71.15).with_seats(2);
    let second = profile("b", Role::Driver, -71.14).with_seats(2);
    write_utf8(
        &request_path,
        request_json(&reference, &[first, second]).as_bytes(),
    );

    let config = RankConfig {
        request_path,
        filter: None,
        limit: 1,
    };

    let mut out = Vec::new();
    rank::execute(&config, &mut out).expect("ranking should succeed");

    let recs: serde_json::Value = serde_json::from_slice(&out).expect("JSON output");
    assert_eq!(recs.as_array().expect("array").len(), 1);
}

#[rstest]
fn execute_applies_a_filter_file() {
    let tmp = TempDir::new().expect("tempdir");
    let root = workspace_root(&tmp);
    let request_path = root.join("request.json");
    let filter_path = root.join("filter.json");

    let reference = profile("me", Role::Rider, -71.15);
    let near = profile("near", Role::Driver, -71.15).with_seats(2);
    // 0.03 degrees from the reference start, roughly 2.6 miles.
    let far = profile("far", Role::Driver, -71.12).with_seats(2);
    write_utf8(
        &request_path,
        request_json(&reference, &[near, far]).as_bytes(),
    );
    write_utf8(
        &filter_path,
        br#"{ "start_distance_miles": 2.0 }"#,
    );

    let config = RankConfig {
        request_path,
        filter: Some(filter_path),
        limit: RECOMMENDATIONS_CAP,
    };

    let mut out = Vec::new();
    rank::execute(&config, &mut out).expect("ranking should succeed");

    let recs: serde_json::Value = serde_json::from_slice(&out).expect("JSON output");
    let ids: Vec<&str> = recs
        .as_array()
        .expect("array")
        .iter()
        .map(|rec| rec["id"].as_str().expect("string id"))
        .collect();
    assert_eq!(ids, ["near"]);
}

#[rstest]
fn execute_reports_undecodable_requests() {
    let tmp = TempDir::new().expect("tempdir");
    let root = workspace_root(&tmp);
    let request_path = root.join("request.json");
    write_utf8(&request_path, b"not json");

    let config = RankConfig {
        request_path: request_path.clone(),
        filter: None,
        limit: RECOMMENDATIONS_CAP,
    };

    let err = rank::execute(&config, Vec::new()).expect_err("malformed input should error");
    match err {
        CliError::DecodeInput { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected DecodeInput, found {other:?}"),
    }
}

#[rstest]
fn execute_rejects_invalid_filters() {
    let tmp = TempDir::new().expect("tempdir");
    let root = workspace_root(&tmp);
    let request_path = root.join("request.json");
    let filter_path = root.join("filter.json");

    let reference = profile("me", Role::Rider, -71.15);
    write_utf8(&request_path, request_json(&reference, &[]).as_bytes());
    write_utf8(
        &filter_path,
        br#"{ "start_distance_miles": -1.0 }"#,
    );

    let config = RankConfig {
        request_path,
        filter: Some(filter_path),
        limit: RECOMMENDATIONS_CAP,
    };

    let err = rank::execute(&config, Vec::new()).expect_err("negative cap should error");
    assert!(matches!(err, CliError::InvalidFilter(_)));
}
