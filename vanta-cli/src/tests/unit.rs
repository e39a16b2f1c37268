//! Focused unit tests covering optimise configuration and request loading.

use super::helpers::{Workspace, equator_request, write_json, write_utf8};
use super::*;
use crate::optimise::{OptimiseArgs, OptimiseConfig, load_route_request};
use rstest::rstest;
use serde_json::{Value, json};
use vanta_core::{ConfigError, InvalidInput, MalformedJobPolicy, OptimizerConfig};

#[rstest]
fn converting_optimise_without_request_errors() {
    let err = OptimiseConfig::try_from(OptimiseArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn unset_flags_fall_back_to_documented_assumptions() {
    let args = OptimiseArgs {
        request_path: Some("request.json".into()),
        ..OptimiseArgs::default()
    };
    let config = OptimiseConfig::try_from(args).expect("config should build");
    assert_eq!(config.optimizer, OptimizerConfig::default());
    assert_eq!(config.output, None);
}

#[rstest]
fn flags_override_assumptions() {
    let args = OptimiseArgs {
        request_path: Some("request.json".into()),
        average_speed_kmh: Some(30.0),
        default_job_minutes: Some(45.0),
        malformed_jobs: Some(MalformedJobPolicy::Skip),
        ..OptimiseArgs::default()
    };
    let config = OptimiseConfig::try_from(args).expect("config should build");
    assert_eq!(
        config.optimizer,
        OptimizerConfig {
            average_speed_kmh: 30.0,
            default_job_minutes: 45.0,
            malformed_jobs: MalformedJobPolicy::Skip,
            ..OptimizerConfig::default()
        }
    );
}

#[rstest]
fn non_positive_speed_is_rejected() {
    let args = OptimiseArgs {
        request_path: Some("request.json".into()),
        average_speed_kmh: Some(0.0),
        ..OptimiseArgs::default()
    };
    let err = OptimiseConfig::try_from(args).expect_err("zero speed should error");
    match err {
        CliError::InvalidConfig(ConfigError::NotPositive { field, .. }) => {
            assert_eq!(field, "average_speed_kmh");
        }
        other => panic!("expected InvalidConfig, found {other:?}"),
    }
}

#[rstest]
fn malformed_jobs_flag_parses_policy() {
    let cli = Cli::try_parse_from([
        "vanta",
        "optimise",
        "request.json",
        "--malformed-jobs",
        "skip",
    ])
    .expect("arguments should parse");
    let Command::Optimise(args) = cli.command;
    assert_eq!(args.malformed_jobs, Some(MalformedJobPolicy::Skip));
}

#[rstest]
fn unknown_policy_is_a_parse_error() {
    let err = Cli::try_parse_from([
        "vanta",
        "optimise",
        "request.json",
        "--malformed-jobs",
        "ignore",
    ])
    .expect_err("unknown policy should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let workspace = Workspace::new();
    let config = OptimiseConfig {
        request_path: workspace.request_path(),
        output: None,
        optimizer: OptimizerConfig::default(),
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(path, workspace.request_path());
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    std::fs::create_dir(workspace.request_path()).expect("request directory");
    let config = OptimiseConfig {
        request_path: workspace.request_path(),
        output: None,
        optimizer: OptimizerConfig::default(),
    };
    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_REQUEST),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_route_request_decodes_json() {
    let workspace = Workspace::new();
    write_json(&workspace.request_path(), &equator_request());
    let request = load_route_request(&workspace.request_path()).expect("request should decode");
    assert_eq!(request.jobs.len(), 3);
    assert_eq!(request.jobs.first().map(|job| job.id.to_string()), Some("J1".to_owned()));
}

#[rstest]
fn load_route_request_rejects_invalid_json() {
    let workspace = Workspace::new();
    write_utf8(&workspace.request_path(), b"{ not valid json");
    let err =
        load_route_request(&workspace.request_path()).expect_err("invalid json should error");
    match err {
        CliError::ParseRequest { path, .. } => assert_eq!(path, workspace.request_path()),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
#[case::missing_jobs(json!({ "worker_lat": 0.0, "worker_lng": 0.0 }), InvalidInput::MissingJobs)]
#[case::empty_jobs(
    json!({ "worker_lat": 0.0, "worker_lng": 0.0, "jobs": [] }),
    InvalidInput::EmptyJobs
)]
#[case::not_an_object(json!([1, 2, 3]), InvalidInput::NotAnObject)]
fn load_route_request_reports_invalid_bodies(#[case] body: Value, #[case] expected: InvalidInput) {
    let workspace = Workspace::new();
    write_json(&workspace.request_path(), &body);
    let err =
        load_route_request(&workspace.request_path()).expect_err("body should be rejected");
    match err {
        CliError::InvalidRequest { source, .. } => assert_eq!(source, expected),
        other => panic!("expected InvalidRequest, found {other:?}"),
    }
}
