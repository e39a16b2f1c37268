//! Tests for the `NearestNeighbourTourBuilder`.

use super::*;
use rstest::rstest;
use vanta_core::Job;
use vanta_core::test_support::job;

fn stops(jobs: &[Job]) -> Vec<Stop<'_>> {
    jobs.iter()
        .filter_map(|job| job.location.map(|location| Stop::new(job, location)))
        .collect()
}

fn build(origin: Coordinate, jobs: &[Job]) -> Tour {
    NearestNeighbourTourBuilder.build_tour(origin, &stops(jobs), &Haversine::default())
}

#[rstest]
fn visits_closest_job_first() {
    let jobs = vec![job("J1", 0.0, 1.0), job("J2", 0.0, 0.5), job("J3", 0.0, 2.0)];
    let tour = build(Coordinate::new(0.0, 0.0), &jobs);
    assert_eq!(tour.order, vec![1, 0, 2]);
    // 0.5° + 0.5° + 1° along the equator.
    assert!(
        (tour.distance_km - 222.39).abs() < 0.01,
        "unexpected distance {}",
        tour.distance_km
    );
}

#[rstest]
fn single_job_is_one_leg() {
    let jobs = vec![job("only", 0.0, 1.0)];
    let tour = build(Coordinate::new(0.0, 0.0), &jobs);
    assert_eq!(tour.order, vec![0]);
    let expected =
        Haversine::default().distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
    assert!((tour.distance_km - expected).abs() < 1e-9);
}

#[rstest]
fn job_at_origin_is_visited_first() {
    let jobs = vec![job("nearby", 51.51, -0.1), job("here", 51.5, -0.1)];
    let tour = build(Coordinate::new(51.5, -0.1), &jobs);
    assert_eq!(tour.order, vec![1, 0]);
    let expected =
        Haversine::default().distance_km(Coordinate::new(51.5, -0.1), Coordinate::new(51.51, -0.1));
    assert!((tour.distance_km - expected).abs() < 1e-9);
}

#[rstest]
fn equidistant_jobs_keep_input_order() {
    let jobs = vec![job("east", 0.0, 1.0), job("west", 0.0, -1.0)];
    let tour = build(Coordinate::new(0.0, 0.0), &jobs);
    assert_eq!(tour.order.first(), Some(&0));
}

#[rstest]
fn colocated_jobs_are_all_visited() {
    let jobs = vec![job("a", 10.0, 10.0), job("b", 10.0, 10.0), job("c", 10.0, 10.0)];
    let tour = build(Coordinate::new(0.0, 0.0), &jobs);
    assert_eq!(tour.order, vec![0, 1, 2]);
}

#[rstest]
fn empty_input_yields_empty_tour() {
    let tour = build(Coordinate::new(0.0, 0.0), &[]);
    assert!(tour.order.is_empty());
    assert!(tour.distance_km.abs() < f64::EPSILON);
}

#[rstest]
fn repeated_runs_agree() {
    let jobs = vec![
        job("a", 40.71, -74.0),
        job("b", 40.73, -73.99),
        job("c", 40.70, -74.02),
        job("d", 40.75, -73.98),
    ];
    let origin = Coordinate::new(40.72, -74.01);
    assert_eq!(build(origin, &jobs), build(origin, &jobs));
}

#[rstest]
fn result_is_a_permutation() {
    let jobs: Vec<Job> = (0..12)
        .map(|i| job(&format!("j{i}"), f64::from(i) * 0.3, f64::from(12 - i) * 0.2))
        .collect();
    let tour = build(Coordinate::new(0.0, 0.0), &jobs);
    assert_eq!(tour.check_permutation(jobs.len()), Ok(()));
}
