//! Behavioural tests for request validation and the optimization pipeline.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use vanta_core::{
    Coordinate, Haversine, InvalidInput, JobId, MalformedJobPolicy, OptimizerConfig, RouteError,
    RouteOptimizer, RouteRequest, RouteResult, Stop, Tour, TourBuilder,
};

struct SuppliedOrder;

impl TourBuilder for SuppliedOrder {
    fn build_tour(&self, origin: Coordinate, stops: &[Stop<'_>], metric: &Haversine) -> Tour {
        let distance_km = metric.path_km(origin, stops.iter().map(|stop| stop.location));
        Tour::new((0..stops.len()).collect(), distance_km)
    }
}

#[derive(Debug)]
struct RequestWorld {
    body: RefCell<Value>,
    config: RefCell<OptimizerConfig>,
    outcome: RefCell<Option<Result<RouteResult, RouteError>>>,
}

impl RequestWorld {
    fn new() -> Self {
        Self {
            body: RefCell::new(Value::Null),
            config: RefCell::new(OptimizerConfig::default()),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<RouteResult, RouteError> {
        self.outcome
            .borrow()
            .as_ref()
            .cloned()
            .expect("outcome should be recorded before assertions")
    }
}

#[fixture]
fn world() -> RequestWorld {
    RequestWorld::new()
}

#[given("a request body with a job that has no location")]
fn given_body_with_malformed_job(world: &RequestWorld) {
    world.body.replace(json!({
        "worker_lat": 0.0,
        "worker_lng": 0.0,
        "jobs": [
            { "id": "J1", "location": { "lat": 0.0, "lng": 1.0 } },
            { "id": "J2", "job_title": "Unmapped call-out" },
            { "id": "J3", "location": { "lat": 0.0, "lng": 2.0 } }
        ]
    }));
}

#[given("a request body with an empty job list")]
fn given_empty_body(world: &RequestWorld) {
    world
        .body
        .replace(json!({ "worker_lat": 0.0, "worker_lng": 0.0, "jobs": [] }));
}

#[given("a request body with three jobs along the equator")]
fn given_equator_body(world: &RequestWorld) {
    world.body.replace(json!({
        "worker_lat": 0.0,
        "worker_lng": 0.0,
        "jobs": [
            { "id": "J1", "location": { "lat": 0.0, "lng": 1.0 } },
            { "id": "J2", "location": { "lat": 0.0, "lng": 0.5 } },
            { "id": "J3", "location": { "lat": 0.0, "lng": 2.0 } }
        ]
    }));
}

#[given("the malformed job policy is reject")]
fn given_reject_policy(world: &RequestWorld) {
    world.config.borrow_mut().malformed_jobs = MalformedJobPolicy::Reject;
}

#[given("the malformed job policy is skip")]
fn given_skip_policy(world: &RequestWorld) {
    world.config.borrow_mut().malformed_jobs = MalformedJobPolicy::Skip;
}

#[when("the request is optimized in the supplied order")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_optimized(world: &RequestWorld) {
    let config = *world.config.borrow();
    let optimizer =
        RouteOptimizer::with_config(SuppliedOrder, config).expect("default config is valid");
    let outcome = RouteRequest::from_value(world.body.borrow().clone())
        .map_err(RouteError::from)
        .and_then(|request| optimizer.optimize(&request));
    world.outcome.replace(Some(outcome));
}

#[then("the optimization fails with a malformed job error naming J2")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_malformed_job(world: &RequestWorld) {
    let err = world.expect_outcome().expect_err("expected MalformedJob");
    assert!(matches!(err, RouteError::MalformedJob { ref id, .. } if *id == JobId::from("J2")));
}

#[then("the optimization fails with invalid input")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_invalid_input(world: &RequestWorld) {
    let err = world.expect_outcome().expect_err("expected InvalidInput");
    assert_eq!(err, RouteError::InvalidInput(InvalidInput::EmptyJobs));
}

#[then("the route visits 2 jobs")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_two_jobs(world: &RequestWorld) {
    let result = world.expect_outcome().expect("expected a route");
    assert_eq!(result.ordered_jobs.len(), 2);
    assert_eq!(result.metrics.jobs, 2);
}

#[then("the route visits 3 jobs")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_three_jobs(world: &RequestWorld) {
    let result = world.expect_outcome().expect("expected a route");
    assert_eq!(result.ordered_jobs.len(), 3);
}

#[then("no distance is saved")]
#[expect(
    clippy::expect_used,
    clippy::float_cmp,
    reason = "behaviour tests use expect and exact rounded values"
)]
fn then_no_savings(world: &RequestWorld) {
    let result = world.expect_outcome().expect("expected a route");
    assert_eq!(result.metrics.distance_saved, 0.0);
    assert_eq!(result.financial_impact.fuel_savings, 0);
}

#[scenario(path = "tests/features/route_request.feature", index = 0)]
fn rejecting_malformed_job(world: RequestWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_request.feature", index = 1)]
fn skipping_malformed_jobs(world: RequestWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_request.feature", index = 2)]
fn rejecting_empty_jobs(world: RequestWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_request.feature", index = 3)]
fn supplied_order_saves_nothing(world: RequestWorld) {
    let _ = world;
}
