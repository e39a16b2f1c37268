//! Test-only fixtures shared by unit, behaviour and property tests.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use crate::{Coordinate, Haversine, Job, RouteRequest, Stop, Tour, TourBuilder};

/// Construct a job with an id and position and nothing else.
#[must_use]
pub fn job(id: &str, lat: f64, lng: f64) -> Job {
    Job::new(id, Coordinate::new(lat, lng))
}

/// Construct a request starting at `(lat, lng)`.
#[must_use]
pub const fn request(lat: f64, lng: f64, jobs: Vec<Job>) -> RouteRequest {
    RouteRequest::new(Coordinate::new(lat, lng), jobs)
}

/// [`TourBuilder`] that keeps the caller's order.
///
/// Useful for checking the pipeline around the builder: with it, the
/// optimized and original distances always agree.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrderTourBuilder;

impl TourBuilder for InputOrderTourBuilder {
    fn build_tour(&self, origin: Coordinate, stops: &[Stop<'_>], metric: &Haversine) -> Tour {
        let distance_km = metric.path_km(origin, stops.iter().map(|stop| stop.location));
        Tour::new((0..stops.len()).collect(), distance_km)
    }
}
