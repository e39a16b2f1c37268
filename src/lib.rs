//! Facade crate for the Vanta route optimizer.
//!
//! This crate re-exports the core domain types and, behind the default
//! `solver-greedy` feature, the nearest-neighbour tour builder together with
//! a JSON-in, JSON-out entry point for dashboards.

#![forbid(unsafe_code)]

pub use vanta_core::{
    ConfigError, Coordinate, FinancialImpact, Haversine, InvalidInput, Job, JobId, JobSummary,
    MalformedJobPolicy, MalformedJobReason, Metrics, OptimizerConfig, RouteError, RouteOptimizer,
    RouteRequest, RouteResult, Stop, Tour, TourBuilder, TourError,
};

#[cfg(feature = "solver-greedy")]
pub use vanta_solver_greedy::{
    NearestNeighbourTourBuilder, default_optimizer, optimizer_with_config,
};

/// Optimize a request body as sent by the dispatch dashboard.
///
/// `body` must be an object with `worker_lat`, `worker_lng` and a non-empty
/// `jobs` array. The default assumptions and the nearest-neighbour heuristic
/// are used.
///
/// # Examples
/// ```
/// use serde_json::json;
///
/// let result = vanta_routing::optimize_json(json!({
///     "worker_lat": 0.0,
///     "worker_lng": 0.0,
///     "jobs": [
///         { "id": "J1", "location": { "lat": 0.0, "lng": 1.0 } },
///         { "id": "J2", "location": { "lat": 0.0, "lng": 0.5 } }
///     ]
/// }))?;
/// assert_eq!(result["orderedJobs"], json!(["J2", "J1"]));
/// # Ok::<(), vanta_routing::RouteError>(())
/// ```
///
/// # Errors
/// Returns [`RouteError`] when the body is not a valid request, a job is
/// malformed, or the result cannot be encoded.
#[cfg(feature = "solver-greedy")]
pub fn optimize_json(body: serde_json::Value) -> Result<serde_json::Value, RouteError> {
    let request = RouteRequest::from_value(body)?;
    let result = default_optimizer().optimize(&request)?;
    encode(&result)
}

#[cfg(feature = "solver-greedy")]
fn encode<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, RouteError> {
    serde_json::to_value(value).map_err(|err| RouteError::Encode {
        message: err.to_string(),
    })
}
