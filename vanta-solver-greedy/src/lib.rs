//! Greedy tour construction for the Vanta route optimizer.
//!
//! This crate provides [`NearestNeighbourTourBuilder`], the default
//! [`TourBuilder`](vanta_core::TourBuilder). Starting at the technician's
//! position it repeatedly drives to the closest job not yet visited. The scan
//! is O(n²) in the number of jobs, which suits dispatch batches of tens of
//! jobs; no 2-opt or exact TSP refinement is attempted.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;

pub use builder::NearestNeighbourTourBuilder;

use vanta_core::{ConfigError, OptimizerConfig, RouteOptimizer};

/// Optimizer using the nearest-neighbour heuristic and default assumptions.
///
/// # Examples
/// ```
/// use vanta_core::{Coordinate, Job, RouteRequest};
///
/// let optimizer = vanta_solver_greedy::default_optimizer();
/// let request = RouteRequest::new(
///     Coordinate::new(0.0, 0.0),
///     vec![
///         Job::new("far", Coordinate::new(0.0, 2.0)),
///         Job::new("near", Coordinate::new(0.0, 1.0)),
///     ],
/// );
/// let result = optimizer.optimize(&request)?;
/// assert_eq!(result.ordered_jobs[0].to_string(), "near");
/// # Ok::<(), vanta_core::RouteError>(())
/// ```
#[must_use]
pub fn default_optimizer() -> RouteOptimizer<NearestNeighbourTourBuilder> {
    RouteOptimizer::new(NearestNeighbourTourBuilder)
}

/// Optimizer using the nearest-neighbour heuristic and explicit assumptions.
///
/// # Errors
/// Returns [`ConfigError`] when `config` fails validation.
pub fn optimizer_with_config(
    config: OptimizerConfig,
) -> Result<RouteOptimizer<NearestNeighbourTourBuilder>, ConfigError> {
    RouteOptimizer::with_config(NearestNeighbourTourBuilder, config)
}
