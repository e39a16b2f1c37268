//! The optimization pipeline.
//!
//! validate → build tour → time the route → compare with the supplied order →
//! assemble the [`RouteResult`].

use std::time::Instant;

use crate::rounding::round_to_tenth;
use crate::{
    ConfigError, FinancialImpact, Haversine, JobSummary, Metrics, OptimizerConfig, RouteError,
    RouteRequest, RouteResult, Savings, Stop, TimeEstimate, TourBuilder,
};

/// Orders a technician's jobs with a [`TourBuilder`] and reports what the
/// new order saves.
///
/// The optimizer holds only immutable configuration and its strategy, so a
/// single instance can serve concurrent requests.
///
/// # Examples
/// ```
/// use vanta_core::{Coordinate, Haversine, Job, RouteOptimizer, RouteRequest, Stop, Tour, TourBuilder};
///
/// struct AsGiven;
///
/// impl TourBuilder for AsGiven {
///     fn build_tour(&self, origin: Coordinate, stops: &[Stop<'_>], metric: &Haversine) -> Tour {
///         let distance_km = metric.path_km(origin, stops.iter().map(|stop| stop.location));
///         Tour::new((0..stops.len()).collect(), distance_km)
///     }
/// }
///
/// let optimizer = RouteOptimizer::new(AsGiven);
/// let request = RouteRequest::new(
///     Coordinate::new(0.0, 0.0),
///     vec![Job::new("J1", Coordinate::new(0.0, 1.0))],
/// );
/// let result = optimizer.optimize(&request)?;
/// assert_eq!(result.metrics.total_distance, 111.2);
/// assert_eq!(result.metrics.distance_saved, 0.0);
/// # Ok::<(), vanta_core::RouteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<B> {
    builder: B,
    config: OptimizerConfig,
}

impl<B: TourBuilder> RouteOptimizer<B> {
    /// Construct an optimizer with the default assumptions.
    #[must_use]
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            config: OptimizerConfig::default(),
        }
    }

    /// Construct an optimizer with explicit assumptions.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when `config` fails
    /// [`OptimizerConfig::validate`].
    pub fn with_config(builder: B, config: OptimizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { builder, config })
    }

    /// Assumptions in use.
    #[must_use]
    pub const fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Tour construction strategy in use.
    #[must_use]
    pub const fn builder(&self) -> &B {
        &self.builder
    }

    /// Order `request`'s jobs and report distance, time and savings.
    ///
    /// # Errors
    /// Returns [`RouteError::InvalidInput`] or [`RouteError::MalformedJob`]
    /// when the request fails validation, and [`RouteError::InvalidTour`]
    /// when the builder's order is not a permutation of the accepted jobs.
    pub fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        let started_at = Instant::now();
        let stops = request.stops(self.config.malformed_jobs)?;
        let metric = Haversine::new(self.config.earth_radius_km);

        let tour = self.builder.build_tour(request.origin, &stops, &metric);
        tour.check_permutation(stops.len())?;
        let ordered: Vec<&Stop<'_>> = tour
            .order
            .iter()
            .filter_map(|&index| stops.get(index))
            .collect();

        let total_km = metric.path_km(request.origin, ordered.iter().map(|stop| stop.location));
        let original_km = metric.path_km(request.origin, stops.iter().map(|stop| stop.location));
        let times = TimeEstimate::for_route(ordered.iter().copied(), &metric, &self.config);
        let savings = Savings::new(original_km, total_km);
        let financial_impact = savings.financial_impact(&self.config);

        log::debug!(
            "optimized {} jobs in {:?}: {total_km:.1} km vs {original_km:.1} km supplied",
            ordered.len(),
            started_at.elapsed()
        );

        Ok(self.assemble(&ordered, &times, &savings, financial_impact))
    }

    fn assemble(
        &self,
        ordered: &[&Stop<'_>],
        times: &TimeEstimate,
        savings: &Savings,
        financial_impact: FinancialImpact,
    ) -> RouteResult {
        let job_sequence: Vec<JobSummary> = ordered
            .iter()
            .map(|stop| JobSummary::from_stop(stop, self.config.default_job_minutes))
            .collect();
        let ordered_jobs = job_sequence.iter().map(|summary| summary.id.clone()).collect();
        let metrics = Metrics {
            total_distance: round_to_tenth(savings.optimized_km),
            original_distance: round_to_tenth(savings.original_km),
            distance_saved: round_to_tenth(savings.saved_km()),
            distance_saved_percent: savings.percent(),
            work_time: times.work_time(),
            travel_time: times.travel_time(),
            total_time: times.total_time(),
            jobs: times.jobs,
        };
        RouteResult {
            ordered_jobs,
            job_sequence,
            metrics,
            financial_impact,
        }
    }
}
