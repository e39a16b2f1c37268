//! Work and travel time estimates for an ordered route.

use crate::rounding::round_half_up;
use crate::{Haversine, OptimizerConfig, Stop};

/// Minutes spent on site and on the road for a route.
///
/// Travel time covers only the legs between jobs; the drive from the origin
/// to the first job is not counted. Distances are measured afresh from the
/// ordered stops so any [`TourBuilder`](crate::TourBuilder) can be timed the
/// same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeEstimate {
    /// Sum of on-site durations in minutes.
    pub work_minutes: f64,
    /// Driving time between consecutive jobs in minutes.
    pub travel_minutes: f64,
    /// Number of jobs on the route.
    pub jobs: usize,
}

impl TimeEstimate {
    /// Estimate times for `stops` visited in the given order.
    ///
    /// # Examples
    /// ```
    /// use vanta_core::{Coordinate, Haversine, Job, OptimizerConfig, Stop, TimeEstimate};
    ///
    /// let a = Job::new("a", Coordinate::new(0.0, 0.0)).with_duration(30.0);
    /// let b = Job::new("b", Coordinate::new(0.0, 0.0));
    /// let stops = [
    ///     Stop::new(&a, Coordinate::new(0.0, 0.0)),
    ///     Stop::new(&b, Coordinate::new(0.0, 0.0)),
    /// ];
    /// let estimate = TimeEstimate::for_route(stops.iter(), &Haversine::default(), &OptimizerConfig::default());
    /// assert_eq!(estimate.work_time(), 90);
    /// assert_eq!(estimate.travel_time(), 0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "durations are summed as floating-point minutes"
    )]
    pub fn for_route<'s, 'j: 's, I>(stops: I, metric: &Haversine, config: &OptimizerConfig) -> Self
    where
        I: IntoIterator<Item = &'s Stop<'j>>,
    {
        let mut work_minutes = 0.0;
        let mut jobs = 0_usize;
        let mut previous = None;
        let mut inter_job_km = 0.0;
        for stop in stops {
            work_minutes += stop.job.effective_duration(config.default_job_minutes);
            if let Some(from) = previous {
                inter_job_km += metric.distance_km(from, stop.location);
            }
            previous = Some(stop.location);
            jobs += 1;
        }
        Self {
            work_minutes,
            travel_minutes: config.travel_minutes(inter_job_km),
            jobs,
        }
    }

    /// Work time rounded to whole minutes.
    #[must_use]
    pub fn work_time(&self) -> i64 {
        round_half_up(self.work_minutes)
    }

    /// Travel time rounded to whole minutes.
    #[must_use]
    pub fn travel_time(&self) -> i64 {
        round_half_up(self.travel_minutes)
    }

    /// Combined time rounded to whole minutes.
    ///
    /// Rounds the unrounded sum, so it can differ by one from
    /// `work_time() + travel_time()`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "minutes are summed before rounding")]
    pub fn total_time(&self) -> i64 {
        round_half_up(self.work_minutes + self.travel_minutes)
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    clippy::float_cmp,
    reason = "timing tests compare floating-point minutes"
)]
mod tests {
    use super::*;
    use crate::{Coordinate, Job};
    use rstest::rstest;

    fn stops_of(jobs: &[Job]) -> Vec<Stop<'_>> {
        jobs.iter()
            .filter_map(|job| job.location.map(|location| Stop::new(job, location)))
            .collect()
    }

    #[rstest]
    fn single_job_has_no_travel_time() {
        let jobs = vec![Job::new("a", Coordinate::new(0.0, 5.0))];
        let stops = stops_of(&jobs);
        let estimate =
            TimeEstimate::for_route(&stops, &Haversine::default(), &OptimizerConfig::default());
        assert_eq!(estimate.travel_minutes, 0.0);
        assert_eq!(estimate.work_time(), 60);
        assert_eq!(estimate.jobs, 1);
    }

    #[rstest]
    fn travel_skips_origin_leg_and_uses_speed() {
        let jobs = vec![
            Job::new("a", Coordinate::new(0.0, 1.0)).with_duration(10.0),
            Job::new("b", Coordinate::new(0.0, 2.0)).with_duration(20.0),
        ];
        let stops = stops_of(&jobs);
        let metric = Haversine::default();
        let config = OptimizerConfig::default();
        let estimate = TimeEstimate::for_route(&stops, &metric, &config);

        let leg_km = metric.distance_km(Coordinate::new(0.0, 1.0), Coordinate::new(0.0, 2.0));
        let expected_minutes = leg_km / 50.0 * 60.0;
        assert!((estimate.travel_minutes - expected_minutes).abs() < 1e-9);
        assert_eq!(estimate.travel_time(), 133);
        assert_eq!(estimate.work_time(), 30);
        assert_eq!(estimate.total_time(), 163);
    }

    #[rstest]
    fn slower_speed_stretches_travel_time() {
        let jobs = vec![
            Job::new("a", Coordinate::new(0.0, 1.0)),
            Job::new("b", Coordinate::new(0.0, 2.0)),
        ];
        let stops = stops_of(&jobs);
        let metric = Haversine::default();
        let fast = TimeEstimate::for_route(&stops, &metric, &OptimizerConfig::default());
        let slow = TimeEstimate::for_route(
            &stops,
            &metric,
            &OptimizerConfig {
                average_speed_kmh: 25.0,
                ..OptimizerConfig::default()
            },
        );
        assert!((slow.travel_minutes - 2.0 * fast.travel_minutes).abs() < 1e-9);
    }

    #[rstest]
    fn total_rounds_the_unrounded_sum() {
        let estimate = TimeEstimate {
            work_minutes: 10.4,
            travel_minutes: 10.4,
            jobs: 2,
        };
        assert_eq!(estimate.work_time() + estimate.travel_time(), 20);
        assert_eq!(estimate.total_time(), 21);
    }
}
