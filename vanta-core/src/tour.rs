//! Tour construction strategies.
//!
//! A [`TourBuilder`] orders validated [`Stop`]s starting from an origin. The
//! optimizer only relies on the returned [`Tour`] being a permutation of the
//! stop indices, so stronger solvers can be dropped in without touching the
//! rest of the pipeline.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Coordinate, Haversine, Job};

/// A job whose location has been validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop<'a> {
    /// The underlying job record.
    pub job: &'a Job,
    /// The job's finite coordinate.
    pub location: Coordinate,
}

impl<'a> Stop<'a> {
    /// Pair a job with its validated location.
    #[must_use]
    pub const fn new(job: &'a Job, location: Coordinate) -> Self {
        Self { job, location }
    }
}

/// A visiting order over a slice of stops.
///
/// `order` holds indices into the slice the tour was built from.
///
/// # Examples
/// ```
/// use vanta_core::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1], 12.5);
/// assert!(tour.check_permutation(3).is_ok());
/// assert!(tour.check_permutation(4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Stop indices in visiting order.
    pub order: Vec<usize>,
    /// Distance travelled from the origin through every stop, in kilometres.
    pub distance_km: f64,
}

/// Ways a [`Tour`] can fail to be a permutation of its stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The tour visits a different number of stops than were supplied.
    #[error("tour visits {actual} stops but {expected} were supplied")]
    LengthMismatch {
        /// Number of stops supplied to the builder.
        expected: usize,
        /// Number of entries in the tour.
        actual: usize,
    },
    /// The tour refers to a stop index that does not exist.
    #[error("tour refers to unknown stop index {0}")]
    UnknownStop(usize),
    /// The tour visits a stop more than once.
    #[error("tour visits stop index {0} more than once")]
    DuplicateStop(usize),
}

impl Tour {
    /// Construct a tour from an order and its distance.
    #[must_use]
    pub const fn new(order: Vec<usize>, distance_km: f64) -> Self {
        Self { order, distance_km }
    }

    /// Confirm the tour visits each of `stop_count` stops exactly once.
    ///
    /// # Errors
    /// Returns the first [`TourError`] found.
    pub fn check_permutation(&self, stop_count: usize) -> Result<(), TourError> {
        if self.order.len() != stop_count {
            return Err(TourError::LengthMismatch {
                expected: stop_count,
                actual: self.order.len(),
            });
        }
        let mut seen = HashSet::with_capacity(stop_count);
        for &index in &self.order {
            if index >= stop_count {
                return Err(TourError::UnknownStop(index));
            }
            if !seen.insert(index) {
                return Err(TourError::DuplicateStop(index));
            }
        }
        Ok(())
    }
}

/// Orders stops into a tour starting at `origin`.
///
/// Implementations must be deterministic for a given input order and must
/// return a permutation of `0..stops.len()`. Builders are `Send + Sync` so a
/// single optimizer can serve concurrent requests.
///
/// # Examples
/// ```
/// use vanta_core::{Coordinate, Haversine, Stop, Tour, TourBuilder};
///
/// struct Reversed;
///
/// impl TourBuilder for Reversed {
///     fn build_tour(&self, origin: Coordinate, stops: &[Stop<'_>], metric: &Haversine) -> Tour {
///         let order: Vec<usize> = (0..stops.len()).rev().collect();
///         let distance_km = metric.path_km(
///             origin,
///             order.iter().filter_map(|&i| stops.get(i)).map(|stop| stop.location),
///         );
///         Tour::new(order, distance_km)
///     }
/// }
///
/// let tour = Reversed.build_tour(Coordinate::new(0.0, 0.0), &[], &Haversine::default());
/// assert!(tour.order.is_empty());
/// ```
pub trait TourBuilder: Send + Sync {
    /// Build a tour over `stops`, measuring legs with `metric`.
    fn build_tour(&self, origin: Coordinate, stops: &[Stop<'_>], metric: &Haversine) -> Tour;
}

impl<T: TourBuilder + ?Sized> TourBuilder for &T {
    fn build_tour(&self, origin: Coordinate, stops: &[Stop<'_>], metric: &Haversine) -> Tour {
        (**self).build_tour(origin, stops, metric)
    }
}

impl<T: TourBuilder + ?Sized> TourBuilder for Box<T> {
    fn build_tour(&self, origin: Coordinate, stops: &[Stop<'_>], metric: &Haversine) -> Tour {
        (**self).build_tour(origin, stops, metric)
    }
}
