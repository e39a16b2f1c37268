//! `NearestNeighbourTourBuilder` implementation.
//!
//! Visited stops are tracked in a bitmap over the caller's slice, so choosing
//! a stop never shifts the remaining candidates.

use vanta_core::{Coordinate, Haversine, Stop, Tour, TourBuilder};

/// Builds tours by always driving to the closest unvisited stop.
///
/// Ties go to the stop that appears first in the input, which makes the
/// result a pure function of the input order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NearestNeighbourTourBuilder;

impl TourBuilder for NearestNeighbourTourBuilder {
    #[expect(
        clippy::float_arithmetic,
        reason = "leg distances are accumulated as floating-point kilometres"
    )]
    fn build_tour(&self, origin: Coordinate, stops: &[Stop<'_>], metric: &Haversine) -> Tour {
        let mut visited = vec![false; stops.len()];
        let mut order = Vec::with_capacity(stops.len());
        let mut current = origin;
        let mut distance_km = 0.0;

        while let Some((index, leg_km)) = nearest_unvisited(current, stops, &visited, metric) {
            let Some(stop) = stops.get(index) else {
                break;
            };
            if let Some(flag) = visited.get_mut(index) {
                *flag = true;
            }
            order.push(index);
            distance_km += leg_km;
            current = stop.location;
        }

        log::trace!(
            "nearest-neighbour tour over {} stops covers {distance_km:.3} km",
            order.len()
        );
        Tour::new(order, distance_km)
    }
}

/// Index and distance of the closest unvisited stop to `from`.
///
/// Only a strictly shorter leg displaces the current best, so the first of
/// several equidistant stops wins.
fn nearest_unvisited(
    from: Coordinate,
    stops: &[Stop<'_>],
    visited: &[bool],
    metric: &Haversine,
) -> Option<(usize, f64)> {
    stops
        .iter()
        .zip(visited)
        .enumerate()
        .filter(|(_, (_, seen))| !**seen)
        .map(|(index, (stop, _))| (index, metric.distance_km(from, stop.location)))
        .fold(None, |best, candidate| match best {
            Some((_, best_km)) if candidate.1.total_cmp(&best_km).is_ge() => best,
            _ => Some(candidate),
        })
}

#[cfg(test)]
#[expect(clippy::float_arithmetic, reason = "tests compare distances within a tolerance")]
mod tests;
