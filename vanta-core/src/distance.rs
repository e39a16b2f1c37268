//! Great-circle distances between coordinates.
//!
//! Distances use the haversine formula over a spherical Earth. The
//! intermediate haversine term is clamped into `[0, 1]` so floating-point
//! drift cannot push the square roots negative for antipodal or coincident
//! points.

use crate::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance metric over a sphere of fixed radius.
///
/// # Examples
/// ```
/// use vanta_core::{Coordinate, Haversine};
///
/// let metric = Haversine::default();
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// let km = metric.distance_km(a, b);
/// assert!((km - 111.19).abs() < 0.01);
/// assert_eq!(metric.distance_km(a, a), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }
}

impl Haversine {
    /// Construct a metric for a sphere with the given radius in kilometres.
    #[must_use]
    pub const fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Sphere radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Great-circle distance from `from` to `to` in kilometres.
    ///
    /// Non-finite inputs propagate as `NaN`; callers validate coordinates
    /// before measuring.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the haversine formula is floating-point trigonometry"
    )]
    pub fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        let lat_from = from.lat.to_radians();
        let lat_to = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lng - from.lng).to_radians();

        let h = (delta_lat / 2.0).sin().powi(2)
            + lat_from.cos() * lat_to.cos() * (delta_lng / 2.0).sin().powi(2);
        let h = h.clamp(0.0, 1.0);
        let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        self.radius_km * central_angle
    }

    /// Length of the path that starts at `origin` and visits `waypoints` in
    /// order.
    ///
    /// # Examples
    /// ```
    /// use vanta_core::{Coordinate, Haversine};
    ///
    /// let metric = Haversine::default();
    /// let origin = Coordinate::new(0.0, 0.0);
    /// assert_eq!(metric.path_km(origin, []), 0.0);
    /// ```
    #[must_use]
    pub fn path_km<I>(&self, origin: Coordinate, waypoints: I) -> f64
    where
        I: IntoIterator<Item = Coordinate>,
    {
        self.legs_km(std::iter::once(origin).chain(waypoints))
    }

    /// Sum of consecutive legs between `points`.
    ///
    /// The first point is only a starting position; an empty or one-element
    /// sequence has length zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "leg distances are accumulated as floating-point kilometres"
    )]
    pub fn legs_km<I>(&self, points: I) -> f64
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut points = points.into_iter();
        let Some(mut previous) = points.next() else {
            return 0.0;
        };
        let mut total = 0.0;
        for point in points {
            total += self.distance_km(previous, point);
            previous = point;
        }
        total
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    clippy::float_cmp,
    reason = "distance tests compare floating-point kilometres"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    #[case(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0))]
    #[case(Coordinate::new(51.5, -0.12), Coordinate::new(48.85, 2.35))]
    #[case(Coordinate::new(-33.86, 151.2), Coordinate::new(40.71, -74.0))]
    fn distance_is_symmetric(#[case] a: Coordinate, #[case] b: Coordinate) {
        let metric = Haversine::default();
        let forward = metric.distance_km(a, b);
        let backward = metric.distance_km(b, a);
        assert!((forward - backward).abs() < TOLERANCE);
    }

    #[rstest]
    fn identical_points_are_zero_apart() {
        let point = Coordinate::new(37.77, -122.42);
        assert_eq!(Haversine::default().distance_km(point, point), 0.0);
    }

    #[rstest]
    fn antipodal_points_are_half_a_circumference_apart() {
        let metric = Haversine::default();
        let km = metric.distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!(km.is_finite());
        assert!((km - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[rstest]
    fn near_zero_separation_stays_non_negative() {
        let metric = Haversine::default();
        let km = metric.distance_km(Coordinate::new(10.0, 10.0), Coordinate::new(10.0, 10.0 + 1e-12));
        assert!(km >= 0.0);
        assert!(km < 1e-6);
    }

    #[rstest]
    fn radius_scales_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 90.0);
        let unit = Haversine::new(1.0).distance_km(a, b);
        assert!((unit - std::f64::consts::FRAC_PI_2).abs() < TOLERANCE);
    }

    #[rstest]
    fn nan_input_propagates() {
        let km = Haversine::default().distance_km(Coordinate::new(f64::NAN, 0.0), Coordinate::new(0.0, 0.0));
        assert!(km.is_nan());
    }

    #[rstest]
    fn path_includes_origin_leg() {
        let metric = Haversine::default();
        let origin = Coordinate::new(0.0, 0.0);
        let stop = Coordinate::new(0.0, 1.0);
        let path = metric.path_km(origin, [stop, origin]);
        let leg = metric.distance_km(origin, stop);
        assert!((path - 2.0 * leg).abs() < TOLERANCE);
    }

    #[rstest]
    fn legs_of_single_point_are_zero() {
        let metric = Haversine::default();
        assert_eq!(metric.legs_km([Coordinate::new(1.0, 1.0)]), 0.0);
        assert_eq!(metric.legs_km(std::iter::empty()), 0.0);
    }
}
