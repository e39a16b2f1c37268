//! Rounding helpers for reported figures.
//!
//! Reported values use round-half-up (`floor(x + 0.5)`), so `-2.5` rounds to
//! `-2` rather than away from zero as [`f64::round`] would.

/// Round to the nearest integer, halves rounding towards positive infinity.
///
/// Non-finite inputs map to `0`; values beyond the `i64` range saturate.
///
/// # Examples
/// ```
/// use vanta_core::rounding::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(0.49), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "rounding converts a finite float to the nearest integer; `as` saturates"
)]
pub fn round_half_up(value: f64) -> i64 {
    if value.is_finite() {
        (value + 0.5).floor() as i64
    } else {
        0
    }
}

/// Round to one decimal place using round-half-up semantics.
///
/// # Examples
/// ```
/// use vanta_core::rounding::round_to_tenth;
///
/// assert_eq!(round_to_tenth(111.194_926), 111.2);
/// assert_eq!(round_to_tenth(-0.04), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "kilometre figures are reported with one decimal place"
)]
pub fn round_to_tenth(value: f64) -> f64 {
    if value.is_finite() {
        let rounded = (value * 10.0 + 0.5).floor() / 10.0;
        // Avoid reporting `-0.0`.
        if rounded == 0.0 { 0.0 } else { rounded }
    } else {
        0.0
    }
}
