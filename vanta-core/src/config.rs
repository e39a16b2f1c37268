//! Tunable assumptions behind the optimizer's estimates.
//!
//! Every constant that shapes a reported figure lives in
//! [`OptimizerConfig`]. The defaults reproduce the dispatch dashboard's
//! published numbers; tests and deployments can override any of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance::EARTH_RADIUS_KM;

/// What to do with jobs that have no usable coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedJobPolicy {
    /// Fail the whole batch on the first malformed job.
    #[default]
    Reject,
    /// Drop malformed jobs, logging a warning for each.
    Skip,
}

impl fmt::Display for MalformedJobPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reject => "reject",
            Self::Skip => "skip",
        })
    }
}

/// Error returned when parsing a [`MalformedJobPolicy`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown malformed job policy {0:?} (expected `reject` or `skip`)")]
pub struct ParsePolicyError(pub String);

impl FromStr for MalformedJobPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            _ => Err(ParsePolicyError(s.to_owned())),
        }
    }
}

/// Assumptions used to turn distances into time and money.
///
/// # Examples
/// ```
/// use vanta_core::OptimizerConfig;
///
/// let config = OptimizerConfig {
///     average_speed_kmh: 30.0,
///     ..OptimizerConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.fuel_price_per_unit, 3.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Sphere radius for haversine distances.
    pub earth_radius_km: f64,
    /// Constant travel speed between sites.
    pub average_speed_kmh: f64,
    /// Kilometres covered per unit of fuel.
    pub fuel_km_per_unit: f64,
    /// Price of one unit of fuel.
    pub fuel_price_per_unit: f64,
    /// On-site duration assumed when a job does not state one.
    pub default_job_minutes: f64,
    /// Length of the job slot used to express freed time as extra jobs.
    pub revenue_job_minutes: f64,
    /// Handling of jobs without a usable coordinate.
    pub malformed_jobs: MalformedJobPolicy,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            average_speed_kmh: 50.0,
            fuel_km_per_unit: 10.0,
            fuel_price_per_unit: 3.5,
            default_job_minutes: 60.0,
            revenue_job_minutes: 45.0,
            malformed_jobs: MalformedJobPolicy::Reject,
        }
    }
}

/// Errors returned by [`OptimizerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A divisor or physical quantity was zero, negative or not finite.
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive {
        /// Name of the offending setting.
        field: &'static str,
        /// Value that was rejected.
        value: f64,
    },
    /// A quantity that may be zero was negative or not finite.
    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative {
        /// Name of the offending setting.
        field: &'static str,
        /// Value that was rejected.
        value: f64,
    },
}

impl OptimizerConfig {
    /// Check that every assumption is usable.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the first setting that is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("earth_radius_km", self.earth_radius_km),
            ("average_speed_kmh", self.average_speed_kmh),
            ("fuel_km_per_unit", self.fuel_km_per_unit),
            ("revenue_job_minutes", self.revenue_job_minutes),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("fuel_price_per_unit", self.fuel_price_per_unit),
            ("default_job_minutes", self.default_job_minutes),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Minutes needed to drive `distance_km` at the configured speed.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "travel time is derived from floating-point kilometres"
    )]
    pub fn travel_minutes(&self, distance_km: f64) -> f64 {
        distance_km / self.average_speed_kmh * 60.0
    }
}
