//! Distance savings against the caller's order and their financial reading.
//!
//! The comparison baseline is the route driven in the order the jobs were
//! supplied, including the leg from the origin to the first job. The money
//! and capacity figures are illustrative: they rest on the fixed fuel and
//! speed assumptions in [`OptimizerConfig`].

use crate::rounding::round_half_up;
use crate::{FinancialImpact, OptimizerConfig};

/// Distance comparison between the supplied and the optimized order.
///
/// # Examples
/// ```
/// use vanta_core::{OptimizerConfig, Savings};
///
/// let savings = Savings::new(120.0, 100.0);
/// let impact = savings.financial_impact(&OptimizerConfig::default());
/// assert_eq!(savings.percent(), 17);
/// assert_eq!(impact.fuel_savings, 7);
/// assert_eq!(impact.time_savings, 24);
/// assert_eq!(impact.revenue_opportunity, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Savings {
    /// Kilometres driven in the supplied order.
    pub original_km: f64,
    /// Kilometres driven in the optimized order.
    pub optimized_km: f64,
}

impl Savings {
    /// Compare an original route length with an optimized one.
    #[must_use]
    pub const fn new(original_km: f64, optimized_km: f64) -> Self {
        Self {
            original_km,
            optimized_km,
        }
    }

    /// Kilometres saved. Negative when the heuristic did worse than the
    /// supplied order.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "difference of two distances")]
    pub fn saved_km(&self) -> f64 {
        self.original_km - self.optimized_km
    }

    /// Share of the original distance saved, as a whole percentage.
    ///
    /// Zero when the original route has no length.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "percentage of a distance")]
    pub fn percent(&self) -> i64 {
        if self.original_km == 0.0 {
            return 0;
        }
        round_half_up(self.saved_km() / self.original_km * 100.0)
    }

    /// Translate the saved distance into fuel, time and extra capacity.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "financial figures are derived from floating-point kilometres"
    )]
    pub fn financial_impact(&self, config: &OptimizerConfig) -> FinancialImpact {
        let saved_km = self.saved_km();
        let fuel_savings =
            round_half_up(saved_km / config.fuel_km_per_unit * config.fuel_price_per_unit);
        let time_savings = round_half_up(config.travel_minutes(saved_km));
        let revenue_opportunity =
            round_half_up(time_savings as f64 / config.revenue_job_minutes).max(0);
        FinancialImpact {
            fuel_savings,
            time_savings,
            revenue_opportunity,
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    clippy::float_cmp,
    reason = "savings tests use exact literal distances"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn twenty_kilometres_saved() {
        let impact = Savings::new(50.0, 30.0).financial_impact(&OptimizerConfig::default());
        assert_eq!(
            impact,
            FinancialImpact {
                fuel_savings: 7,
                time_savings: 24,
                revenue_opportunity: 1,
            }
        );
    }

    #[rstest]
    fn zero_original_distance_reports_zero_percent() {
        let savings = Savings::new(0.0, 0.0);
        assert_eq!(savings.percent(), 0);
        assert_eq!(savings.saved_km(), 0.0);
    }

    #[rstest]
    fn worse_route_has_negative_savings_but_no_negative_capacity() {
        let savings = Savings::new(100.0, 150.0);
        let impact = savings.financial_impact(&OptimizerConfig::default());
        assert_eq!(savings.saved_km(), -50.0);
        assert_eq!(savings.percent(), -50);
        assert_eq!(impact.fuel_savings, -17);
        assert_eq!(impact.time_savings, -60);
        assert_eq!(impact.revenue_opportunity, 0);
    }

    #[rstest]
    #[case(22.0, 0)]
    #[case(23.0, 1)]
    #[case(67.0, 1)]
    #[case(68.0, 2)]
    fn capacity_counts_whole_job_slots(#[case] freed_minutes: f64, #[case] expected: i64) {
        // At 50 km/h one kilometre takes 1.2 minutes.
        let saved_km = freed_minutes / 1.2;
        let impact = Savings::new(saved_km, 0.0).financial_impact(&OptimizerConfig::default());
        assert_eq!(impact.revenue_opportunity, expected);
    }

    #[rstest]
    fn fuel_figures_follow_configuration() {
        let config = OptimizerConfig {
            fuel_km_per_unit: 20.0,
            fuel_price_per_unit: 2.0,
            ..OptimizerConfig::default()
        };
        let impact = Savings::new(100.0, 0.0).financial_impact(&config);
        assert_eq!(impact.fuel_savings, 10);
    }
}
