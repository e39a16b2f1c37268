//! The optimizer's output, shaped for the dashboard's JSON contract.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, JobAttributes, JobId, Stop};

/// Keys that [`JobSummary`] owns in its serialized form.
const SUMMARY_KEYS: [&str; 4] = ["id", "title", "location", "estimatedDuration"];

/// One job in visiting order.
///
/// Unrecognised job attributes are flattened alongside the known fields so
/// callers get back whatever they sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    /// Job identifier.
    pub id: JobId,
    /// Display title, `null` when the job had none.
    pub title: Option<String>,
    /// Job site.
    pub location: Coordinate,
    /// On-site minutes used for the estimate, after defaulting.
    pub estimated_duration: f64,
    /// Attributes carried through from the request.
    #[serde(flatten)]
    pub attributes: JobAttributes,
}

impl JobSummary {
    /// Summarise a stop, using `default_minutes` when it has no duration.
    #[must_use]
    pub fn from_stop(stop: &Stop<'_>, default_minutes: f64) -> Self {
        let attributes = stop
            .job
            .attributes
            .iter()
            .filter(|(key, _)| !SUMMARY_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self {
            id: stop.job.id.clone(),
            title: stop.job.title.clone(),
            location: stop.location,
            estimated_duration: stop.job.effective_duration(default_minutes),
            attributes,
        }
    }
}

/// Distance and time figures for the computed route.
///
/// Distances are kilometres rounded to one decimal place; times are whole
/// minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Length of the optimized route from the origin.
    pub total_distance: f64,
    /// Length of the route in the supplied order from the origin.
    pub original_distance: f64,
    /// `original_distance - total_distance`; may be negative.
    pub distance_saved: f64,
    /// Saved distance as a share of the original.
    pub distance_saved_percent: i64,
    /// Sum of on-site durations.
    pub work_time: i64,
    /// Driving time between jobs, excluding the first leg.
    pub travel_time: i64,
    /// Work plus travel time.
    pub total_time: i64,
    /// Number of jobs routed.
    pub jobs: usize,
}

/// Illustrative value of the saved distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialImpact {
    /// Fuel cost saved, in currency units.
    pub fuel_savings: i64,
    /// Driving minutes saved.
    pub time_savings: i64,
    /// Extra job slots the saved time could hold. Never negative.
    pub revenue_opportunity: i64,
}

/// Complete response for one optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Job identifiers in visiting order.
    pub ordered_jobs: Vec<JobId>,
    /// Job details in the same order as `ordered_jobs`.
    pub job_sequence: Vec<JobSummary>,
    /// Distance and time figures.
    pub metrics: Metrics,
    /// Financial reading of the savings.
    pub financial_impact: FinancialImpact,
}
