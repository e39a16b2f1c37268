//! Inbound optimization requests.
//!
//! The wire shape is `{ "jobs": [...], "worker_lat": n, "worker_lng": n }`.
//! [`RouteRequest::from_value`] maps each way that body can be wrong onto an
//! [`InvalidInput`] variant so transports can report precise client errors.

use serde_json::{Map, Value};

use crate::{
    Coordinate, InvalidInput, Job, MalformedJobPolicy, MalformedJobReason, RouteError, Stop,
};

const FIELD_JOBS: &str = "jobs";
const FIELD_WORKER_LAT: &str = "worker_lat";
const FIELD_WORKER_LNG: &str = "worker_lng";

/// A technician's position and the jobs to be ordered.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use vanta_core::{Coordinate, RouteRequest};
///
/// let request = RouteRequest::from_value(json!({
///     "worker_lat": 0.0,
///     "worker_lng": 0.0,
///     "jobs": [{ "id": "J1", "location": { "lat": 0.0, "lng": 1.0 } }]
/// }))?;
/// assert_eq!(request.origin, Coordinate::new(0.0, 0.0));
/// assert_eq!(request.jobs.len(), 1);
/// # Ok::<(), vanta_core::InvalidInput>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    /// Where the technician starts.
    pub origin: Coordinate,
    /// Jobs in the order the caller supplied them.
    pub jobs: Vec<Job>,
}

impl RouteRequest {
    /// Construct a request from an origin and jobs.
    #[must_use]
    pub const fn new(origin: Coordinate, jobs: Vec<Job>) -> Self {
        Self { origin, jobs }
    }

    /// Decode a request from its JSON body.
    ///
    /// Jobs with unusable locations still decode; they are handled later by
    /// the malformed-job policy.
    ///
    /// # Errors
    /// Returns [`InvalidInput`] when the body is not an object, `jobs` is
    /// missing, not an array or empty, the worker position is unusable, or a
    /// job record cannot be decoded.
    pub fn from_value(value: Value) -> Result<Self, InvalidInput> {
        let Value::Object(mut body) = value else {
            return Err(InvalidInput::NotAnObject);
        };
        let records = match body.remove(FIELD_JOBS) {
            None | Some(Value::Null) => return Err(InvalidInput::MissingJobs),
            Some(Value::Array(records)) => records,
            Some(_) => return Err(InvalidInput::JobsNotArray),
        };
        if records.is_empty() {
            return Err(InvalidInput::EmptyJobs);
        }
        let origin = Coordinate::new(
            origin_component(&body, FIELD_WORKER_LAT)?,
            origin_component(&body, FIELD_WORKER_LNG)?,
        );
        let jobs = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value::<Job>(record).map_err(|source| {
                    InvalidInput::UndecodableJob {
                        index,
                        message: source.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { origin, jobs })
    }

    /// Validate the request and pair each usable job with its location.
    ///
    /// Stops keep the caller's job order.
    ///
    /// # Errors
    /// Returns [`InvalidInput::EmptyJobs`] for an empty batch,
    /// [`InvalidInput::InvalidOrigin`] for a non-finite origin,
    /// [`RouteError::MalformedJob`] for the first malformed job under
    /// [`MalformedJobPolicy::Reject`], and [`InvalidInput::NoUsableJobs`] if
    /// [`MalformedJobPolicy::Skip`] drops every job.
    pub fn stops(&self, policy: MalformedJobPolicy) -> Result<Vec<Stop<'_>>, RouteError> {
        if self.jobs.is_empty() {
            return Err(InvalidInput::EmptyJobs.into());
        }
        if !self.origin.lat.is_finite() {
            return Err(InvalidInput::InvalidOrigin {
                field: FIELD_WORKER_LAT,
            }
            .into());
        }
        if !self.origin.lng.is_finite() {
            return Err(InvalidInput::InvalidOrigin {
                field: FIELD_WORKER_LNG,
            }
            .into());
        }

        let mut stops = Vec::with_capacity(self.jobs.len());
        for job in &self.jobs {
            match usable_location(job) {
                Ok(location) => stops.push(Stop::new(job, location)),
                Err(reason) => match policy {
                    MalformedJobPolicy::Reject => {
                        return Err(RouteError::MalformedJob {
                            id: job.id.clone(),
                            reason,
                        });
                    }
                    MalformedJobPolicy::Skip => {
                        log::warn!("skipping job {}: {reason}", job.id);
                    }
                },
            }
        }
        if stops.is_empty() {
            return Err(InvalidInput::NoUsableJobs.into());
        }
        Ok(stops)
    }
}

fn usable_location(job: &Job) -> Result<Coordinate, MalformedJobReason> {
    let location = job.location.ok_or(MalformedJobReason::MissingLocation)?;
    if location.is_finite() {
        Ok(location)
    } else {
        Err(MalformedJobReason::NonFiniteCoordinate)
    }
}

fn origin_component(body: &Map<String, Value>, field: &'static str) -> Result<f64, InvalidInput> {
    let value = match body.get(field) {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    value
        .filter(|component| component.is_finite())
        .ok_or(InvalidInput::InvalidOrigin { field })
}
