//! Errors surfaced by the optimization pipeline.
//!
//! Every failure is local and synchronous; nothing here is worth retrying
//! because the optimizer is deterministic.

use thiserror::Error;

use crate::{JobId, TourError};

/// The request as a whole could not be optimized.
///
/// Callers surface these as client errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The request body was not a JSON object.
    #[error("route request must be a JSON object")]
    NotAnObject,
    /// The `jobs` field was absent or null.
    #[error("route request is missing `jobs`")]
    MissingJobs,
    /// The `jobs` field was present but not an array.
    #[error("`jobs` must be an array of job records")]
    JobsNotArray,
    /// The job collection had no entries.
    #[error("`jobs` must contain at least one job")]
    EmptyJobs,
    /// The worker position was absent or not a finite number.
    #[error("`{field}` must be a finite number")]
    InvalidOrigin {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A job record could not be decoded at all, e.g. it had no `id`.
    #[error("job at index {index} could not be decoded: {message}")]
    UndecodableJob {
        /// Position of the record in `jobs`.
        index: usize,
        /// Decoder diagnostic.
        message: String,
    },
    /// Every job was dropped by the skip policy.
    #[error("no job in the batch has a usable location")]
    NoUsableJobs,
}

/// Why a job's location could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedJobReason {
    /// The record had no `{lat, lng}` location.
    #[error("location is missing or is not a {{lat, lng}} pair")]
    MissingLocation,
    /// A coordinate component was `NaN` or infinite.
    #[error("location has a non-finite coordinate")]
    NonFiniteCoordinate,
}

/// Errors returned by [`RouteOptimizer::optimize`](crate::RouteOptimizer::optimize).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The request was rejected before any computation.
    #[error("invalid route request: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// A job lacked a usable coordinate under the reject policy.
    #[error("job {id} is malformed: {reason}")]
    MalformedJob {
        /// Identifier of the offending job.
        id: JobId,
        /// What was wrong with it.
        reason: MalformedJobReason,
    },
    /// The tour builder produced an order that does not cover every job once.
    #[error("tour builder produced an invalid tour: {0}")]
    InvalidTour(#[from] TourError),
    /// The route result could not be encoded as JSON.
    #[error("failed to encode route result: {message}")]
    Encode {
        /// Encoder failure message.
        message: String,
    },
}
