//! Core domain types for the Vanta route optimizer.
//!
//! The crate models a technician's job batch, measures great-circle legs
//! between job sites, and runs the optimization pipeline:
//! tour construction, time estimation, savings, then result assembly.
//! Tour construction itself is delegated to a [`TourBuilder`] strategy so that
//! alternative solvers can replace the default heuristic without changing the
//! shape of a [`RouteResult`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod coordinate;
pub mod distance;
pub mod error;
pub mod job;
pub mod optimizer;
pub mod request;
pub mod result;
pub mod rounding;
pub mod savings;
pub mod timing;
pub mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{ConfigError, MalformedJobPolicy, OptimizerConfig, ParsePolicyError};
pub use coordinate::Coordinate;
pub use distance::Haversine;
pub use error::{InvalidInput, MalformedJobReason, RouteError};
pub use job::{Job, JobAttributes, JobId};
pub use optimizer::RouteOptimizer;
pub use request::RouteRequest;
pub use result::{FinancialImpact, JobSummary, Metrics, RouteResult};
pub use savings::Savings;
pub use timing::TimeEstimate;
pub use tour::{Stop, Tour, TourBuilder, TourError};
