//! `optimise` command implementation for the Vanta CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vanta_core::{MalformedJobPolicy, OptimizerConfig, RouteRequest, RouteResult};
use vanta_fs::{create_file, is_regular_file, open_file};
use vanta_solver_greedy::optimizer_with_config;

use crate::{
    ARG_AVERAGE_SPEED_KMH, ARG_DEFAULT_JOB_MINUTES, ARG_FUEL_KM_PER_UNIT, ARG_FUEL_PRICE_PER_UNIT,
    ARG_MALFORMED_JOBS, ARG_OUTPUT, ARG_REQUEST, ARG_REVENUE_JOB_MINUTES, CliError, ENV_REQUEST,
};

/// CLI arguments for the `optimise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order a technician's jobs with the nearest-neighbour \
                 heuristic. The request is a JSON object with worker_lat, \
                 worker_lng and a jobs array. Cost assumptions can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Optimize the visiting order of a job batch"
)]
#[ortho_config(prefix = "VANTA")]
pub(crate) struct OptimiseArgs {
    /// Path to a JSON file containing the route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Write the result here instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Average driving speed in km/h.
    #[arg(long = ARG_AVERAGE_SPEED_KMH, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
    /// Kilometres driven per unit of fuel.
    #[arg(long = ARG_FUEL_KM_PER_UNIT, value_name = "km")]
    #[serde(default)]
    pub(crate) fuel_km_per_unit: Option<f64>,
    /// Price of one unit of fuel.
    #[arg(long = ARG_FUEL_PRICE_PER_UNIT, value_name = "price")]
    #[serde(default)]
    pub(crate) fuel_price_per_unit: Option<f64>,
    /// On-site minutes assumed for jobs without an estimate.
    #[arg(long = ARG_DEFAULT_JOB_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) default_job_minutes: Option<f64>,
    /// Minutes of freed time that count as one extra job.
    #[arg(long = ARG_REVENUE_JOB_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) revenue_job_minutes: Option<f64>,
    /// What to do with jobs lacking a usable location: reject or skip.
    #[arg(long = ARG_MALFORMED_JOBS, value_name = "policy")]
    #[serde(default)]
    pub(crate) malformed_jobs: Option<MalformedJobPolicy>,
}

impl OptimiseArgs {
    pub(crate) fn into_config(self) -> Result<OptimiseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimiseConfig::try_from(merged)
    }
}

/// Resolved `optimise` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimiseConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Destination file; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Validated optimizer assumptions.
    pub(crate) optimizer: OptimizerConfig,
}

impl OptimiseConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<OptimiseArgs> for OptimiseConfig {
    type Error = CliError;

    fn try_from(args: OptimiseArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;

        let defaults = OptimizerConfig::default();
        let optimizer = OptimizerConfig {
            average_speed_kmh: args.average_speed_kmh.unwrap_or(defaults.average_speed_kmh),
            fuel_km_per_unit: args.fuel_km_per_unit.unwrap_or(defaults.fuel_km_per_unit),
            fuel_price_per_unit: args
                .fuel_price_per_unit
                .unwrap_or(defaults.fuel_price_per_unit),
            default_job_minutes: args
                .default_job_minutes
                .unwrap_or(defaults.default_job_minutes),
            revenue_job_minutes: args
                .revenue_job_minutes
                .unwrap_or(defaults.revenue_job_minutes),
            malformed_jobs: args.malformed_jobs.unwrap_or(defaults.malformed_jobs),
            ..defaults
        };
        optimizer.validate()?;

        Ok(Self {
            request_path,
            output: args.output,
            optimizer,
        })
    }
}

pub(crate) fn run_optimise(args: OptimiseArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimise_with(args, &mut stdout)
}

/// Run the command, writing to `writer` unless an output file is configured.
pub(crate) fn run_optimise_with(
    args: OptimiseArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_optimise_config(args)?;
    let result = execute_optimise(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = create_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_route_result(&mut file, &result)?;
            log::info!("wrote optimized route to {path}");
            Ok(())
        }
        None => write_route_result(writer, &result),
    }
}

fn resolve_optimise_config(args: OptimiseArgs) -> Result<OptimiseConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_optimise(config: &OptimiseConfig) -> Result<RouteResult, CliError> {
    let request = load_route_request(&config.request_path)?;
    let optimizer = optimizer_with_config(config.optimizer)?;
    optimizer.optimize(&request).map_err(CliError::Optimize)
}

/// Loads and validates a JSON-encoded [`RouteRequest`] from disk.
pub(crate) fn load_route_request(path: &Utf8Path) -> Result<RouteRequest, CliError> {
    let file = open_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let body: Value =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
            path: path.to_path_buf(),
            source,
        })?;
    RouteRequest::from_value(body).map_err(|source| CliError::InvalidRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_route_result(writer: &mut dyn Write, result: &RouteResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerializeResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
