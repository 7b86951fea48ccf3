//! # Paymill Inspect
//!
//! Reads a stored gateway response and prints the normalized resource, or the
//! classified error for a failed response.

use clap::Parser;
use paymill_core::config::{ConfigError, EngineConfig};
use paymill_core::logging::codes;
use paymill_core::types::UnknownResourceKind;
use paymill_core::{log_success, log_warning};
use paymill_core::{Dispatched, ErrorObject, ResourceKind, ResponseHandler};
use std::path::{Path, PathBuf};

/// Exit status for a response that failed validation
pub const EXIT_FAILED_RESPONSE: i32 = 2;

/// `paymill-inspect` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "paymill-inspect",
    about = "Normalize a stored Paymill API response into typed resources",
    version
)]
pub struct CliArgs {
    /// JSON file holding a full `{header, body}` response.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
    /// Resource kind the response was requested for, e.g. `transaction`.
    #[arg(long, short = 'r', value_name = "KIND")]
    pub resource: String,
    /// TOML configuration file. Falls back to `PAYMILL_*` variables when omitted.
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read response file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    UnknownResourceKind(#[from] UnknownResourceKind),
}

/// Result of inspecting one response
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Option<Dispatched>),
    Failure(ErrorObject),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success(_) => 0,
            Outcome::Failure(_) => EXIT_FAILED_RESPONSE,
        }
    }

    /// JSON rendering of the dispatched value (or `null`) or the error
    pub fn render(&self, pretty: bool) -> Result<String, CliError> {
        let rendered = match (self, pretty) {
            (Outcome::Success(dispatched), true) => serde_json::to_string_pretty(dispatched)?,
            (Outcome::Success(dispatched), false) => serde_json::to_string(dispatched)?,
            (Outcome::Failure(error), true) => serde_json::to_string_pretty(error)?,
            (Outcome::Failure(error), false) => serde_json::to_string(error)?,
        };
        Ok(rendered)
    }
}

/// Explicit config file when given, environment otherwise
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, CliError> {
    let config = match path {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::from_env()?,
    };
    Ok(config)
}

/// Report how configuration loading went
///
/// Called once the global logger is installed, since loading decides its
/// preferences.
pub fn record_config_outcome(path: Option<&Path>, loaded: &Result<EngineConfig, CliError>) {
    match (loaded, path) {
        (Ok(config), _) => log_success!(
            codes::success::CONFIG_LOADED,
            "Configuration loaded",
            "max_depth" => config.dispatch.max_depth
        ),
        (Err(error), Some(path)) => log_warning!(
            codes::configuration::CONFIG_PARSE_ERROR,
            "Failed to load configuration file",
            "path" => path.display(),
            "error" => error
        ),
        (Err(error), None) => log_warning!(
            codes::configuration::CONFIG_INVALID,
            "Invalid PAYMILL_* environment configuration",
            "error" => error
        ),
    }
}

/// Inspect the response file named by `args`
pub fn inspect(args: &CliArgs, config: &EngineConfig) -> Result<Outcome, CliError> {
    let kind: ResourceKind = args.resource.parse()?;
    let text = std::fs::read_to_string(&args.input)?;
    let response: serde_json::Value = serde_json::from_str(&text)?;

    let handler = ResponseHandler::from_config(config);
    Ok(match handler.handle(&response, kind) {
        Ok(dispatched) => Outcome::Success(dispatched),
        Err(error) => Outcome::Failure(error),
    })
}

/// Load configuration then inspect
pub fn run(args: &CliArgs) -> Result<Outcome, CliError> {
    let loaded = load_config(args.config.as_deref());
    record_config_outcome(args.config.as_deref(), &loaded);
    inspect(args, &loaded?)
}
