//! # Paymill Inspect CLI

use clap::Parser;
use paymill_cli::{inspect, load_config, record_config_outcome, CliArgs};
use paymill_core::config::LoggingPreferences;
use paymill_core::logging::{self, LogCrateLogger, LoggingService, NullLogger};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let loaded = load_config(args.config.as_deref());
    let preferences = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    if let Err(error) = init_logging(&preferences) {
        log::warn!("{error}");
    }
    record_config_outcome(args.config.as_deref(), &loaded);

    let config = match loaded {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match inspect(&args, &config) {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    match outcome.render(args.pretty) {
        Ok(rendered) => println!("{rendered}"),
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::from(outcome.exit_code() as u8)
}

/// Route engine events through the `log` facade so `RUST_LOG` controls them
fn init_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let min_level = preferences.min_log_level.to_events_log_level();
    let service = if preferences.enabled {
        LoggingService::new(Arc::new(LogCrateLogger), min_level)
    } else {
        LoggingService::new(Arc::new(NullLogger), min_level)
    };
    logging::init_global_logging_with_service(Arc::new(service))
}
