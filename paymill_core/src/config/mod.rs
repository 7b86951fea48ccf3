//! Configuration module for the Paymill engine
//!
//! Compile-time limits live in [`constants`]; user preferences that may be
//! loaded from TOML or the environment live in [`runtime`]. The engine itself
//! never reads the environment: callers construct an [`EngineConfig`] and pass it in.

pub mod constants;
pub mod runtime;

pub use runtime::{ConfigError, DispatchPreferences, EngineConfig, LoggingPreferences};
