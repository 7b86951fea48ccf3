// RUNTIME PREFERENCES

use super::constants::compile_time::dispatch::{DEFAULT_DISPATCH_DEPTH, MAX_DISPATCH_DEPTH};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Log level as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[serde(alias = "warn")]
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        crate::logging::LogLevel::from_name(name).map(|level| match level {
            crate::logging::LogLevel::Error => LogLevel::Error,
            crate::logging::LogLevel::Warning => LogLevel::Warning,
            crate::logging::LogLevel::Info => LogLevel::Info,
            crate::logging::LogLevel::Debug => LogLevel::Debug,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchPreferences {
    /// Maximum nested resource depth (bounded by the compile-time cap)
    pub max_depth: usize,

    /// Whether to emit a debug event for every built resource
    pub trace_dispatch: bool,
}

impl Default for DispatchPreferences {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DISPATCH_DEPTH,
            trace_dispatch: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,

    /// Emit one JSON object per event instead of plain lines
    pub structured: bool,

    /// Master switch; disabled installs a null logger
    pub enabled: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: LogLevel::Warning,
            structured: false,
            enabled: true,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub dispatch: DispatchPreferences,
    pub logging: LoggingPreferences,
}

impl EngineConfig {
    /// Build configuration from `PAYMILL_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            dispatch: DispatchPreferences {
                max_depth: lookup("PAYMILL_MAX_DISPATCH_DEPTH")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.dispatch.max_depth),
                trace_dispatch: lookup("PAYMILL_TRACE_DISPATCH")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.dispatch.trace_dispatch),
            },
            logging: LoggingPreferences {
                min_log_level: lookup("PAYMILL_LOG_LEVEL")
                    .and_then(|v| LogLevel::from_name(&v))
                    .unwrap_or(defaults.logging.min_log_level),
                structured: lookup("PAYMILL_STRUCTURED_LOGGING")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.logging.structured),
                enabled: lookup("PAYMILL_LOGGING_ENABLED")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.logging.enabled),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate preferences against compile-time limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dispatch.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dispatch.max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.dispatch.max_depth > MAX_DISPATCH_DEPTH {
            return Err(ConfigError::InvalidValue {
                field: "dispatch.max_depth".to_string(),
                reason: format!("exceeds hard limit of {}", MAX_DISPATCH_DEPTH),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dispatch.max_depth, DEFAULT_DISPATCH_DEPTH);
        assert_eq!(config.logging.min_log_level, LogLevel::Warning);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PAYMILL_MAX_DISPATCH_DEPTH", "4"),
            ("PAYMILL_TRACE_DISPATCH", "true"),
            ("PAYMILL_LOG_LEVEL", "debug"),
            ("PAYMILL_STRUCTURED_LOGGING", "not-a-bool"),
        ]
        .into_iter()
        .collect();

        let config =
            EngineConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.dispatch.max_depth, 4);
        assert!(config.dispatch.trace_dispatch);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        // Unparseable values fall back to defaults
        assert!(!config.logging.structured);
    }

    #[test]
    fn test_from_lookup_rejects_depth_over_cap() {
        let result = EngineConfig::from_lookup(|key| {
            (key == "PAYMILL_MAX_DISPATCH_DEPTH").then(|| (MAX_DISPATCH_DEPTH + 1).to_string())
        });
        assert_matches!(result, Err(ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_toml_partial_document() {
        let config = EngineConfig::from_toml_str(
            r#"
            [dispatch]
            max_depth = 3

            [logging]
            min_log_level = "warn"
            structured = true
            "#,
        )
        .unwrap();

        assert_eq!(config.dispatch.max_depth, 3);
        assert!(!config.dispatch.trace_dispatch);
        assert_eq!(config.logging.min_log_level, LogLevel::Warning);
        assert!(config.logging.structured);
        assert!(config.logging.enabled);
    }

    #[test]
    fn test_toml_zero_depth_rejected() {
        let result = EngineConfig::from_toml_str("[dispatch]\nmax_depth = 0\n");
        assert_matches!(result, Err(ConfigError::InvalidValue { field, .. }) if field == "dispatch.max_depth");
    }

    #[test]
    fn test_toml_syntax_error() {
        let result = EngineConfig::from_toml_str("[dispatch\nmax_depth = ");
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nenabled = false").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert!(!config.logging.enabled);

        let missing = EngineConfig::from_file(file.path().with_extension("missing"));
        assert_matches!(missing, Err(ConfigError::Io(_)));
    }
}
