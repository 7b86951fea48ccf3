//! Global logging module for the Paymill engine
//!
//! Provides a process-wide logger that is installed once and is a silent no-op
//! until then, plus a macro interface keyed by [`Code`].

pub mod codes;
pub mod events;
#[macro_use]
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
#[cfg(feature = "logging")]
pub use service::LogCrateLogger;
pub use service::{
    ConsoleLogger, Logger, LoggingService, MemoryLogger, NullLogger, StructuredLogger,
};

use crate::config::runtime::LoggingPreferences;

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let service = Arc::new(LoggingService::with_preferences(preferences));
    init_global_logging_with_service(service.clone())?;

    service.log_success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );

    Ok(())
}

/// Initialize with custom service (log crate bridge, tests)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether debug events would reach the installed logger
pub fn debug_enabled() -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(LogLevel::Debug))
        .unwrap_or(false)
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log an event with context (used by the logging macros)
pub fn log_with_context(level: LogLevel, code: Code, message: &str, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    if !logger.should_log(level) {
        return;
    }

    let mut event = match level {
        LogLevel::Error => LogEvent::error(code, message),
        LogLevel::Warning => LogEvent::warning_with_code(code, message),
        LogLevel::Info => LogEvent::success(code, message),
        LogLevel::Debug => LogEvent::debug_with_code(code, message),
    };

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}
