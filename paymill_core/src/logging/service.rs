//! Logging service implementation

use super::codes::Code;
use super::events::{LogEvent, LogLevel};
use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, Mutex, MutexGuard};

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with configuration awareness
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    /// Create new logging service with specified logger and minimum level
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service from logging preferences
    pub fn with_preferences(preferences: &LoggingPreferences) -> Self {
        let min_level = preferences.min_log_level.to_events_log_level();
        let logger: Arc<dyn Logger> = if !preferences.enabled {
            Arc::new(NullLogger)
        } else if preferences.structured {
            Arc::new(StructuredLogger::new(min_level))
        } else {
            Arc::new(ConsoleLogger::new(min_level))
        };

        Self::new(logger, min_level)
    }

    /// Set minimum log level
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Check if level should be logged
    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    /// Log an event
    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }

    pub fn log_error(&self, error_code: Code, message: &str) {
        self.log_event(LogEvent::error(error_code, message));
    }

    pub fn log_warning_with_code(&self, warning_code: Code, message: &str) {
        self.log_event(LogEvent::warning_with_code(warning_code, message));
    }

    pub fn log_success(&self, success_code: Code, message: &str) {
        self.log_event(LogEvent::success(success_code, message));
    }

    pub fn log_debug(&self, message: &str) {
        self.log_event(LogEvent::debug(message));
    }
}

/// Discards every event
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &LogEvent) {}
}

/// Simple console logger writing to stderr so stdout stays free for output
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            eprintln!("{}", event.format());
        }
    }
}

/// Structured logger for JSON output and better tooling integration
pub struct StructuredLogger {
    min_level: LogLevel,
}

impl StructuredLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        if event.level <= self.min_level {
            match event.format_json() {
                Ok(json) => eprintln!("{}", json),
                // Fallback to regular format if JSON serialization fails
                Err(_) => eprintln!("{}", event.format()),
            }
        }
    }
}

/// Forwards events into the `log` crate facade
#[cfg(feature = "logging")]
pub struct LogCrateLogger;

#[cfg(feature = "logging")]
impl Logger for LogCrateLogger {
    fn log(&self, event: &LogEvent) {
        let level = match event.level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        };
        log::log!(target: "paymill_core", level, "{}", event.format());
    }
}

/// Memory logger for testing
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
    capacity: usize,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::with_capacity(crate::config::constants::compile_time::logging::MEMORY_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn event_count(&self) -> usize {
        self.lock().len()
    }

    pub fn get_warnings(&self) -> Vec<LogEvent> {
        self.lock()
            .iter()
            .filter(|e| e.is_warning())
            .cloned()
            .collect()
    }

    pub fn get_events_with_code(&self, code: Code) -> Vec<LogEvent> {
        self.lock()
            .iter()
            .filter(|e| e.code == code)
            .cloned()
            .collect()
    }

    pub fn has_event_with_code(&self, code: Code) -> bool {
        self.lock().iter().any(|e| e.code == code)
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        let mut events = self.lock();

        if events.len() >= self.capacity {
            // Remove oldest events to make room
            let remove_count = events.len() - self.capacity + 1;
            events.drain(0..remove_count);
        }

        events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_service_respects_min_level() {
        let memory = Arc::new(MemoryLogger::new());
        let service = LoggingService::new(memory.clone(), LogLevel::Warning);

        service.log_debug("dropped");
        service.log_warning_with_code(codes::dispatch::DEPTH_LIMIT_EXCEEDED, "kept");
        service.log_error(codes::dispatch::MISSING_BUILDER, "kept too");

        assert_eq!(memory.event_count(), 2);
        assert_eq!(memory.get_warnings().len(), 1);
        assert!(memory.has_event_with_code(codes::dispatch::MISSING_BUILDER));
    }

    #[test]
    fn test_memory_logger_capacity() {
        let memory = MemoryLogger::with_capacity(3);
        for i in 0..5 {
            memory.log(&LogEvent::success(codes::success::DISPATCH_COMPLETED, &format!("event {}", i)));
        }

        let events = memory.get_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].message, "event 2");
        assert_eq!(events[2].message, "event 4");

        memory.clear();
        assert_eq!(memory.event_count(), 0);
    }

    #[test]
    fn test_set_min_level() {
        let memory = Arc::new(MemoryLogger::new());
        let mut service = LoggingService::new(memory.clone(), LogLevel::Error);
        assert!(!service.should_log(LogLevel::Info));

        service.set_min_level(LogLevel::Debug);
        service.log_success(codes::success::DISPATCH_COMPLETED, "ok");
        assert_eq!(
            memory
                .get_events_with_code(codes::success::DISPATCH_COMPLETED)
                .len(),
            1
        );
    }

    #[test]
    fn test_disabled_preferences_use_null_logger() {
        let preferences = LoggingPreferences {
            enabled: false,
            ..LoggingPreferences::default()
        };
        let service = LoggingService::with_preferences(&preferences);
        service.log_error(codes::dispatch::MISSING_BUILDER, "goes nowhere");
        assert_eq!(
            service.min_level(),
            preferences.min_log_level.to_events_log_level()
        );
    }
}
