//! Logging service and logger backends

use super::codes::Code;
use super::events::{LogEvent, LogLevel};
use crate::config::runtime::{LogBackend, LoggingPreferences};
use std::sync::{Arc, Mutex};

/// Simple logger trait
pub trait Logger: Send + Sync {
    fn log(&self, event: &LogEvent);
}

/// Main logging service with level filtering
pub struct LoggingService {
    logger: Arc<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(logger: Arc<dyn Logger>, min_level: LogLevel) -> Self {
        Self { logger, min_level }
    }

    /// Create service for the configured backend
    pub fn from_preferences(preferences: &LoggingPreferences) -> Self {
        let logger: Arc<dyn Logger> = match preferences.backend {
            LogBackend::Facade => Arc::new(FacadeLogger),
            LogBackend::Console => Arc::new(ConsoleLogger),
            LogBackend::Structured => Arc::new(StructuredLogger),
        };

        Self::new(logger, preferences.min_log_level)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if self.should_log(event.level) {
            self.logger.log(&event);
        }
    }

    pub fn log_error(&self, error_code: Code, message: &str) {
        self.log_event(LogEvent::error(error_code, message));
    }

    pub fn log_info(&self, message: &str) {
        self.log_event(LogEvent::info(message));
    }
}

/// Plain text logger; errors go to stderr
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, event: &LogEvent) {
        match event.level {
            LogLevel::Error => eprintln!("{}", event.format()),
            _ => println!("{}", event.format()),
        }
    }
}

/// Structured logger for JSON output and better tooling integration
pub struct StructuredLogger;

impl Logger for StructuredLogger {
    fn log(&self, event: &LogEvent) {
        let line = event.format_json().unwrap_or_else(|_| event.format());
        match event.level {
            LogLevel::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

/// Forwards events to the `log` facade so the host picks the sink
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn log(&self, event: &LogEvent) {
        log::log!(
            target: event.category(),
            event.level.to_facade_level(),
            "{}",
            event.format()
        );
    }
}

/// Memory logger for testing
#[derive(Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<LogEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn has_event_with_code(&self, code: Code) -> bool {
        self.get_events().iter().any(|e| e.code == code)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, event: &LogEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
