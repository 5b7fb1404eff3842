//! Global logging module for randobj
//!
//! Provides a write-once global logging service with coded events and a
//! clean macro interface. Every entry point is a no-op until
//! [`init_global_logging`] has run, so library code can log unconditionally.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, FacadeLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize global logging system from preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let logging_service = Arc::new(LoggingService::from_preferences(preferences));

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized".to_string())?;

    logging_service.log_event(
        LogEvent::success(
            codes::success::SYSTEM_INITIALIZATION_COMPLETED,
            "Global logging system initialized",
        )
        .with_context("backend", preferences.backend.as_str()),
    );

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether an event at `level` would reach the logger
pub fn is_enabled(level: LogLevel) -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(level))
        .unwrap_or(false)
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(attach_context(LogEvent::error(code, message), context));
    }
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(attach_context(LogEvent::success(code, message), context));
    }
}

/// Log uncoded warning (used by log_warning! macro)
pub fn log_warning_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(attach_context(LogEvent::warning(message), context));
    }
}

/// Log uncoded info (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(attach_context(LogEvent::info(message), context));
    }
}

/// Log debug event (used by log_debug! macro)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(attach_context(LogEvent::debug(message), context));
    }
}

fn attach_context(mut event: LogEvent, context: Vec<(&str, &str)>) -> LogEvent {
    for (key, value) in context {
        event = event.with_context(key, value);
    }
    event
}

/// Safe error logging (falls back to stderr if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_error(code, message);
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_logging_is_silent() {
        if is_initialized() {
            return;
        }

        assert!(!is_enabled(LogLevel::Error));
        log_info_with_context("dropped", vec![("key", "value")]);
        log_debug_with_context("dropped", vec![]);
        log_error_with_context(codes::system::INTERNAL_ERROR, "dropped", vec![]);
    }

    #[test]
    fn test_safe_logging() {
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
    }

    #[test]
    fn test_attach_context() {
        let event = attach_context(LogEvent::info("x"), vec![("a", "1"), ("b", "2")]);
        assert_eq!(event.context.len(), 2);
        assert_eq!(event.context.get("b").map(String::as_str), Some("2"));
    }
}
