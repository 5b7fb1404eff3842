//! Event system for randobj logging

use super::codes::{self, Code};
use crate::config::compile_time::logging::MAX_LOG_MESSAGE_LENGTH;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Matching level of the `log` facade
    pub fn to_facade_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
        }
    }
}

/// Core log event structure
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub code: Code,
    pub message: String,
    pub context: BTreeMap<String, String>,
}

impl LogEvent {
    fn with_level(level: LogLevel, code: Code, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            code,
            message: truncate_message(message),
            context: BTreeMap::new(),
        }
    }

    /// Create a new error event
    pub fn error(error_code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Error, error_code, message)
    }

    /// Create a new warning event (warnings may not have codes)
    pub fn warning(message: &str) -> Self {
        Self::with_level(LogLevel::Warning, Code::new("W000"), message)
    }

    pub fn warning_with_code(warning_code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Warning, warning_code, message)
    }

    pub fn info(message: &str) -> Self {
        Self::with_level(LogLevel::Info, Code::new("I000"), message)
    }

    /// Create a success event (info with success code)
    pub fn success(success_code: Code, message: &str) -> Self {
        Self::with_level(LogLevel::Info, success_code, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::with_level(LogLevel::Debug, Code::new("D000"), message)
    }

    /// Add context data
    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context
            .insert(key.to_string(), truncate_message(value));
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }

    pub fn is_warning(&self) -> bool {
        self.level == LogLevel::Warning
    }

    pub fn is_info(&self) -> bool {
        self.level == LogLevel::Info
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.code.as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.code.as_str())
    }

    pub fn description(&self) -> &'static str {
        codes::get_description(self.code.as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.code.as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.code.as_str())
    }

    /// Format for display
    pub fn format(&self) -> String {
        let mut output = format!(
            "[{}] {} - {}",
            self.level.as_str(),
            self.code.as_str(),
            self.message
        );

        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            output.push_str(&format!(" ({})", pairs.join(", ")));
        }

        output
    }

    /// Format as JSON for structured logging
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::json!({
            "timestamp": self.timestamp.to_rfc3339(),
            "level": self.level.as_str(),
            "code": self.code.as_str(),
            "message": self.message,
            "category": self.category(),
            "severity": self.severity(),
        });

        if self.is_error() {
            json["error_metadata"] = serde_json::json!({
                "recoverable": self.is_recoverable(),
                "description": self.description(),
                "recommended_action": self.recommended_action(),
            });
        }

        if !self.context.is_empty() {
            json["context"] = serde_json::to_value(&self.context)?;
        }

        serde_json::to_string(&json)
    }
}

fn truncate_message(message: &str) -> String {
    if message.len() <= MAX_LOG_MESSAGE_LENGTH {
        return message.to_string();
    }

    let mut end = MAX_LOG_MESSAGE_LENGTH;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &message[..end])
}
