// RUNTIME PREFERENCES (User Experience)

use super::constants::compile_time::{classification, generation};
use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Invalid configuration in {path}: {message}")]
    Invalid { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorPreferences {
    /// Fixed RNG seed for reproducible output (entropy-seeded when absent)
    pub seed: Option<u64>,

    /// Buffered bytes before a chunk is written out
    pub flush_threshold_bytes: usize,

    /// Objects between progress reports (0 disables reporting)
    pub progress_interval: u64,
}

impl Default for GeneratorPreferences {
    fn default() -> Self {
        Self {
            seed: env::var(env_vars::SEED).ok().and_then(|v| v.parse().ok()),
            flush_threshold_bytes: env::var(env_vars::FLUSH_THRESHOLD_BYTES)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(generation::FLUSH_THRESHOLD_BYTES),
            progress_interval: env::var(env_vars::GENERATOR_PROGRESS_INTERVAL)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(generation::PROGRESS_INTERVAL_OBJECTS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierPreferences {
    /// Segments between progress reports (0 disables reporting)
    pub progress_interval: usize,

    /// Whether each record is echoed to the observer
    pub echo_records: bool,

    /// Where to write a JSON summary of the run, if anywhere
    pub summary_path: Option<String>,
}

impl Default for ClassifierPreferences {
    fn default() -> Self {
        Self {
            progress_interval: env::var(env_vars::CLASSIFIER_PROGRESS_INTERVAL)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(classification::PROGRESS_INTERVAL_TOKENS),
            echo_records: env::var(env_vars::ECHO_RECORDS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            summary_path: env::var(env_vars::SUMMARY_JSON)
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

/// Where log events end up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogBackend {
    /// Forward to the `log` facade (env_logger in the binaries)
    Facade,
    /// Plain text lines on stdout/stderr
    Console,
    /// One JSON object per event
    Structured,
}

impl LogBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogBackend::Facade => "facade",
            LogBackend::Console => "console",
            LogBackend::Structured => "structured",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    pub backend: LogBackend,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            backend: env::var(env_vars::LOG_BACKEND)
                .ok()
                .and_then(|v| parse_log_backend(&v))
                .unwrap_or(LogBackend::Facade),
            min_log_level: env::var(env_vars::LOG_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

/// Parse log level from string (used for environment variables)
pub(crate) fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

fn parse_log_backend(backend: &str) -> Option<LogBackend> {
    match backend.to_lowercase().as_str() {
        "facade" | "log" => Some(LogBackend::Facade),
        "console" => Some(LogBackend::Console),
        "structured" | "json" => Some(LogBackend::Structured),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub generator: GeneratorPreferences,
    pub classifier: ClassifierPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Environment defaults, overlaid with the TOML file named by `RANDOBJ_CONFIG`
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(env_vars::CONFIG_FILE) {
            Ok(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Invalid { message, .. } => ConfigError::Invalid {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Missing tables and keys fall back to the environment defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Invalid {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const CONFIG_FILE: &str = "RANDOBJ_CONFIG";

    // Generator
    pub const SEED: &str = "RANDOBJ_SEED";
    pub const FLUSH_THRESHOLD_BYTES: &str = "RANDOBJ_FLUSH_THRESHOLD_BYTES";
    pub const GENERATOR_PROGRESS_INTERVAL: &str = "RANDOBJ_GENERATOR_PROGRESS_INTERVAL";

    // Classifier
    pub const CLASSIFIER_PROGRESS_INTERVAL: &str = "RANDOBJ_CLASSIFIER_PROGRESS_INTERVAL";
    pub const ECHO_RECORDS: &str = "RANDOBJ_ECHO_RECORDS";
    pub const SUMMARY_JSON: &str = "RANDOBJ_SUMMARY_JSON";

    // Logging
    pub const LOG_BACKEND: &str = "RANDOBJ_LOG_BACKEND";
    pub const LOG_LEVEL: &str = "RANDOBJ_LOG_LEVEL";
}
