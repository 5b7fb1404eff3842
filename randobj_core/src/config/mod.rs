//! Configuration module for randobj
//!
//! Fixed limits live in `constants::compile_time`; user preferences are read
//! from the environment and an optional TOML file at runtime.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    ClassifierPreferences, ConfigError, GeneratorPreferences, LogBackend, LoggingPreferences,
    RuntimeConfig,
};
