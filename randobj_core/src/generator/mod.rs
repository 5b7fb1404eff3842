//! Random object generator
//!
//! Produces comma-separated objects of four shapes until a byte target is
//! reached, flushing to the writer in bounded chunks.

pub mod token_generator;

use crate::config::runtime::GeneratorPreferences;
use crate::progress::GenerationObserver;
use std::path::Path;

pub use token_generator::{
    target_bytes, GenerationReport, GenerationStats, GeneratorError, TokenGenerator,
};

/// Generate a file using runtime preferences (seed, flush threshold, progress cadence)
pub fn generate_file(
    path: &Path,
    size_mb: f64,
    preferences: &GeneratorPreferences,
    observer: &mut dyn GenerationObserver,
) -> Result<GenerationReport, GeneratorError> {
    TokenGenerator::from_preferences(preferences).generate_file(path, size_mb, observer)
}
