//! Random object generation and size-targeted file writing

use crate::config::constants::compile_time::defaults::BYTES_PER_MB;
use crate::config::constants::compile_time::format::SEPARATOR;
use crate::config::constants::compile_time::generation::{
    INTEGER_BOUND, MAX_PADDING, MAX_STRING_LENGTH, MIN_STRING_LENGTH, REAL_BOUND,
    REAL_DECIMAL_PLACES,
};
use crate::config::runtime::GeneratorPreferences;
use crate::logging::codes;
use crate::progress::{GenerationObserver, GenerationProgress};
use crate::tokens::Variant;
use crate::{log_debug, log_error, log_success};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generator specific errors
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Invalid target size: {size_mb} MB")]
    InvalidTargetSize { size_mb: f64 },

    #[error("Failed to create output file {path}: {source}")]
    OutputCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write generated objects: {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            GeneratorError::InvalidTargetSize { .. } => codes::generation::INVALID_TARGET_SIZE,
            GeneratorError::OutputCreate { .. } => codes::generation::OUTPUT_CREATE_FAILED,
            GeneratorError::OutputWrite { .. } => codes::generation::OUTPUT_WRITE_FAILED,
        }
    }
}

/// Convert a size in MiB to bytes; negative or non-finite sizes are rejected
pub fn target_bytes(size_mb: f64) -> Result<u64, GeneratorError> {
    if !size_mb.is_finite() || size_mb < 0.0 {
        let error = GeneratorError::InvalidTargetSize { size_mb };
        log_error!(error.error_code(), "Target size must be a non-negative number",
            "size_mb" => size_mb);
        return Err(error);
    }
    Ok((size_mb * BYTES_PER_MB as f64) as u64)
}

/// Counters from a single `write_tokens` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub objects_generated: u64,
    /// Bytes written, separators included
    pub bytes_generated: u64,
    pub chunks_flushed: u64,
    /// Objects per variant, in `Variant::ALL` order
    pub variant_counts: [u64; 4],
}

/// Result of `generate_file`
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub target_bytes: u64,
    /// Size on disk after the file was closed
    pub file_size_bytes: u64,
    pub stats: GenerationStats,
    pub duration: Duration,
}

impl GenerationReport {
    pub fn file_size_mb(&self) -> f64 {
        self.file_size_bytes as f64 / BYTES_PER_MB as f64
    }
}

pub struct TokenGenerator<R: Rng = StdRng> {
    rng: R,
    flush_threshold_bytes: usize,
    progress_interval: u64,
}

impl TokenGenerator<StdRng> {
    /// Seeded from preferences, or from OS entropy when no seed is set
    pub fn from_preferences(preferences: &GeneratorPreferences) -> Self {
        let rng = match preferences.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        TokenGenerator::new(rng)
            .with_flush_threshold(preferences.flush_threshold_bytes)
            .with_progress_interval(preferences.progress_interval)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_preferences(&GeneratorPreferences {
            seed: Some(seed),
            ..GeneratorPreferences::default()
        })
    }
}

impl<R: Rng> TokenGenerator<R> {
    pub fn new(rng: R) -> Self {
        let defaults = GeneratorPreferences::default();
        Self {
            rng,
            flush_threshold_bytes: defaults.flush_threshold_bytes,
            progress_interval: defaults.progress_interval,
        }
    }

    pub fn with_flush_threshold(mut self, bytes: usize) -> Self {
        self.flush_threshold_bytes = bytes.max(1);
        self
    }

    /// 0 disables progress reports
    pub fn with_progress_interval(mut self, objects: u64) -> Self {
        self.progress_interval = objects;
        self
    }

    pub fn generate_token(&mut self, variant: Variant) -> String {
        match variant {
            Variant::Alphabetical => self.alphabetical(),
            Variant::RealNumber => self.real_number(),
            Variant::Integer => self.integer(),
            Variant::AlphanumericWithSpaces => self.alphanumeric_with_spaces(),
        }
    }

    /// Draw a variant uniformly, then an object of that variant
    pub fn next_token(&mut self) -> (Variant, String) {
        let variant = Variant::ALL[self.rng.gen_range(0..Variant::ALL.len())];
        (variant, self.generate_token(variant))
    }

    fn random_chars(&mut self, alphabet: &[u8]) -> String {
        let length = self.rng.gen_range(MIN_STRING_LENGTH..=MAX_STRING_LENGTH);
        (0..length)
            .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }

    fn alphabetical(&mut self) -> String {
        self.random_chars(LETTERS)
    }

    fn real_number(&mut self) -> String {
        let value: f64 = self.rng.gen_range(-REAL_BOUND..=REAL_BOUND);
        format!("{:.*}", REAL_DECIMAL_PLACES, value)
    }

    fn integer(&mut self) -> String {
        self.rng
            .gen_range(-INTEGER_BOUND..=INTEGER_BOUND)
            .to_string()
    }

    fn alphanumeric_with_spaces(&mut self) -> String {
        let core = self.random_chars(ALPHANUMERIC);
        let before = self.rng.gen_range(0..=MAX_PADDING);
        let after = self.rng.gen_range(0..=MAX_PADDING);
        format!("{}{}{}", " ".repeat(before), core, " ".repeat(after))
    }

    /// Append separator-joined objects to `writer` until at least
    /// `target_bytes` have been produced. The last object is never truncated.
    pub fn write_tokens<W: Write>(
        &mut self,
        mut writer: W,
        target_bytes: u64,
        observer: &mut dyn GenerationObserver,
    ) -> Result<GenerationStats, GeneratorError> {
        let start = Instant::now();
        let mut stats = GenerationStats::default();
        let mut buffer = String::with_capacity(self.flush_threshold_bytes.min(1024 * 1024));

        let mut flush = |buffer: &mut String, stats: &mut GenerationStats| {
            writer.write_all(buffer.as_bytes()).map_err(|source| {
                let error = GeneratorError::OutputWrite { source };
                log_error!(error.error_code(), "Failed to write generated chunk",
                    "chunk_bytes" => buffer.len());
                error
            })?;
            stats.chunks_flushed += 1;
            log_debug!("Chunk flushed", "bytes" => buffer.len());
            buffer.clear();
            Ok::<(), GeneratorError>(())
        };

        while stats.bytes_generated < target_bytes {
            let (variant, token) = self.next_token();

            if stats.objects_generated > 0 {
                buffer.push(SEPARATOR);
                stats.bytes_generated += SEPARATOR.len_utf8() as u64;
            }
            buffer.push_str(&token);
            stats.bytes_generated += token.len() as u64;
            stats.objects_generated += 1;
            if let Some(index) = Variant::ALL.iter().position(|v| *v == variant) {
                stats.variant_counts[index] += 1;
            }

            if buffer.len() >= self.flush_threshold_bytes {
                flush(&mut buffer, &mut stats)?;
            }

            if self.progress_interval > 0 && stats.objects_generated % self.progress_interval == 0
            {
                observer.on_progress(&GenerationProgress {
                    objects_generated: stats.objects_generated,
                    bytes_generated: stats.bytes_generated,
                    target_bytes,
                    elapsed: start.elapsed(),
                });
            }
        }

        if !buffer.is_empty() {
            flush(&mut buffer, &mut stats)?;
        }
        drop(flush);

        writer.flush().map_err(|source| {
            let error = GeneratorError::OutputWrite { source };
            log_error!(error.error_code(), "Failed to flush generated objects");
            error
        })?;

        Ok(stats)
    }

    /// Create `path`, fill it to at least `size_mb` MiB, and report the real
    /// size on disk
    pub fn generate_file(
        &mut self,
        path: &Path,
        size_mb: f64,
        observer: &mut dyn GenerationObserver,
    ) -> Result<GenerationReport, GeneratorError> {
        let start = Instant::now();
        let target = target_bytes(size_mb)?;

        log_debug!("Starting generation",
            "path" => path.display(),
            "target_bytes" => target);

        let file = File::create(path).map_err(|source| {
            let error = GeneratorError::OutputCreate {
                path: path.display().to_string(),
                source,
            };
            log_error!(error.error_code(), "Failed to create output file",
                "path" => path.display());
            error
        })?;

        let stats = self.write_tokens(file, target, observer)?;

        let file_size_bytes = fs::metadata(path)
            .map(|m| m.len())
            .map_err(|source| GeneratorError::OutputWrite { source })?;

        let report = GenerationReport {
            path: path.to_path_buf(),
            target_bytes: target,
            file_size_bytes,
            stats,
            duration: start.elapsed(),
        };

        log_success!(codes::success::GENERATION_COMPLETE, "Generation complete",
            "path" => path.display(),
            "objects" => report.stats.objects_generated,
            "size_bytes" => report.file_size_bytes,
            "chunks" => report.stats.chunks_flushed,
            "duration_ms" => format!("{:.2}", report.duration.as_secs_f64() * 1000.0)
        );

        Ok(report)
    }
}
