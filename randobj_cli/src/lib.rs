//! # randobj CLI support
//!
//! Console observers that render generator and processor progress, plus the
//! logging bootstrap shared by both binaries.

use randobj_core::config::RuntimeConfig;
use randobj_core::logging::{self, codes};
use randobj_core::pipeline::{ClassificationReport, PipelineError};
use randobj_core::progress::{
    ClassificationObserver, ClassificationProgress, GenerationObserver, GenerationProgress,
};
use randobj_core::tokens::ClassificationRecord;
use std::fmt;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::Duration;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Facade filter when `RUST_LOG` is unset; coded events only reach the
/// console when asked for
pub const DEFAULT_LOG_FILTER: &str = "off";

fn logger_builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
}

/// Initialize `env_logger`, load the runtime configuration and install the
/// global logging service
pub fn init_logging() -> Result<RuntimeConfig, Box<dyn std::error::Error>> {
    logger_builder().init();

    let config = RuntimeConfig::load().map_err(|e| {
        logging::safe_log_error(codes::system::CONFIGURATION_ERROR, &e.to_string());
        e
    })?;

    logging::init_global_logging(&config.logging).map_err(|e| {
        logging::safe_log_error(codes::system::INITIALIZATION_FAILURE, &e);
        e
    })?;

    log::debug!("runtime configuration loaded: {:?}", config);
    Ok(config)
}

/// Console sink that stops writing after the first failure and keeps it
struct ConsoleWriter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleWriter<W> {
    fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn write(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.writer.write_fmt(args).and_then(|_| self.writer.flush()) {
            self.error = Some(e);
        }
    }
}

/// Renders generator progress as a single carriage-return line
pub struct ConsoleGenerationReporter<W: Write = Stdout> {
    out: ConsoleWriter<W>,
}

impl ConsoleGenerationReporter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleGenerationReporter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleGenerationReporter<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            out: ConsoleWriter::new(writer),
        }
    }

    /// First console write failure, if any; later output was dropped
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.out.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out.writer
    }
}

impl<W: Write> GenerationObserver for ConsoleGenerationReporter<W> {
    fn on_progress(&mut self, progress: &GenerationProgress) {
        self.out.write(format_args!(
            "\rGenerating... {}% complete ({:.2} MB) - {} objects - {:.1}s elapsed",
            progress.percent(),
            progress.bytes_generated as f64 / BYTES_PER_MB,
            progress.objects_generated,
            progress.elapsed.as_secs_f64()
        ));
    }
}

/// Renders processor output: per-record lines, progress, timing and the
/// category summary
pub struct ConsoleClassificationReporter<W: Write = Stdout> {
    out: ConsoleWriter<W>,
}

impl ConsoleClassificationReporter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleClassificationReporter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleClassificationReporter<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            out: ConsoleWriter::new(writer),
        }
    }

    /// First console write failure, if any; later output was dropped
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.out.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out.writer
    }

    /// Print the user-facing message for a failed run
    pub fn report_failure(&mut self, input: &Path, error: &PipelineError) {
        if error.is_missing_input() {
            self.out.write(format_args!(
                "Error: Input file {} not found.\n",
                input.display()
            ));
        } else {
            self.out.write(format_args!("Error processing file: {}\n", error));
        }
    }
}

impl<W: Write> ClassificationObserver for ConsoleClassificationReporter<W> {
    fn on_read_started(&mut self, path: &Path) {
        self.out.write(format_args!("Reading file {}...\n", path.display()));
    }

    fn on_read_finished(&mut self, _bytes: u64, elapsed: Duration) {
        self.out.write(format_args!("File read in {:.2} seconds.\n", elapsed.as_secs_f64()));
    }

    fn on_classification_started(&mut self, total_segments: usize) {
        self.out.write(format_args!("Processing {} objects...\n", total_segments));
    }

    fn on_record(&mut self, record: &ClassificationRecord) {
        self.out.write(format_args!("{}\n", record));
    }

    fn on_progress(&mut self, progress: &ClassificationProgress) {
        self.out.write(format_args!(
            "\rProgress: {}% ({}/{}) - {:.1}s elapsed",
            progress.percent(),
            progress.processed_segments,
            progress.total_segments,
            progress.elapsed.as_secs_f64()
        ));
    }

    fn on_classification_finished(&mut self, report: &ClassificationReport) {
        self.out.write(format_args!(
            "\nProcessing complete!\nProcessing time: {:.2} seconds\nTotal execution time: {:.2} seconds\n\nObject Type Summary:\n",
            report.process_duration.as_secs_f64(),
            report.total_duration.as_secs_f64()
        ));

        for (category, count) in report.counts.iter() {
            self.out.write(format_args!(
                "  {}: {} ({:.1}%)\n",
                category.label(),
                count,
                report.percentage(category)
            ));
        }
    }

    fn on_save_started(&mut self, path: &Path) {
        self.out.write(format_args!("Saving results to {}...\n", path.display()));
    }

    fn on_save_finished(&mut self, _path: &Path) {
        self.out.write(format_args!("Results saved successfully.\n"));
    }
}
