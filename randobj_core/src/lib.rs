// Internal modules
#[macro_use]
pub mod logging;
pub mod config;
pub mod file_processor;
pub mod generator;
pub mod lexical;
pub mod pipeline;
pub mod progress;
pub mod tokens;

// Re-export key types for library consumers
pub use config::{ConfigError, RuntimeConfig};
pub use generator::{GenerationReport, GeneratorError, TokenGenerator};
pub use lexical::{ClassificationOutcome, Classifier};
pub use pipeline::{ClassificationReport, PipelineError};
pub use progress::{ClassificationObserver, GenerationObserver, NoopObserver};
pub use tokens::{Category, CategoryCounts, ClassificationRecord, Variant};
