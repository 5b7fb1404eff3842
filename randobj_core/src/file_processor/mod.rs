//! Input file reading with global logging integration

mod processor;

use std::path::Path;

pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

/// Read a file with default settings
pub fn process_file(path: &Path) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(path)
}
