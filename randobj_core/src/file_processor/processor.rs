//! File reading with path validation and coded error logging

use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

/// File processor specific errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },
}

impl FileProcessorError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::PermissionDenied { .. } => {
                codes::file_processing::PERMISSION_DENIED
            }
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::IoError { .. } => codes::file_processing::IO_ERROR,
            FileProcessorError::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
        }
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    fn from_io(path: &Path, error: &std::io::Error) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            std::io::ErrorKind::NotFound => FileProcessorError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => FileProcessorError::InvalidEncoding { path },
            _ => FileProcessorError::IoError {
                message: format!("Failed to read '{}': {}", path, error),
            },
        }
    }
}

/// File metadata collected during processing
#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Path as given by the caller
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileMetadata {
    /// Get file size in human-readable format
    pub fn human_readable_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// File contents together with metadata and read time
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    /// File contents as UTF-8 string
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl FileProcessingResult {
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Bytes read per millisecond
    pub fn processing_rate(&self) -> f64 {
        let duration_ms = self.processing_duration.as_secs_f64() * 1000.0;
        if duration_ms > 0.0 {
            self.source.len() as f64 / duration_ms
        } else {
            0.0
        }
    }
}

/// Whole-file UTF-8 reader
pub struct FileProcessor {
    /// Whether to attach throughput figures to the success event
    pub enable_performance_logging: bool,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            enable_performance_logging: true,
        }
    }

    pub fn with_performance_logging(mut self, enabled: bool) -> Self {
        self.enable_performance_logging = enabled;
        self
    }

    /// Read a file and return contents with metadata. Empty files are valid.
    pub fn process_file(&self, path: &Path) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = Instant::now();

        log_debug!("Starting file processing", "file" => path.display());

        self.validate_path(path)?;
        let metadata = self.get_metadata(path)?;
        let source = self.read_file(path)?;

        let result = FileProcessingResult {
            source,
            metadata,
            processing_duration: start_time.elapsed(),
        };

        self.log_processing_success(&result);
        Ok(result)
    }

    fn log_processing_success(&self, result: &FileProcessingResult) {
        let duration_ms = format!("{:.2}", result.processing_duration.as_secs_f64() * 1000.0);

        if self.enable_performance_logging {
            log_success!(
                codes::success::FILE_PROCESSING_SUCCESS,
                "File read successfully with performance metrics",
                "file" => result.metadata.path.display(),
                "size_bytes" => result.metadata.size,
                "size_human" => result.metadata.human_readable_size(),
                "duration_ms" => duration_ms,
                "bytes_per_ms" => format!("{:.2}", result.processing_rate())
            );
        } else {
            log_success!(
                codes::success::FILE_PROCESSING_SUCCESS,
                "File read successfully",
                "file" => result.metadata.path.display(),
                "size_bytes" => result.metadata.size,
                "duration_ms" => duration_ms
            );
        }
    }

    /// Reject empty paths, missing files and non-files without reading anything
    pub fn validate_path(&self, path: &Path) -> Result<(), FileProcessorError> {
        if path.as_os_str().is_empty() {
            let error = FileProcessorError::InvalidPath {
                path: String::new(),
            };
            log_error!(error.error_code(), "Empty file path provided");
            return Err(error);
        }

        if !path.exists() {
            let error = FileProcessorError::FileNotFound {
                path: path.display().to_string(),
            };
            log_error!(error.error_code(), "File not found", "path" => path.display());
            return Err(error);
        }

        if !path.is_file() {
            let error = FileProcessorError::InvalidPath {
                path: path.display().to_string(),
            };
            log_error!(error.error_code(), "Path is not a file", "path" => path.display());
            return Err(error);
        }

        Ok(())
    }

    fn get_metadata(&self, path: &Path) -> Result<FileMetadata, FileProcessorError> {
        let metadata = fs::metadata(path).map_err(|e| {
            let error = FileProcessorError::from_io(path, &e);
            log_error!(error.error_code(), "Failed to read file metadata",
                "path" => path.display(),
                "io_error" => e);
            error
        })?;

        let file_metadata = FileMetadata {
            path: path.to_path_buf(),
            size: metadata.len(),
            modified: metadata.modified().ok(),
        };

        log_debug!("File metadata collected",
            "size_bytes" => file_metadata.size,
            "size_human" => file_metadata.human_readable_size());

        Ok(file_metadata)
    }

    fn read_file(&self, path: &Path) -> Result<String, FileProcessorError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                log_debug!("File content read successfully",
                    "file" => path.display(),
                    "bytes" => content.len());
                Ok(content)
            }
            Err(e) => {
                let error = FileProcessorError::from_io(path, &e);
                log_error!(error.error_code(), "Failed to read file",
                    "file" => path.display(),
                    "io_error" => e);
                Err(error)
            }
        }
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("objects.txt");
        let content = "abc,-12,  x9 ";
        fs::write(&file_path, content).unwrap();

        let result = FileProcessor::new().process_file(&file_path).unwrap();

        assert_eq!(result.source, content);
        assert_eq!(result.metadata.size, content.len() as u64);
        assert_eq!(result.metadata.path, file_path);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let result = FileProcessor::new().process_file(&file_path).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.metadata.size, 0);
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempdir().unwrap();
        let result = FileProcessor::new().process_file(&dir.path().join("missing.txt"));

        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempdir().unwrap();
        let result = FileProcessor::new().process_file(dir.path());

        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_validate_path_reads_nothing() {
        let dir = tempdir().unwrap();
        let processor = FileProcessor::new();

        assert_matches!(
            processor.validate_path(&dir.path().join("missing.txt")),
            Err(FileProcessorError::FileNotFound { .. })
        );

        let present = dir.path().join("present.txt");
        fs::write(&present, "a").unwrap();
        assert!(processor.validate_path(&present).is_ok());
    }

    #[test]
    fn test_empty_path() {
        let result = FileProcessor::new().process_file(Path::new(""));
        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.txt");
        fs::write(&file_path, [0x61, 0xff, 0xfe, 0x2c]).unwrap();

        let result = FileProcessor::new()
            .with_performance_logging(false)
            .process_file(&file_path);
        assert_matches!(result, Err(FileProcessorError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_error_codes() {
        let error = FileProcessorError::FileNotFound {
            path: "x".to_string(),
        };
        assert_eq!(error.error_code(), codes::file_processing::FILE_NOT_FOUND);
        assert_eq!(error.category(), "FileProcessing");
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_human_readable_size() {
        let metadata = FileMetadata {
            path: PathBuf::from("a"),
            size: 10 * 1024 * 1024,
            modified: None,
        };
        assert_eq!(metadata.human_readable_size(), "10.00 MB");
    }
}
