use crate::file_processor::FileProcessorError;
use crate::logging::{codes, Code};

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Failed to save results to {path}: {message}")]
    OutputWrite { path: String, message: String },

    #[error("Failed to save summary to {path}: {message}")]
    SummaryWrite { path: String, message: String },
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            PipelineError::FileProcessing(e) => e.error_code(),
            PipelineError::OutputWrite { .. } => codes::output::RESULTS_WRITE_FAILED,
            PipelineError::SummaryWrite { .. } => codes::output::SUMMARY_WRITE_FAILED,
        }
    }

    /// Whether the input file did not exist
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            PipelineError::FileProcessing(FileProcessorError::FileNotFound { .. })
        )
    }
}
