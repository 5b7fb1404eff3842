//! Error and success codes with their classification metadata
//!
//! Single source of truth for every code a log event can carry.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const CONFIGURATION_ERROR: Code = Code::new("ERR003");
}

/// Input file error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

/// Generation error codes
pub mod generation {
    use super::Code;

    pub const INVALID_TARGET_SIZE: Code = Code::new("E100");
    pub const OUTPUT_CREATE_FAILED: Code = Code::new("E101");
    pub const OUTPUT_WRITE_FAILED: Code = Code::new("E102");
}

/// Classification warning codes
pub mod classification {
    use super::Code;

    pub const UNKNOWN_OBJECT: Code = Code::new("W200");
}

/// Result persistence error codes
pub mod output {
    use super::Code;

    pub const RESULTS_WRITE_FAILED: Code = Code::new("E300");
    pub const SUMMARY_WRITE_FAILED: Code = Code::new("E301");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const GENERATION_COMPLETE: Code = Code::new("I010");
    pub const CLASSIFICATION_COMPLETE: Code = Code::new("I020");
    pub const RESULTS_SAVED: Code = Code::new("I030");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal error",
                "File a bug report with the failing input",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "System initialization failure",
                "Check logging configuration",
            ),
            ErrorMetadata::new(
                "ERR003",
                "System",
                Severity::High,
                false,
                "Configuration could not be loaded",
                "Fix or remove the file named by RANDOBJ_CONFIG",
            ),
            ErrorMetadata::new(
                "E005",
                "FileProcessing",
                Severity::Medium,
                false,
                "Input file not found at specified path",
                "Check file path and ensure file exists",
            ),
            ErrorMetadata::new(
                "E009",
                "FileProcessing",
                Severity::Medium,
                false,
                "Permission denied accessing file",
                "Check file permissions and user access rights",
            ),
            ErrorMetadata::new(
                "E010",
                "FileProcessing",
                Severity::Medium,
                false,
                "Input is not valid UTF-8",
                "Regenerate the input or convert it to UTF-8",
            ),
            ErrorMetadata::new(
                "E011",
                "FileProcessing",
                Severity::High,
                false,
                "I/O error while reading input",
                "Check disk health and retry",
            ),
            ErrorMetadata::new(
                "E012",
                "FileProcessing",
                Severity::Medium,
                false,
                "Path is empty or not a regular file",
                "Pass the path of a regular file",
            ),
            ErrorMetadata::new(
                "E100",
                "Generation",
                Severity::Medium,
                false,
                "Target size is negative or not a number",
                "Pass a non-negative size in MB",
            ),
            ErrorMetadata::new(
                "E101",
                "Generation",
                Severity::High,
                false,
                "Output file could not be created",
                "Check the output directory exists and is writable",
            ),
            ErrorMetadata::new(
                "E102",
                "Generation",
                Severity::High,
                false,
                "Writing generated objects failed",
                "Check free disk space",
            ),
            ErrorMetadata::new(
                "W200",
                "Classification",
                Severity::Low,
                true,
                "Object matched no known type",
                "Inspect the input for malformed objects",
            ),
            ErrorMetadata::new(
                "E300",
                "Output",
                Severity::Medium,
                true,
                "Classification results could not be saved",
                "Check the output path is writable",
            ),
            ErrorMetadata::new(
                "E301",
                "Output",
                Severity::Low,
                true,
                "Summary could not be saved",
                "Check RANDOBJ_SUMMARY_JSON points to a writable path",
            ),
        ];

        entries.into_iter().map(|meta| (meta.code, meta)).collect()
    })
}

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|meta| meta.severity)
        .unwrap_or(Severity::Low)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|meta| meta.recoverable)
        .unwrap_or(true)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|meta| meta.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|meta| meta.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|meta| meta.category)
        .unwrap_or("General")
}
