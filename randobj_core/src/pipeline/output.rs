//! Persistence of record lines and the JSON summary

use super::error::PipelineError;
use super::result::{ClassificationReport, SummaryDocument};
use crate::config::constants::compile_time::format::RECORD_SEPARATOR;
use crate::log_error;
use crate::tokens::ClassificationRecord;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one `Object: <value>, Type: <label>` line per record, without a
/// trailing newline
pub fn write_records(path: &Path, records: &[ClassificationRecord]) -> Result<(), PipelineError> {
    let to_error = |e: std::io::Error| {
        let error = PipelineError::OutputWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        log_error!(error.error_code(), "Failed to save results",
            "path" => path.display(),
            "io_error" => e);
        error
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            writer
                .write_all(RECORD_SEPARATOR.as_bytes())
                .map_err(to_error)?;
        }
        write!(writer, "{}", record).map_err(to_error)?;
    }

    writer.flush().map_err(to_error)
}

/// Write the report as pretty JSON
pub fn write_summary(path: &Path, report: &ClassificationReport) -> Result<(), PipelineError> {
    let to_error = |message: String| {
        let error = PipelineError::SummaryWrite {
            path: path.display().to_string(),
            message,
        };
        log_error!(error.error_code(), "Failed to save summary", "path" => path.display());
        error
    };

    let json = serde_json::to_string_pretty(&SummaryDocument::new(report))
        .map_err(|e| to_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| to_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Category;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_records_have_no_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let records = vec![
            ClassificationRecord::new("-5", Category::Integer),
            ClassificationRecord::new(" a1 ", Category::Alphanumeric),
        ];

        write_records(&path, &records).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Object: -5, Type: Integer\nObject: a1, Type: Alphanumeric"
        );
    }

    #[test]
    fn test_no_records_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");

        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("results.txt");

        let result = write_records(&path, &[]);
        assert_matches!(result, Err(PipelineError::OutputWrite { .. }));
    }
}
