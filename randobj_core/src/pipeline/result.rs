use crate::tokens::{Category, CategoryCounts};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

fn as_seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Outcome of one processor run
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub file_size_bytes: u64,
    /// Segments after splitting, empty ones included
    pub total_segments: usize,
    pub skipped_segments: usize,
    pub retained_tokens: usize,
    pub counts: CategoryCounts,
    #[serde(rename = "read_seconds", serialize_with = "as_seconds")]
    pub read_duration: Duration,
    #[serde(rename = "processing_seconds", serialize_with = "as_seconds")]
    pub process_duration: Duration,
    #[serde(rename = "total_seconds", serialize_with = "as_seconds")]
    pub total_duration: Duration,
    pub completed_at: DateTime<Utc>,
}

impl ClassificationReport {
    pub fn percentage(&self, category: Category) -> f64 {
        self.counts.percentage(category)
    }

    /// Label to percentage, for the JSON summary
    pub fn percentages(&self) -> BTreeMap<&'static str, f64> {
        self.counts
            .iter()
            .map(|(category, _)| (category.label(), self.percentage(category)))
            .collect()
    }

    pub fn log_success(&self) {
        crate::log_success!(
            crate::logging::codes::success::FILE_PROCESSING_SUCCESS,
            "Processor run completed",
            "input" => self.input_path.display(),
            "retained" => self.retained_tokens,
            "total_ms" => format!("{:.2}", self.total_duration.as_secs_f64() * 1000.0),
            "tokens_per_sec" => format!("{:.0}",
                self.retained_tokens as f64 / self.process_duration.as_secs_f64().max(f64::EPSILON))
        );
    }
}

/// JSON document written to the summary path
#[derive(Debug, Serialize)]
pub(crate) struct SummaryDocument<'a> {
    #[serde(flatten)]
    pub report: &'a ClassificationReport,
    pub percentages: BTreeMap<&'static str, f64>,
}

impl<'a> SummaryDocument<'a> {
    pub fn new(report: &'a ClassificationReport) -> Self {
        Self {
            report,
            percentages: report.percentages(),
        }
    }
}
