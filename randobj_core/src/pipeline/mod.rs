//! End-to-end processor run: read, classify, persist

mod error;
pub mod output;
mod result;

pub use error::PipelineError;
pub use output::{write_records, write_summary};
pub use result::ClassificationReport;

use crate::config::runtime::ClassifierPreferences;
use crate::file_processor::FileProcessor;
use crate::lexical::Classifier;
use crate::progress::ClassificationObserver;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;

/// Process a single file (read -> classify -> save results -> save summary)
///
/// Results are written only when `output` is given; the JSON summary only
/// when `preferences.summary_path` is set. The observer sees the finished
/// report before anything is persisted.
pub fn process_file(
    input: &Path,
    output: Option<&Path>,
    preferences: &ClassifierPreferences,
    observer: &mut dyn ClassificationObserver,
) -> Result<ClassificationReport, PipelineError> {
    let start_time = Instant::now();

    crate::log_info!("Starting processor run", "file" => input.display());

    let processor = FileProcessor::new();
    processor.validate_path(input)?;

    observer.on_read_started(input);
    let file_result = processor.process_file(input)?;
    observer.on_read_finished(file_result.metadata.size, file_result.processing_duration);

    let classifier = Classifier::with_preferences(preferences.clone());
    let outcome = classifier.classify_source(&file_result.source, observer);

    let report = ClassificationReport {
        input_path: input.to_path_buf(),
        output_path: output.map(Path::to_path_buf),
        file_size_bytes: file_result.metadata.size,
        total_segments: outcome.total_segments,
        skipped_segments: outcome.skipped_segments,
        retained_tokens: outcome.retained_tokens(),
        counts: outcome.counts.clone(),
        read_duration: file_result.processing_duration,
        process_duration: outcome.duration,
        total_duration: start_time.elapsed(),
        completed_at: Utc::now(),
    };

    observer.on_classification_finished(&report);

    if let Some(path) = output {
        observer.on_save_started(path);
        write_records(path, &outcome.records)?;
        crate::log_success!(crate::logging::codes::success::RESULTS_SAVED, "Results saved",
            "path" => path.display(),
            "records" => outcome.retained_tokens()
        );
        observer.on_save_finished(path);
    }

    if let Some(summary_path) = preferences.summary_path.as_deref() {
        write_summary(Path::new(summary_path), &report)?;
    }

    report.log_success();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoopObserver;
    use crate::tokens::Category;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::tempdir;

    fn preferences() -> ClassifierPreferences {
        ClassifierPreferences {
            progress_interval: 0,
            echo_records: false,
            summary_path: None,
        }
    }

    #[derive(Default)]
    struct EventOrder(Vec<&'static str>);

    impl ClassificationObserver for EventOrder {
        fn on_read_started(&mut self, _path: &Path) {
            self.0.push("read_started");
        }
        fn on_read_finished(&mut self, _bytes: u64, _elapsed: std::time::Duration) {
            self.0.push("read_finished");
        }
        fn on_classification_started(&mut self, _total_segments: usize) {
            self.0.push("classification_started");
        }
        fn on_classification_finished(&mut self, _report: &ClassificationReport) {
            self.0.push("classification_finished");
        }
        fn on_save_started(&mut self, _path: &Path) {
            self.0.push("save_started");
        }
        fn on_save_finished(&mut self, _path: &Path) {
            self.0.push("save_finished");
        }
    }

    #[test]
    fn test_process_file_writes_results() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("objects.txt");
        let output = dir.path().join("results.txt");
        fs::write(&input, "hello,-42,,3.141593,  ab12  ").unwrap();

        let mut order = EventOrder::default();
        let report = process_file(&input, Some(&output), &preferences(), &mut order).unwrap();

        assert_eq!(report.total_segments, 5);
        assert_eq!(report.retained_tokens, 4);
        assert_eq!(report.counts.get(Category::AlphabeticalString), 1);
        assert_eq!(report.counts.get(Category::Integer), 1);
        assert_eq!(report.counts.get(Category::RealNumber), 1);
        assert_eq!(report.counts.get(Category::Alphanumeric), 1);
        assert_eq!(report.percentage(Category::Integer), 25.0);

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Object: hello, Type: Alphabetical String\n\
             Object: -42, Type: Integer\n\
             Object: 3.141593, Type: Real Number\n\
             Object: ab12, Type: Alphanumeric"
        );
        assert_eq!(
            order.0,
            vec![
                "read_started",
                "read_finished",
                "classification_started",
                "classification_finished",
                "save_started",
                "save_finished",
            ]
        );
    }

    #[test]
    fn test_without_output_nothing_is_written() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("objects.txt");
        fs::write(&input, "a,b").unwrap();

        let report = process_file(&input, None, &preferences(), &mut NoopObserver).unwrap();

        assert!(report.output_path.is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("results.txt");
        let mut order = EventOrder::default();

        let result = process_file(
            &dir.path().join("absent.txt"),
            Some(&output),
            &preferences(),
            &mut order,
        );

        assert_matches!(&result, Err(e) if e.is_missing_input());
        assert!(!output.exists());
        assert!(order.0.is_empty());
    }

    #[test]
    fn test_summary_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("objects.txt");
        let summary = dir.path().join("summary.json");
        fs::write(&input, "abc,1,x y").unwrap();

        let prefs = ClassifierPreferences {
            summary_path: Some(summary.display().to_string()),
            ..preferences()
        };
        process_file(&input, None, &prefs, &mut NoopObserver).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
        assert_eq!(json["retained_tokens"], 3);
        assert_eq!(json["counts"]["Unknown"], 1);
        assert_eq!(json["counts"]["Alphabetical String"], 1);
        assert!(json["percentages"]["Integer"].as_f64().is_some());
        assert!(json["total_seconds"].as_f64().is_some());
    }
}
