//! Ordered-rule object classifier
//!
//! Each non-empty segment between separators is tested against a fixed list
//! of anchored patterns; the first match decides the category.

use crate::config::constants::compile_time::format::SEPARATOR;
use crate::config::runtime::ClassifierPreferences;
use crate::logging::{self, codes, LogEvent};
use crate::progress::{ClassificationObserver, ClassificationProgress};
use crate::tokens::{Category, CategoryCounts, ClassificationRecord};
use crate::{log_debug, log_success};
use regex::Regex;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

/// A (pattern, category) pair; patterns see the unstripped segment
struct Rule {
    category: Category,
    pattern: Regex,
}

static RULES: OnceLock<Vec<Rule>> = OnceLock::new();

fn rules() -> &'static [Rule] {
    RULES.get_or_init(|| {
        [
            (Category::Integer, r"^-?[0-9]+$"),
            (Category::RealNumber, r"^-?[0-9]+\.[0-9]+$"),
            (Category::AlphabeticalString, r"^[a-zA-Z]+$"),
            (Category::Alphanumeric, r"^\s*[a-zA-Z0-9]+\s*$"),
        ]
        .into_iter()
        .map(|(category, pattern)| Rule {
            category,
            // Literal patterns above; compiling them cannot fail
            pattern: Regex::new(pattern).expect("classifier rule pattern"),
        })
        .collect()
    })
}

/// Category of a single raw segment; `Unknown` when no rule matches
pub fn category_of(raw: &str) -> Category {
    rules()
        .iter()
        .find(|rule| rule.pattern.is_match(raw))
        .map(|rule| rule.category)
        .unwrap_or(Category::Unknown)
}

/// Classify a single raw segment
pub fn classify_token(raw: &str) -> ClassificationRecord {
    ClassificationRecord::new(raw, category_of(raw))
}

/// Split on the separator, dropping empty segments
pub fn split_tokens(source: &str) -> impl Iterator<Item = &str> {
    source.split(SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Result of classifying a whole source text
#[derive(Debug, Clone, Default)]
pub struct ClassificationOutcome {
    /// Records in input order
    pub records: Vec<ClassificationRecord>,
    pub counts: CategoryCounts,
    /// Segments produced by splitting, empty ones included
    pub total_segments: usize,
    pub skipped_segments: usize,
    pub duration: Duration,
}

impl ClassificationOutcome {
    pub fn retained_tokens(&self) -> usize {
        self.records.len()
    }

    /// Record lines as persisted to the output file
    pub fn record_lines(&self) -> Vec<String> {
        self.records.iter().map(|r| r.to_string()).collect()
    }
}

/// Stateful classifier carrying its reporting preferences
pub struct Classifier {
    preferences: ClassifierPreferences,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_preferences(ClassifierPreferences::default())
    }

    pub fn with_preferences(preferences: ClassifierPreferences) -> Self {
        Self { preferences }
    }

    pub fn classify_source(
        &self,
        source: &str,
        observer: &mut dyn ClassificationObserver,
    ) -> ClassificationOutcome {
        let start = Instant::now();
        let total_segments = source.split(SEPARATOR).count();
        let interval = self.preferences.progress_interval;

        log_debug!("Starting classification",
            "bytes" => source.len(),
            "segments" => total_segments
        );
        observer.on_classification_started(total_segments);

        let mut outcome = ClassificationOutcome {
            total_segments,
            ..ClassificationOutcome::default()
        };

        for (index, segment) in source.split(SEPARATOR).enumerate() {
            if segment.is_empty() {
                outcome.skipped_segments += 1;
            } else {
                let record = classify_token(segment);
                if self.preferences.echo_records {
                    observer.on_record(&record);
                }
                outcome.counts.record(record.category);
                outcome.records.push(record);
            }

            let processed = index + 1;
            if interval > 0 && (processed % interval == 0 || processed == total_segments) {
                observer.on_progress(&ClassificationProgress {
                    processed_segments: processed,
                    total_segments,
                    retained_tokens: outcome.records.len(),
                    elapsed: start.elapsed(),
                });
            }
        }

        outcome.duration = start.elapsed();

        let unknown = outcome.counts.get(Category::Unknown);
        if unknown > 0 {
            if let Some(logger) = logging::try_get_global_logger() {
                logger.log_event(
                    LogEvent::warning_with_code(
                        codes::classification::UNKNOWN_OBJECT,
                        "Objects matched no known type",
                    )
                    .with_context("count", &unknown.to_string()),
                );
            }
        }

        log_success!(codes::success::CLASSIFICATION_COMPLETE, "Classification complete",
            "retained" => outcome.retained_tokens(),
            "skipped" => outcome.skipped_segments,
            "duration_ms" => format!("{:.2}", outcome.duration.as_secs_f64() * 1000.0)
        );

        outcome
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoopObserver;

    fn quiet_preferences() -> ClassifierPreferences {
        ClassifierPreferences {
            progress_interval: 0,
            echo_records: true,
            summary_path: None,
        }
    }

    #[derive(Default)]
    struct Recorder {
        started_with: Option<usize>,
        records: Vec<ClassificationRecord>,
        progress: Vec<ClassificationProgress>,
    }

    impl ClassificationObserver for Recorder {
        fn on_classification_started(&mut self, total_segments: usize) {
            self.started_with = Some(total_segments);
        }

        fn on_record(&mut self, record: &ClassificationRecord) {
            self.records.push(record.clone());
        }

        fn on_progress(&mut self, progress: &ClassificationProgress) {
            self.progress.push(*progress);
        }
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(category_of("-123"), Category::Integer);
        assert_eq!(category_of("-123.450000"), Category::RealNumber);
        assert_eq!(category_of("abcXYZ"), Category::AlphabeticalString);

        let padded = classify_token("  ab12  ");
        assert_eq!(padded.category, Category::Alphanumeric);
        assert_eq!(padded.value, "ab12");

        assert_eq!(category_of("12."), Category::Unknown);
        assert_eq!(category_of(".5"), Category::Unknown);
        assert_eq!(category_of("12a"), Category::Alphanumeric);
    }

    #[test]
    fn test_mixed_core_with_sign_or_dot_is_unknown() {
        assert_eq!(category_of("-12a"), Category::Unknown);
        assert_eq!(category_of("1.2.3"), Category::Unknown);
        assert_eq!(category_of("--5"), Category::Unknown);
        assert_eq!(category_of("a b"), Category::Unknown);
        assert_eq!(category_of("-"), Category::Unknown);
    }

    #[test]
    fn test_numbers_must_not_carry_whitespace() {
        // Padded digits fall through to the alphanumeric rule
        assert_eq!(category_of(" 42"), Category::Alphanumeric);
        assert_eq!(classify_token(" 42 ").value, "42");
        // A padded real has a '.', which the alphanumeric rule rejects
        assert_eq!(category_of(" 4.2 "), Category::Unknown);
        assert_eq!(category_of("\tword\n"), Category::Alphanumeric);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(category_of("007"), Category::Integer);
        assert_eq!(category_of("0.0"), Category::RealNumber);
        assert_eq!(category_of("abc"), Category::AlphabeticalString);
        assert_eq!(category_of("abc123"), Category::Alphanumeric);
    }

    #[test]
    fn test_whitespace_only_segment_is_unknown() {
        let record = classify_token("   ");
        assert_eq!(record.category, Category::Unknown);
        assert_eq!(record.value, "");
    }

    #[test]
    fn test_non_ascii_letters_are_not_alphabetical() {
        assert_eq!(category_of("café"), Category::Unknown);
        assert_eq!(category_of("١٢٣"), Category::Unknown);
    }

    #[test]
    fn test_split_skips_empty_segments() {
        let tokens: Vec<&str> = split_tokens("a,,b").collect();
        assert_eq!(tokens, vec!["a", "b"]);

        assert_eq!(split_tokens("").count(), 0);
        assert_eq!(split_tokens(",,,").count(), 0);
        assert_eq!(split_tokens("x,").collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_classify_source_counts_and_order() {
        let classifier = Classifier::with_preferences(quiet_preferences());
        let mut recorder = Recorder::default();

        let outcome = classifier.classify_source("-1,,2.50,abc,  x9 ,12.,", &mut recorder);

        assert_eq!(outcome.total_segments, 7);
        assert_eq!(outcome.skipped_segments, 2);
        assert_eq!(outcome.retained_tokens(), 5);
        assert_eq!(outcome.counts.total(), outcome.retained_tokens());
        assert_eq!(recorder.started_with, Some(7));

        let categories: Vec<Category> = outcome.records.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Integer,
                Category::RealNumber,
                Category::AlphabeticalString,
                Category::Alphanumeric,
                Category::Unknown,
            ]
        );
        assert_eq!(recorder.records, outcome.records);
        assert_eq!(
            outcome.record_lines()[3],
            "Object: x9, Type: Alphanumeric"
        );
    }

    #[test]
    fn test_echo_can_be_disabled() {
        let classifier = Classifier::with_preferences(ClassifierPreferences {
            echo_records: false,
            ..quiet_preferences()
        });
        let mut recorder = Recorder::default();

        let outcome = classifier.classify_source("a,b", &mut recorder);
        assert!(recorder.records.is_empty());
        assert_eq!(outcome.retained_tokens(), 2);
    }

    #[test]
    fn test_progress_cadence() {
        let classifier = Classifier::with_preferences(ClassifierPreferences {
            progress_interval: 2,
            ..quiet_preferences()
        });
        let mut recorder = Recorder::default();

        classifier.classify_source("a,b,c,d,e", &mut recorder);

        let processed: Vec<usize> = recorder
            .progress
            .iter()
            .map(|p| p.processed_segments)
            .collect();
        assert_eq!(processed, vec![2, 4, 5]);
        assert_eq!(recorder.progress.last().map(|p| p.percent()), Some(100));
    }

    #[test]
    fn test_empty_source() {
        let classifier = Classifier::with_preferences(quiet_preferences());
        let outcome = classifier.classify_source("", &mut NoopObserver);

        assert_eq!(outcome.total_segments, 1);
        assert_eq!(outcome.skipped_segments, 1);
        assert_eq!(outcome.retained_tokens(), 0);
        assert_eq!(outcome.counts.total(), 0);
    }
}
