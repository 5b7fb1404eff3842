//! Observer hooks for long-running generation and classification
//!
//! Progress printing and timing are not part of either algorithm. Callers
//! that want them implement these traits; every method defaults to a no-op.

use crate::pipeline::ClassificationReport;
use crate::tokens::ClassificationRecord;
use std::path::Path;
use std::time::Duration;

/// Cumulative generator state at a report point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationProgress {
    pub objects_generated: u64,
    pub bytes_generated: u64,
    pub target_bytes: u64,
    pub elapsed: Duration,
}

impl GenerationProgress {
    /// Percent of the target reached, capped at 100
    pub fn percent(&self) -> u64 {
        if self.target_bytes == 0 {
            return 100;
        }
        (self.bytes_generated.saturating_mul(100) / self.target_bytes).min(100)
    }
}

/// Cumulative classifier state at a report point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationProgress {
    /// Segments visited so far, empty ones included
    pub processed_segments: usize,
    pub total_segments: usize,
    pub retained_tokens: usize,
    pub elapsed: Duration,
}

impl ClassificationProgress {
    pub fn percent(&self) -> usize {
        if self.total_segments == 0 {
            return 100;
        }
        (self.processed_segments * 100 / self.total_segments).min(100)
    }
}

pub trait GenerationObserver {
    fn on_progress(&mut self, _progress: &GenerationProgress) {}
}

pub trait ClassificationObserver {
    fn on_read_started(&mut self, _path: &Path) {}

    fn on_read_finished(&mut self, _bytes: u64, _elapsed: Duration) {}

    fn on_classification_started(&mut self, _total_segments: usize) {}

    fn on_record(&mut self, _record: &ClassificationRecord) {}

    fn on_progress(&mut self, _progress: &ClassificationProgress) {}

    /// Called once classification is done, before any result is persisted
    fn on_classification_finished(&mut self, _report: &ClassificationReport) {}

    fn on_save_started(&mut self, _path: &Path) {}

    fn on_save_finished(&mut self, _path: &Path) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

impl ClassificationObserver for NoopObserver {}
