//! Screenshot run summary.

use super::result::CaptureResult;

/// Summary of a screenshot capture run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSummary {
    /// Screenshots written.
    pub captured: usize,

    /// Captures that produced a failure marker.
    pub failed: usize,
}

impl CaptureSummary {
    /// Updates the summary with a capture result.
    pub fn record_result(&mut self, result: &CaptureResult) {
        match result {
            CaptureResult::Captured { .. } => self.captured += 1,
            CaptureResult::Failed { .. } => self.failed += 1,
        }
    }

    /// Total apps attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.captured + self.failed
    }
}
