//! Discovery run summary.

use super::result::ProcessingResult;

/// Summary of a discovery run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverySummary {
    /// Accounts scanned.
    pub accounts_processed: usize,

    /// Accounts skipped because no credential was available.
    pub accounts_skipped: usize,

    /// Repositories returned by the listing endpoints.
    pub repositories_listed: usize,

    /// Repositories with GitHub Pages enabled.
    pub pages_repositories: usize,

    /// Entries added to the catalog.
    pub apps_added: usize,

    /// Pages repositories dropped because enrichment failed.
    pub repositories_failed: usize,
}

impl DiscoverySummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        match result {
            ProcessingResult::Added { .. } => self.apps_added += 1,
            ProcessingResult::Failed { .. } => self.repositories_failed += 1,
        }
    }

    /// Returns true if any repository was dropped.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0
    }
}
