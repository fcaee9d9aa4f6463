//! Merge progress reporting.

use crate::merge::CandidateOutcome;

/// Trait for receiving merge progress updates.
pub trait MergeProgress {
    /// Called when a batch starts.
    fn on_batch(&self, label: &str, candidates: usize);

    /// Called after each candidate has been accepted or skipped.
    fn on_candidate(&self, outcome: &CandidateOutcome);

    /// Called when the run is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl MergeProgress for SilentProgress {
    fn on_batch(&self, _label: &str, _candidates: usize) {}
    fn on_candidate(&self, _outcome: &CandidateOutcome) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
///
/// Skips are logged at debug level so a normal run only shows the summary.
pub struct LogProgress;

impl MergeProgress for LogProgress {
    fn on_batch(&self, label: &str, candidates: usize) {
        log::info!("Merging batch '{}' ({} candidates)", label, candidates);
    }

    fn on_candidate(&self, outcome: &CandidateOutcome) {
        match outcome {
            CandidateOutcome::Accepted { .. } => log::trace!("  + {}", outcome),
            _ => log::debug!("  - {}", outcome),
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
