//! Merge candidate batches into the audiobook catalog.
//!
//! This crate owns the catalog-expansion logic: building entries from
//! candidates, slug-based de-duplication across both collections, the
//! load/merge/write run, size targets, validation, and merge reports.

pub mod expand;
pub mod merge;
pub mod progress;
pub mod report;
pub mod targets;
pub mod validate;

pub use expand::{ExpandError, ExpandOptions, ExpandOutcome, expand_catalogs};
pub use merge::{
    BatchResult, CandidateOutcome, MergeStats, SlugIndex, build_entry, merge_batch,
    merge_candidates,
};
pub use progress::{LogProgress, MergeProgress, SilentProgress};
pub use report::{MergeLog, MergeSummary};
pub use targets::{TargetStatus, Targets};
pub use validate::{
    IssueKind, SUPPORTED_LANGUAGES, Severity, ValidationIssue, ValidationReport,
    validate_catalogs,
};
