//! Plain-text merge reports.
//!
//! A [`MergeLog`] renders the outcome of an expansion run: summary counts,
//! optional before/after sizes with target status, and one line per
//! candidate grouped by batch.

use std::io::Write;
use std::path::Path;

use bookshelf_catalog::types::CollectionKind;

use crate::expand::ExpandOutcome;
use crate::merge::{BatchResult, CandidateOutcome};
use crate::targets::Targets;

/// Collects batch results and writes a merge report file.
#[derive(Debug, Default)]
pub struct MergeLog {
    batches: Vec<BatchResult>,
}

impl MergeLog {
    pub fn from_outcome(outcome: &ExpandOutcome) -> Self {
        Self {
            batches: outcome.batches.clone(),
        }
    }

    pub fn summary(&self) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for batch in &self.batches {
            for outcome in &batch.outcomes {
                match outcome {
                    CandidateOutcome::Accepted { collection, .. } => match collection {
                        CollectionKind::Children => summary.children_added += 1,
                        CollectionKind::Adult => summary.adult_added += 1,
                    },
                    CandidateOutcome::Duplicate {
                        collection,
                        held_by,
                        ..
                    } => {
                        summary.duplicates += 1;
                        if collection != held_by {
                            summary.cross_collection += 1;
                        }
                    }
                }
            }
        }
        summary
    }

    /// Render the report. `totals` adds final collection sizes and target status.
    pub fn render(&self, totals: Option<(&ExpandOutcome, &Targets)>) -> String {
        let summary = self.summary();
        let mut out = String::new();

        out.push_str("=== Catalog Merge Report ===\n");
        out.push_str(&format!(
            "Date: {}\n\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str("--- Summary ---\n");
        out.push_str(&format!("Batches: {}\n", self.batches.len()));
        out.push_str(&format!(
            "Added: {} (children: {}, adult: {})\n",
            summary.children_added + summary.adult_added,
            summary.children_added,
            summary.adult_added
        ));
        out.push_str(&format!(
            "Duplicates skipped: {} ({} across collections)\n",
            summary.duplicates, summary.cross_collection
        ));

        if let Some((outcome, targets)) = totals {
            for kind in CollectionKind::ALL {
                let after = outcome.after(kind);
                out.push_str(&format!(
                    "{}: {} -> {} ({})\n",
                    kind,
                    outcome.before(kind),
                    after,
                    targets.status(kind, after)
                ));
            }
        }

        out.push_str("\n--- Details ---\n");
        for batch in &self.batches {
            out.push_str(&format!("\n# {}\n", batch.label));
            for outcome in &batch.outcomes {
                let tag = match outcome {
                    CandidateOutcome::Accepted { .. } => "[ADDED]",
                    CandidateOutcome::Duplicate { .. } => "[DUPLICATE]",
                };
                out.push_str(&format!("{} {}\n", tag, outcome));
            }
        }

        out
    }

    /// Write the report to a file.
    pub fn write_to_file(
        &self,
        path: &Path,
        totals: Option<(&ExpandOutcome, &Targets)>,
    ) -> std::io::Result<()> {
        let mut file = std::fs::File::create(path)?;
        file.write_all(self.render(totals).as_bytes())?;
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub children_added: usize,
    pub adult_added: usize,
    pub duplicates: usize,
    /// Duplicates whose slug was held by the other collection.
    pub cross_collection: usize,
}
