//! One-shot catalog expansion: load both collections, merge every batch,
//! write both collections back.
//!
//! Nothing is written unless both documents were read and every batch was
//! merged; a failed read leaves the files untouched.

use bookshelf_catalog::json::{self, CatalogIoError, CatalogPaths};
use bookshelf_catalog::types::{CandidateBatch, Catalogs, CollectionKind};
use thiserror::Error;

use crate::merge::{BatchResult, SlugIndex, merge_batch};
use crate::progress::MergeProgress;

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("Failed to load catalogs: {0}")]
    Load(#[source] CatalogIoError),
    #[error("Failed to write catalogs: {0}")]
    Write(#[source] CatalogIoError),
}

/// Options for [`expand_catalogs`].
#[derive(Debug, Clone, Default)]
pub struct ExpandOptions {
    /// Merge in memory and report, but leave the files untouched.
    pub dry_run: bool,
}

/// Result of a full expansion run.
#[derive(Debug, Clone)]
pub struct ExpandOutcome {
    pub batches: Vec<BatchResult>,
    pub children_before: usize,
    pub adult_before: usize,
    /// Distinct slugs across both collections before any batch ran.
    pub unique_slugs_before: usize,
    pub catalogs: Catalogs,
    /// `false` for dry runs.
    pub written: bool,
}

impl ExpandOutcome {
    pub fn before(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Children => self.children_before,
            CollectionKind::Adult => self.adult_before,
        }
    }

    pub fn after(&self, kind: CollectionKind) -> usize {
        self.catalogs.collection(kind).len()
    }

    pub fn added(&self, kind: CollectionKind) -> usize {
        self.batches.iter().map(|b| b.stats.added(kind)).sum()
    }

    pub fn total_added(&self) -> usize {
        self.batches.iter().map(|b| b.stats.total_added()).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.batches.iter().map(|b| b.stats.total_skipped()).sum()
    }
}

/// Merge `batches`, in order, into the collections at `paths`.
pub fn expand_catalogs(
    paths: &CatalogPaths,
    batches: &[CandidateBatch],
    options: &ExpandOptions,
    progress: Option<&dyn MergeProgress>,
) -> Result<ExpandOutcome, ExpandError> {
    let mut catalogs = json::load_catalogs(paths).map_err(ExpandError::Load)?;
    let children_before = catalogs.children.len();
    let adult_before = catalogs.adult.len();

    let mut index = SlugIndex::from_catalogs(&catalogs);
    let unique_slugs_before = index.len();
    log::debug!(
        "Loaded {} children, {} adult ({} unique slugs)",
        children_before,
        adult_before,
        unique_slugs_before
    );

    let results: Vec<BatchResult> = batches
        .iter()
        .map(|batch| merge_batch(&mut catalogs, batch, &mut index, progress))
        .collect();

    let added: usize = results.iter().map(|r| r.stats.total_added()).sum();
    let written = if options.dry_run {
        false
    } else {
        json::write_catalogs(paths, &catalogs).map_err(ExpandError::Write)?;
        true
    };

    if let Some(p) = progress {
        let verb = if written { "written" } else { "not written (dry run)" };
        p.on_complete(&format!(
            "Merged {} batch(es), {} new entries; catalogs {}",
            results.len(),
            added,
            verb
        ));
    }

    Ok(ExpandOutcome {
        batches: results,
        children_before,
        adult_before,
        unique_slugs_before,
        catalogs,
        written,
    })
}
