//! Slug-keyed merge of candidate batches into the two collections.
//!
//! The children and adult collections share one slug namespace: a candidate
//! is dropped if its slug already exists in *either* collection, or was
//! accepted earlier in the same run. Existing entries are never touched.

use std::collections::HashMap;
use std::fmt;

use bookshelf_catalog::slug::slugify;
use bookshelf_catalog::types::*;

use crate::progress::MergeProgress;

/// Build the catalog entry for a candidate bound for `kind`.
pub fn build_entry(candidate: &CandidateRecord, kind: CollectionKind) -> CatalogEntry {
    CatalogEntry {
        slug: slugify(&candidate.title),
        title: candidate.title.clone(),
        author: candidate.author.clone(),
        external_id: candidate.external_id,
        age_group: kind.age_group(),
        chapter_count: candidate.chapter_count,
        word_count: candidate.word_count,
        original_language: DEFAULT_LANGUAGE.to_string(),
        genres: candidate.genres.clone(),
        year_published: Some(candidate.year_published),
    }
}

// ── Slug index ──────────────────────────────────────────────────────────────

/// Every slug claimed so far in a run, with the collection that holds it.
#[derive(Debug, Clone, Default)]
pub struct SlugIndex {
    slugs: HashMap<String, CollectionKind>,
}

impl SlugIndex {
    /// Seed from every entry of both collections.
    ///
    /// If existing data already contains a duplicate, the first holder
    /// (children before adult, then document order) is remembered. Entries
    /// without a string `slug` claim nothing.
    pub fn from_catalogs(catalogs: &Catalogs) -> Self {
        let mut index = Self::default();
        for (kind, slug) in catalogs
            .iter()
            .filter_map(|(kind, entry)| entry.slug().map(|slug| (kind, slug)))
        {
            index.slugs.entry(slug.to_string()).or_insert(kind);
        }
        index
    }

    /// Collection that already holds `slug`, if any.
    pub fn holder(&self, slug: &str) -> Option<CollectionKind> {
        self.slugs.get(slug).copied()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains_key(slug)
    }

    /// Claim `slug` for `kind`. Returns `false` if it was already claimed.
    pub fn claim(&mut self, slug: &str, kind: CollectionKind) -> bool {
        if self.slugs.contains_key(slug) {
            return false;
        }
        self.slugs.insert(slug.to_string(), kind);
        true
    }

    /// Number of distinct slugs.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

// ── Outcomes and stats ──────────────────────────────────────────────────────

/// What happened to one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOutcome {
    Accepted {
        collection: CollectionKind,
        slug: String,
        title: String,
    },
    /// The slug was already claimed by an existing entry or an earlier candidate.
    Duplicate {
        collection: CollectionKind,
        slug: String,
        title: String,
        held_by: CollectionKind,
    },
}

impl CandidateOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl fmt::Display for CandidateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted {
                collection,
                slug,
                title,
            } => write!(f, "[{}] \"{}\" added as {}", collection, title, slug),
            Self::Duplicate {
                collection,
                slug,
                title,
                held_by,
            } => write!(
                f,
                "[{}] \"{}\" skipped: slug {} already in {}",
                collection, title, slug, held_by
            ),
        }
    }
}

/// Counts from merging one batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    pub children_before: usize,
    pub adult_before: usize,
    /// Distinct slugs claimed when the batch started.
    pub unique_slugs_before: usize,
    pub children_added: usize,
    pub adult_added: usize,
    pub children_duplicates: usize,
    pub adult_duplicates: usize,
}

impl MergeStats {
    pub fn added(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Children => self.children_added,
            CollectionKind::Adult => self.adult_added,
        }
    }

    pub fn duplicates(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Children => self.children_duplicates,
            CollectionKind::Adult => self.adult_duplicates,
        }
    }

    pub fn total_added(&self) -> usize {
        self.children_added + self.adult_added
    }

    pub fn total_skipped(&self) -> usize {
        self.children_duplicates + self.adult_duplicates
    }

    fn record(&mut self, outcome: &CandidateOutcome) {
        match outcome {
            CandidateOutcome::Accepted { collection, .. } => match collection {
                CollectionKind::Children => self.children_added += 1,
                CollectionKind::Adult => self.adult_added += 1,
            },
            CandidateOutcome::Duplicate { collection, .. } => match collection {
                CollectionKind::Children => self.children_duplicates += 1,
                CollectionKind::Adult => self.adult_duplicates += 1,
            },
        }
    }
}

/// Stats plus per-candidate outcomes, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub label: String,
    pub stats: MergeStats,
    pub outcomes: Vec<CandidateOutcome>,
}

// ── Merge ───────────────────────────────────────────────────────────────────

/// Merge one batch into `catalogs`, claiming slugs in `index`.
///
/// Children candidates are processed before adult candidates, each list in
/// input order, so the first occurrence of a slug wins. Accepted entries are
/// appended after the existing ones.
pub fn merge_batch(
    catalogs: &mut Catalogs,
    batch: &CandidateBatch,
    index: &mut SlugIndex,
    progress: Option<&dyn MergeProgress>,
) -> BatchResult {
    let mut result = BatchResult {
        label: batch.label.clone(),
        stats: MergeStats {
            children_before: catalogs.children.len(),
            adult_before: catalogs.adult.len(),
            unique_slugs_before: index.len(),
            ..Default::default()
        },
        outcomes: Vec::with_capacity(batch.len()),
    };

    if let Some(p) = progress {
        p.on_batch(&batch.label, batch.len());
    }

    for kind in CollectionKind::ALL {
        for candidate in batch.candidates(kind) {
            let outcome = merge_candidate(catalogs, candidate, kind, index);
            if let Some(p) = progress {
                p.on_candidate(&outcome);
            }
            result.stats.record(&outcome);
            result.outcomes.push(outcome);
        }
    }

    result
}

/// Merge a single batch against a fresh index seeded from `catalogs`.
pub fn merge_candidates(catalogs: &mut Catalogs, batch: &CandidateBatch) -> BatchResult {
    let mut index = SlugIndex::from_catalogs(catalogs);
    merge_batch(catalogs, batch, &mut index, None)
}

fn merge_candidate(
    catalogs: &mut Catalogs,
    candidate: &CandidateRecord,
    kind: CollectionKind,
    index: &mut SlugIndex,
) -> CandidateOutcome {
    // An empty slug is claimed like any other; `validate` reports it.
    let entry = build_entry(candidate, kind);

    if let Some(held_by) = index.holder(&entry.slug) {
        return CandidateOutcome::Duplicate {
            collection: kind,
            slug: entry.slug,
            title: entry.title,
            held_by,
        };
    }

    index.claim(&entry.slug, kind);
    let outcome = CandidateOutcome::Accepted {
        collection: kind,
        slug: entry.slug.clone(),
        title: entry.title.clone(),
    };
    catalogs.collection_mut(kind).push(entry.into());
    outcome
}
