//! Data model types for the audiobook catalog.
//!
//! These types mirror the persisted JSON documents (`children-catalog.json`,
//! `adult-catalog.json`) and the candidate batch files that feed them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Age group ───────────────────────────────────────────────────────────────

/// Audience tag stored on every catalog entry.
///
/// The merge only ever assigns `Children` or `Adult`; `Teen` and `AllAges`
/// appear on hand-curated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Children,
    Teen,
    Adult,
    AllAges,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [Self::Children, Self::Teen, Self::Adult, Self::AllAges];

    /// Parse the persisted tag, e.g. `"all-ages"`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Teen => "teen",
            Self::Adult => "adult",
            Self::AllAges => "all-ages",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Collection ──────────────────────────────────────────────────────────────

/// One of the two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Children,
    Adult,
}

impl CollectionKind {
    /// Both collections, in the order they are processed and written.
    pub const ALL: [CollectionKind; 2] = [CollectionKind::Children, CollectionKind::Adult];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Adult => "adult",
        }
    }

    /// File name of the collection inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Children => "children-catalog.json",
            Self::Adult => "adult-catalog.json",
        }
    }

    /// Age group stamped on entries appended to this collection.
    pub fn age_group(&self) -> AgeGroup {
        match self {
            Self::Children => AgeGroup::Children,
            Self::Adult => AgeGroup::Adult,
        }
    }

    /// Collection size the catalog is being grown towards.
    pub fn default_target(&self) -> usize {
        match self {
            Self::Children => 1000,
            Self::Adult => 500,
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Catalog entry ───────────────────────────────────────────────────────────

/// Language every entry built by the merge is tagged with.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Typed view of one audiobook's metadata, used for entries the merge builds.
///
/// Existing entries are never round-tripped through this struct; they live
/// in the collections as [`StoredEntry`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique key across both collections, derived from `title`.
    pub slug: String,
    pub title: String,
    pub author: String,
    /// Project Gutenberg eBook number. Reused IDs are tolerated.
    #[serde(rename = "gutenbergId")]
    pub external_id: u64,
    pub age_group: AgeGroup,
    pub chapter_count: u32,
    pub word_count: u32,
    pub original_language: String,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Negative years are BCE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
}

/// One element of a collection document, kept exactly as it was read.
///
/// Key order, `null`s, unknown keys and values of unexpected types all
/// survive a load/save cycle. Only `slug` is read by the merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredEntry(Value);

impl StoredEntry {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of `key`, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn slug(&self) -> Option<&str> {
        self.str_field("slug")
    }

    /// String genre tags; anything else in the list is ignored.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.0
            .get("genres")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// Parse the typed view. Fails for entries outside the known shape.
    pub fn to_entry(&self) -> Result<CatalogEntry, serde_json::Error> {
        CatalogEntry::deserialize(&self.0)
    }
}

impl From<Value> for StoredEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<CatalogEntry> for StoredEntry {
    fn from(entry: CatalogEntry) -> Self {
        let mut map = Map::new();
        map.insert("slug".into(), entry.slug.into());
        map.insert("title".into(), entry.title.into());
        map.insert("author".into(), entry.author.into());
        map.insert("gutenbergId".into(), entry.external_id.into());
        map.insert("ageGroup".into(), entry.age_group.as_str().into());
        map.insert("chapterCount".into(), entry.chapter_count.into());
        map.insert("wordCount".into(), entry.word_count.into());
        map.insert("originalLanguage".into(), entry.original_language.into());
        map.insert("genres".into(), entry.genres.into());
        if let Some(year) = entry.year_published {
            map.insert("yearPublished".into(), year.into());
        }
        Self(Value::Object(map))
    }
}

/// Both collections held in memory for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogs {
    pub children: Vec<StoredEntry>,
    pub adult: Vec<StoredEntry>,
}

impl Catalogs {
    pub fn new(children: Vec<StoredEntry>, adult: Vec<StoredEntry>) -> Self {
        Self { children, adult }
    }

    pub fn collection(&self, kind: CollectionKind) -> &[StoredEntry] {
        match kind {
            CollectionKind::Children => &self.children,
            CollectionKind::Adult => &self.adult,
        }
    }

    pub fn collection_mut(&mut self, kind: CollectionKind) -> &mut Vec<StoredEntry> {
        match kind {
            CollectionKind::Children => &mut self.children,
            CollectionKind::Adult => &mut self.adult,
        }
    }

    /// Every entry with the collection it lives in, children first.
    pub fn iter(&self) -> impl Iterator<Item = (CollectionKind, &StoredEntry)> {
        CollectionKind::ALL
            .into_iter()
            .flat_map(move |kind| self.collection(kind).iter().map(move |e| (kind, e)))
    }

    pub fn total_len(&self) -> usize {
        self.children.len() + self.adult.len()
    }
}

// ── Candidates ──────────────────────────────────────────────────────────────

/// Raw fields for one entry before normalization.
///
/// Batch files write candidates as 7-element flow sequences:
/// `[title, author, gutenbergId, chapterCount, wordCount, [genres...], yearPublished]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CandidateTuple", into = "CandidateTuple")]
pub struct CandidateRecord {
    pub title: String,
    pub author: String,
    pub external_id: u64,
    pub chapter_count: u32,
    pub word_count: u32,
    pub genres: Vec<String>,
    pub year_published: i32,
}

type CandidateTuple = (String, String, u64, u32, u32, Vec<String>, i32);

impl From<CandidateTuple> for CandidateRecord {
    fn from(t: CandidateTuple) -> Self {
        let (title, author, external_id, chapter_count, word_count, genres, year_published) = t;
        Self {
            title,
            author,
            external_id,
            chapter_count,
            word_count,
            genres,
            year_published,
        }
    }
}

impl From<CandidateRecord> for CandidateTuple {
    fn from(c: CandidateRecord) -> Self {
        (
            c.title,
            c.author,
            c.external_id,
            c.chapter_count,
            c.word_count,
            c.genres,
            c.year_published,
        )
    }
}

/// A named set of candidates bound for each collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateBatch {
    /// Display name used in logs and reports. Defaults to the file stem.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub children: Vec<CandidateRecord>,
    #[serde(default)]
    pub adult: Vec<CandidateRecord>,
}

impl CandidateBatch {
    pub fn candidates(&self, kind: CollectionKind) -> &[CandidateRecord] {
        match kind {
            CollectionKind::Children => &self.children,
            CollectionKind::Adult => &self.adult,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len() + self.adult.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.adult.is_empty()
    }
}
