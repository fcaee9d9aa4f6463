//! Consistency checks over the persisted collections.
//!
//! Errors are entries a downstream reader would drop or that break the
//! slug-uniqueness invariant; warnings are shape problems that still load.

use std::collections::HashMap;
use std::fmt;

use bookshelf_catalog::slug::is_canonical_slug;
use bookshelf_catalog::types::*;
use serde_json::Value;

/// Languages downstream readers accept for `originalLanguage`.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "es", "zh", "ja", "ko", "pt", "fr", "de", "pl"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The array element is not a JSON object.
    NotAnObject,
    DuplicateSlug { first_in: CollectionKind },
    /// Missing, not a string, or blank.
    EmptyField(&'static str),
    /// Missing, zero, negative, fractional or not numeric.
    NotPositiveInteger(&'static str),
    UnknownAgeGroup(String),
    UnsupportedLanguage(String),
    NonCanonicalSlug,
    AgeGroupMismatch(AgeGroup),
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            Self::NonCanonicalSlug | Self::AgeGroupMismatch(_) => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// One problem found on one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub collection: CollectionKind,
    /// Position of the entry within its collection.
    pub position: usize,
    pub slug: String,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] '{}': ", self.collection, self.position, self.slug)?;
        match &self.kind {
            IssueKind::NotAnObject => write!(f, "entry is not an object"),
            IssueKind::DuplicateSlug { first_in } => {
                write!(f, "duplicate slug (first seen in {})", first_in)
            }
            IssueKind::EmptyField(field) => write!(f, "missing or empty {}", field),
            IssueKind::NotPositiveInteger(field) => {
                write!(f, "{} must be a positive integer", field)
            }
            IssueKind::UnknownAgeGroup(group) => write!(f, "unknown ageGroup '{}'", group),
            IssueKind::UnsupportedLanguage(lang) => {
                write!(f, "unsupported originalLanguage '{}'", lang)
            }
            IssueKind::NonCanonicalSlug => write!(f, "slug is not in canonical form"),
            IssueKind::AgeGroupMismatch(group) => {
                write!(f, "ageGroup '{}' does not match collection", group)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub entries_checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.kind.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.kind.severity() == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Check both collections.
///
/// Entries are checked as stored, with the coercions downstream readers
/// apply: text fields are trimmed, and integer-valued numbers or numeric
/// strings count as integers.
pub fn validate_catalogs(catalogs: &Catalogs) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: HashMap<&str, CollectionKind> = HashMap::new();

    for kind in CollectionKind::ALL {
        for (position, entry) in catalogs.collection(kind).iter().enumerate() {
            report.entries_checked += 1;
            let slug = entry.slug().unwrap_or_default();
            let mut push = |issue| {
                report.issues.push(ValidationIssue {
                    collection: kind,
                    position,
                    slug: slug.to_string(),
                    kind: issue,
                })
            };

            if entry.as_object().is_none() {
                push(IssueKind::NotAnObject);
                continue;
            }

            if let Some(slug) = entry.slug() {
                if let Some(first_in) = seen.get(slug) {
                    push(IssueKind::DuplicateSlug {
                        first_in: *first_in,
                    });
                } else {
                    seen.insert(slug, kind);
                }
            }

            for field in ["slug", "title", "author"] {
                if non_empty_text(entry.get(field)).is_none() {
                    push(IssueKind::EmptyField(field));
                }
            }

            for field in ["gutenbergId", "chapterCount", "wordCount"] {
                if positive_int(entry.get(field)).is_none() {
                    push(IssueKind::NotPositiveInteger(field));
                }
            }

            let age_group = match non_empty_text(entry.get("ageGroup")) {
                None => {
                    push(IssueKind::EmptyField("ageGroup"));
                    None
                }
                Some(value) => {
                    let parsed = AgeGroup::parse(value);
                    if parsed.is_none() {
                        push(IssueKind::UnknownAgeGroup(value.to_string()));
                    }
                    parsed
                }
            };

            match non_empty_text(entry.get("originalLanguage")) {
                None => push(IssueKind::EmptyField("originalLanguage")),
                Some(lang) if !SUPPORTED_LANGUAGES.contains(&lang) => {
                    push(IssueKind::UnsupportedLanguage(lang.to_string()))
                }
                Some(_) => {}
            }

            if !slug.is_empty() && !is_canonical_slug(slug) {
                push(IssueKind::NonCanonicalSlug);
            }

            if let Some(group) = age_group.filter(|g| conflicts_with(kind, *g)) {
                push(IssueKind::AgeGroupMismatch(group));
            }
        }
    }

    report
}

/// Trimmed string value, if it is a string with visible content.
fn non_empty_text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Positive integer value. Accepts integer-valued floats and numeric strings.
fn positive_int(value: Option<&Value>) -> Option<u64> {
    let number = match value? {
        Value::Number(n) => match n.as_u64() {
            Some(int) => return (int > 0).then_some(int),
            None => n.as_f64()?,
        },
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (number.is_finite() && number.fract() == 0.0 && number >= 1.0).then_some(number as u64)
}

/// Only the opposite audience is a mismatch; teen and all-ages fit anywhere.
fn conflicts_with(kind: CollectionKind, group: AgeGroup) -> bool {
    matches!(
        (kind, group),
        (CollectionKind::Children, AgeGroup::Adult) | (CollectionKind::Adult, AgeGroup::Children)
    )
}
