//! YAML loading for candidate batches.
//!
//! A batch file lists the new candidates for each collection:
//! ```text
//! label: batch-3
//! children:
//!   - ["Ruth Fielding of the Red Mill", "Alice B. Emerson", 28001, 20, 35000, ["mystery", "fiction"], 1913]
//! adult:
//!   - ["Rights of Man", "Thomas Paine", 3742, 31, 95000, ["political", "non-fiction"], 1791]
//! ```

use std::path::Path;

use thiserror::Error;

use crate::types::CandidateBatch;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

/// Parse batch YAML text. An empty `label` in the document is replaced by
/// `default_label`.
pub fn parse_batch(
    default_label: &str,
    contents: &str,
) -> Result<CandidateBatch, serde_yml::Error> {
    let mut batch: CandidateBatch = serde_yml::from_str(contents)?;
    if batch.label.trim().is_empty() {
        batch.label = default_label.to_string();
    }
    Ok(batch)
}

/// Load a single batch file. The label defaults to the file stem.
pub fn load_batch(path: &Path) -> Result<CandidateBatch, BatchError> {
    let contents = std::fs::read_to_string(path).map_err(|e| BatchError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_batch(&stem, &contents).map_err(|e| BatchError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load every `.yaml`/`.yml` batch in a directory, sorted by file name.
///
/// A missing directory yields no batches.
pub fn load_batches(dir: &Path) -> Result<Vec<CandidateBatch>, BatchError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(BatchError::NotADirectory(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| BatchError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    entries.iter().map(|e| load_batch(&e.path())).collect()
}
