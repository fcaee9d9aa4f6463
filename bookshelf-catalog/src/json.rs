//! JSON I/O for the persisted collection documents.
//!
//! Each document is a top-level array of entry objects, written
//! pretty-printed (two-space indent) with a trailing newline. Entries are
//! held as [`StoredEntry`] values so a load/save cycle reproduces them.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Catalogs, CollectionKind, StoredEntry};

#[derive(Debug, Error)]
pub enum CatalogIoError {
    #[error("I/O error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("JSON encode error for {path}: {source}")]
    Encode {
        path: String,
        source: serde_json::Error,
    },
}

/// Locations of the two collection documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub children: PathBuf,
    pub adult: PathBuf,
}

impl CatalogPaths {
    /// Standard file names inside a data directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            children: dir.join(CollectionKind::Children.file_name()),
            adult: dir.join(CollectionKind::Adult.file_name()),
        }
    }

    pub fn path(&self, kind: CollectionKind) -> &Path {
        match kind {
            CollectionKind::Children => &self.children,
            CollectionKind::Adult => &self.adult,
        }
    }
}

/// Read and parse one collection document.
///
/// Only the outer array is checked; entries of any shape are accepted.
pub fn load_collection(path: &Path) -> Result<Vec<StoredEntry>, CatalogIoError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogIoError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| CatalogIoError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load both collections. Fails if either one cannot be read or parsed.
pub fn load_catalogs(paths: &CatalogPaths) -> Result<Catalogs, CatalogIoError> {
    let children = load_collection(&paths.children)?;
    let adult = load_collection(&paths.adult)?;
    Ok(Catalogs::new(children, adult))
}

/// Render a collection the way it is stored on disk.
pub fn to_pretty_json(entries: &[StoredEntry]) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(entries)?;
    out.push('\n');
    Ok(out)
}

/// Write a collection document, replacing any existing file.
///
/// Written atomically: a temporary sibling is renamed into place.
pub fn write_collection(path: &Path, entries: &[StoredEntry]) -> Result<(), CatalogIoError> {
    let tmp = stage_collection(path, entries)?;
    commit(&tmp, path)
}

/// Write both collections.
///
/// Both temporary files are written before either document is replaced; a
/// failure while rendering or staging leaves both documents untouched.
pub fn write_catalogs(paths: &CatalogPaths, catalogs: &Catalogs) -> Result<(), CatalogIoError> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(CollectionKind::ALL.len());
    for kind in CollectionKind::ALL {
        let path = paths.path(kind);
        match stage_collection(path, catalogs.collection(kind)) {
            Ok(tmp) => staged.push((tmp, path)),
            Err(e) => {
                for (tmp, _) in &staged {
                    let _ = std::fs::remove_file(tmp);
                }
                return Err(e);
            }
        }
    }
    for (tmp, path) in &staged {
        commit(tmp, path)?;
    }
    Ok(())
}

fn write_error(path: &Path) -> impl Fn(std::io::Error) -> CatalogIoError + '_ {
    move |e| CatalogIoError::Write {
        path: path.display().to_string(),
        source: e,
    }
}

/// Render `entries` into the temporary sibling of `path` and return its path.
fn stage_collection(path: &Path, entries: &[StoredEntry]) -> Result<PathBuf, CatalogIoError> {
    let rendered = to_pretty_json(entries).map_err(|e| CatalogIoError::Encode {
        path: path.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error(path))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, rendered).map_err(write_error(path))?;
    Ok(tmp)
}

fn commit(tmp: &Path, path: &Path) -> Result<(), CatalogIoError> {
    std::fs::rename(tmp, path).map_err(write_error(path))
}
