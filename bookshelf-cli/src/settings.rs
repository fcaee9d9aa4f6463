//! Settings file loading and path resolution.
//!
//! The settings file is optional TOML:
//! ```toml
//! [paths]
//! data_dir = "src/lib/audiobooks/data"
//! batches_dir = "catalog/batches"
//!
//! [targets]
//! children = 1000
//! adult = 500
//! ```
//!
//! Lookup order: `--config`, `./bookshelf.toml`, `~/.config/bookshelf/config.toml`.
//! Each value resolves as CLI flag > settings file > built-in default.

use std::path::{Path, PathBuf};

use bookshelf_import::Targets;
use serde::Deserialize;

use crate::CliError;

/// Default location of the collection documents, relative to the working directory.
pub(crate) const DEFAULT_DATA_DIR: &str = "src/lib/audiobooks/data";

/// Default location of candidate batch files.
pub(crate) const DEFAULT_BATCHES_DIR: &str = "catalog/batches";

const LOCAL_SETTINGS_FILE: &str = "bookshelf.toml";

/// TOML settings file format.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    paths: PathSettings,
    #[serde(default)]
    targets: TargetSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PathSettings {
    data_dir: Option<PathBuf>,
    batches_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetSettings {
    children: Option<usize>,
    adult: Option<usize>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub data_dir: PathBuf,
    pub batches_dir: PathBuf,
    pub targets: Targets,
    /// Settings file the values came from, if any.
    pub source: Option<PathBuf>,
}

/// Per-user settings path: `~/.config/bookshelf/config.toml`.
pub(crate) fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bookshelf").join("config.toml"))
}

/// Load and resolve settings.
///
/// An explicit `--config` path must exist; the implicit locations are
/// skipped when absent.
pub(crate) fn load_settings(
    explicit: Option<&Path>,
    data_dir_override: Option<PathBuf>,
) -> Result<Settings, CliError> {
    let source = match explicit {
        Some(path) if !path.exists() => {
            return Err(CliError::config(format!(
                "settings file not found: {}",
                path.display()
            )));
        }
        Some(path) => Some(path.to_path_buf()),
        None => [Some(PathBuf::from(LOCAL_SETTINGS_FILE)), user_settings_path()]
            .into_iter()
            .flatten()
            .find(|p| p.is_file()),
    };

    let file = match &source {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                CliError::config(format!("failed to read {}: {}", path.display(), e))
            })?;
            parse_settings(&contents)
                .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))?
        }
        None => SettingsFile::default(),
    };

    if let Some(path) = &source {
        log::debug!("Using settings from {}", path.display());
    }

    Ok(resolve(file, data_dir_override, source))
}

fn parse_settings(contents: &str) -> Result<SettingsFile, toml::de::Error> {
    toml::from_str(contents)
}

fn resolve(
    file: SettingsFile,
    data_dir_override: Option<PathBuf>,
    source: Option<PathBuf>,
) -> Settings {
    let defaults = Targets::default();
    Settings {
        data_dir: data_dir_override
            .or(file.paths.data_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        batches_dir: file
            .paths
            .batches_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BATCHES_DIR)),
        targets: Targets {
            children: file.targets.children.unwrap_or(defaults.children),
            adult: file.targets.adult.unwrap_or(defaults.adult),
        },
        source,
    }
}
