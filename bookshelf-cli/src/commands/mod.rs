pub(crate) mod expand;
pub(crate) mod slug;
pub(crate) mod stats;
pub(crate) mod validate;

use bookshelf_catalog::{CatalogPaths, Catalogs, load_catalogs};

use crate::CliError;
use crate::settings::Settings;

/// Load both collections from the configured data directory.
pub(crate) fn load_configured_catalogs(settings: &Settings) -> Result<Catalogs, CliError> {
    let paths = CatalogPaths::in_dir(&settings.data_dir);
    log::debug!(
        "Loading {} and {}",
        paths.children.display(),
        paths.adult.display()
    );
    Ok(load_catalogs(&paths)?)
}
