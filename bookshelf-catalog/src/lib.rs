//! Audiobook catalog data model, slug normalization, and file I/O.
//!
//! This crate owns the on-disk shapes: the JSON collection documents that
//! downstream readers consume and the YAML candidate batches that feed the
//! merge in `bookshelf-import`.

pub mod batch;
pub mod json;
pub mod slug;
pub mod types;

pub use batch::{BatchError, load_batch, load_batches, parse_batch};
pub use json::{
    CatalogIoError, CatalogPaths, load_catalogs, load_collection, to_pretty_json, write_catalogs,
    write_collection,
};
pub use slug::{MAX_SLUG_LEN, is_canonical_slug, slugify};
pub use types::*;
