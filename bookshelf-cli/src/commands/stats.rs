use std::collections::{HashMap, HashSet};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::{Catalogs, CollectionKind};

use crate::CliError;
use crate::logger::log_blank;
use crate::settings::Settings;

use super::load_configured_catalogs;

pub(crate) fn run_stats(settings: &Settings, genre_limit: usize) -> Result<(), CliError> {
    let catalogs = load_configured_catalogs(settings)?;

    log::info!(
        "{}",
        "Audiobook Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Data dir: {}", settings.data_dir.display());
    if let Some(source) = &settings.source {
        log::info!("  Settings: {}", source.display());
    }
    log_blank();

    for kind in CollectionKind::ALL {
        let len = catalogs.collection(kind).len();
        log::info!(
            "  {:<10} {:>6} / {:<6} {}",
            kind.as_str(),
            len,
            settings.targets.target(kind),
            settings.targets.status(kind, len),
        );
    }
    log::info!("  {:<10} {:>6}", "total", catalogs.total_len());

    let authors: HashSet<&str> = catalogs
        .iter()
        .filter_map(|(_, e)| e.str_field("author"))
        .collect();
    log::info!("  {:<10} {:>6}", "authors", authors.len());

    let genres = top_genres(&catalogs, genre_limit);
    if !genres.is_empty() {
        log_blank();
        log::info!("  Top genres:");
        for (genre, count) in genres {
            log::info!("    {:<20} {:>6}", genre, count);
        }
    }

    Ok(())
}

/// Most frequent genre tags across both collections, ties broken by name.
fn top_genres(catalogs: &Catalogs, limit: usize) -> Vec<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (_, entry) in catalogs.iter() {
        for genre in entry.genres() {
            *counts.entry(genre).or_default() += 1;
        }
    }
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    sorted.truncate(limit);
    sorted
}
