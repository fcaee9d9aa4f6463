use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::{CandidateBatch, CatalogPaths, CollectionKind, load_batch, load_batches};
use bookshelf_import::{
    ExpandOptions, ExpandOutcome, LogProgress, MergeLog, TargetStatus, expand_catalogs,
};

use crate::CliError;
use crate::logger::log_blank;
use crate::settings::Settings;

/// Merge candidate batches into both catalogs.
pub(crate) fn run_expand(
    settings: &Settings,
    batch_files: Vec<PathBuf>,
    dry_run: bool,
    report: Option<PathBuf>,
) -> Result<(), CliError> {
    let batches = load_candidate_batches(settings, batch_files)?;
    if batches.is_empty() {
        log::warn!(
            "No candidate batches found in {}",
            settings.batches_dir.display()
        );
    }

    let paths = CatalogPaths::in_dir(&settings.data_dir);
    let options = ExpandOptions { dry_run };
    let outcome = expand_catalogs(&paths, &batches, &options, Some(&LogProgress))?;

    print_summary(settings, &outcome);

    if let Some(path) = report {
        MergeLog::from_outcome(&outcome)
            .write_to_file(&path, Some((&outcome, &settings.targets)))?;
        log::info!("Merge report written to {}", path.display());
    }

    Ok(())
}

fn load_candidate_batches(
    settings: &Settings,
    batch_files: Vec<PathBuf>,
) -> Result<Vec<CandidateBatch>, CliError> {
    if batch_files.is_empty() {
        return Ok(load_batches(&settings.batches_dir)?);
    }
    let mut batches = Vec::with_capacity(batch_files.len());
    for path in &batch_files {
        batches.push(load_batch(path)?);
    }
    Ok(batches)
}

fn print_summary(settings: &Settings, outcome: &ExpandOutcome) {
    log_blank();
    log::info!(
        "Existing: {} children, {} adult",
        outcome.children_before,
        outcome.adult_before
    );
    log::info!("Existing unique slugs: {}", outcome.unique_slugs_before);

    for batch in &outcome.batches {
        let stats = &batch.stats;
        log::info!(
            "  {}: {} children, {} adult added ({} skipped)",
            batch.label,
            stats.children_added,
            stats.adult_added,
            stats.total_skipped()
        );
    }

    log::info!(
        "New unique children: {}",
        outcome.added(CollectionKind::Children)
    );
    log::info!("New unique adult: {}", outcome.added(CollectionKind::Adult));
    log_blank();

    let children = outcome.after(CollectionKind::Children);
    let adult = outcome.after(CollectionKind::Adult);
    log::info!(
        "{}",
        format!("Final: {} children, {} adult", children, adult)
            .if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("Total: {}", children + adult);
    log_blank();

    if outcome.written {
        log::info!(
            "{} Catalogs written to {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            settings.data_dir.display()
        );
    } else {
        log::info!(
            "{}",
            "Dry run: catalogs not written".if_supports_color(Stdout, |t| t.dimmed())
        );
    }

    for kind in CollectionKind::ALL {
        let len = outcome.after(kind);
        let target = settings.targets.target(kind);
        match settings.targets.status(kind, len) {
            TargetStatus::Reached => log::info!(
                "{} {} target of {} reached",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                kind,
                target
            ),
            TargetStatus::Short { remaining } => log::warn!(
                "{} still needs {} more entries to reach {}",
                kind,
                remaining,
                target
            ),
        }
    }
}
