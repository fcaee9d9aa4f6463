use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_import::validate_catalogs;

use crate::CliError;
use crate::logger::log_blank;
use crate::settings::Settings;

use super::load_configured_catalogs;

/// Check both catalogs and fail if any errors are found.
pub(crate) fn run_validate(settings: &Settings) -> Result<(), CliError> {
    let catalogs = load_configured_catalogs(settings)?;
    let report = validate_catalogs(&catalogs);

    for issue in report.warnings() {
        log::warn!("{}", issue);
    }
    for issue in report.errors() {
        log::error!("{}", issue);
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    log_blank();
    log::info!(
        "Checked {} entries: {} error(s), {} warning(s)",
        report.entries_checked,
        errors,
        warnings
    );

    if errors > 0 {
        return Err(CliError::Validation(errors));
    }

    log::info!(
        "{} Catalogs are consistent",
        "\u{2714}".if_supports_color(Stdout, |t| t.green())
    );
    Ok(())
}
