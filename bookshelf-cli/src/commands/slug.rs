use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bookshelf_catalog::slugify;

/// Print the slug for each title.
pub(crate) fn run_slug(titles: &[String]) {
    for title in titles {
        let slug = slugify(title);
        if slug.is_empty() {
            log::warn!("\"{}\" normalizes to an empty slug", title);
        } else {
            log::info!(
                "{}  {}",
                slug.if_supports_color(Stdout, |t| t.cyan()),
                title
            );
        }
    }
}
