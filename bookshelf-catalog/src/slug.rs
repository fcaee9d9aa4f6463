//! Title → slug normalization.
//!
//! Slugs are the de-duplication key across both collections. Existing
//! documents were keyed with this exact mapping.

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 80;

/// Derive the catalog slug for a title.
///
/// Lowercases, drops apostrophes without leaving a separator, collapses every
/// run of characters outside `[a-z0-9]` into one hyphen, trims hyphens from
/// both ends and truncates to [`MAX_SLUG_LEN`] characters. Degenerate titles
/// (empty, all punctuation) produce an empty string.
///
/// # Examples
///
/// ```
/// use bookshelf_catalog::slug::slugify;
///
/// assert_eq!(slugify("The Snow Queen"), "the-snow-queen");
/// assert_eq!(slugify("Jack's Ward"), "jacks-ward");
/// assert_eq!(slugify("Tik-Tok of Oz"), "tik-tok-of-oz");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if is_apostrophe(ch) {
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            // Leading runs never emit a hyphen; trailing runs never get flushed.
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    // Only ASCII survives the loop, so byte length == char length.
    slug.truncate(MAX_SLUG_LEN);
    slug
}

/// Return `true` when `value` has the shape [`slugify`] produces for
/// ordinary titles: non-empty, `[a-z0-9]` segments joined by single hyphens,
/// no longer than [`MAX_SLUG_LEN`].
pub fn is_canonical_slug(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_SLUG_LEN
        && value.split('-').all(|seg| {
            !seg.is_empty()
                && seg
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2018}' | '\u{2019}')
}
