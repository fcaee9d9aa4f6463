use bookshelf_catalog::slug::{MAX_SLUG_LEN, is_canonical_slug, slugify};

#[test]
fn simple_title() {
    assert_eq!(slugify("The Snow Queen"), "the-snow-queen");
}

#[test]
fn nothing_to_strip() {
    assert_eq!(slugify("Moby Dick"), "moby-dick");
}

#[test]
fn straight_apostrophe_removed_without_hyphen() {
    assert_eq!(slugify("Jack's Ward"), "jacks-ward");
}

#[test]
fn curly_apostrophes_removed_without_hyphen() {
    assert_eq!(slugify("Jack\u{2019}s Ward"), "jacks-ward");
    assert_eq!(slugify("\u{2018}Twas the Night"), "twas-the-night");
}

#[test]
fn punctuation_runs_collapse() {
    assert_eq!(
        slugify("Twenty Thousand Leagues: Under the Sea!!"),
        "twenty-thousand-leagues-under-the-sea"
    );
    assert_eq!(slugify("Tik-Tok of Oz"), "tik-tok-of-oz");
    assert_eq!(slugify("Alice -- in -- Wonderland"), "alice-in-wonderland");
}

#[test]
fn digits_are_kept() {
    assert_eq!(
        slugify("In Darkest Africa Volume 1"),
        "in-darkest-africa-volume-1"
    );
}

#[test]
fn non_ascii_letters_become_separators() {
    assert_eq!(slugify("Les Misérables"), "les-mis-rables");
}

#[test]
fn long_titles_truncate_to_limit() {
    let title = "A Very Long Title ".repeat(10);
    let slug = slugify(&title);
    assert_eq!(slug.len(), MAX_SLUG_LEN);
    assert!(slug.starts_with("a-very-long-title-a-very"));
}

#[test]
fn degenerate_titles_yield_empty() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("!!! ???"), "");
    assert_eq!(slugify("''"), "");
}

#[test]
fn deterministic() {
    let title = "The Adventures of Tom Sawyer";
    assert_eq!(slugify(title), slugify(title));
}

#[test]
fn slugify_output_is_canonical_for_ordinary_titles() {
    for title in [
        "The Blue Fairy Book",
        "Mother Goose in Prose",
        "Grimm's Fairy Tales",
        "The Life and Adventures of Santa Claus",
    ] {
        assert!(is_canonical_slug(&slugify(title)), "{title}");
    }
}
