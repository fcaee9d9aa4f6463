use bookshelf_catalog::types::*;
use bookshelf_import::*;

fn candidate(title: &str, author: &str, id: u64) -> CandidateRecord {
    CandidateRecord {
        title: title.to_string(),
        author: author.to_string(),
        external_id: id,
        chapter_count: 10,
        word_count: 20000,
        genres: vec!["fiction".to_string()],
        year_published: 1900,
    }
}

fn snow_queen() -> CandidateRecord {
    CandidateRecord {
        title: "The Snow Queen".to_string(),
        author: "Hans Christian Andersen".to_string(),
        external_id: 62882,
        chapter_count: 7,
        word_count: 12000,
        genres: vec!["fairy-tales".to_string()],
        year_published: 1844,
    }
}

fn existing_catalogs() -> Catalogs {
    Catalogs::new(
        vec![build_entry(&snow_queen(), CollectionKind::Children).into()],
        vec![
            build_entry(
                &candidate("The Time Machine", "H. G. Wells", 35),
                CollectionKind::Adult,
            )
            .into(),
        ],
    )
}

fn batch(children: Vec<CandidateRecord>, adult: Vec<CandidateRecord>) -> CandidateBatch {
    CandidateBatch {
        label: "test".to_string(),
        children,
        adult,
    }
}

#[test]
fn build_entry_copies_fields_and_stamps_batch_tags() {
    let entry = build_entry(&snow_queen(), CollectionKind::Children);
    assert_eq!(entry.slug, "the-snow-queen");
    assert_eq!(entry.title, "The Snow Queen");
    assert_eq!(entry.author, "Hans Christian Andersen");
    assert_eq!(entry.external_id, 62882);
    assert_eq!(entry.age_group, AgeGroup::Children);
    assert_eq!(entry.chapter_count, 7);
    assert_eq!(entry.word_count, 12000);
    assert_eq!(entry.original_language, "en");
    assert_eq!(entry.genres, vec!["fairy-tales"]);
    assert_eq!(entry.year_published, Some(1844));

    let adult = build_entry(&snow_queen(), CollectionKind::Adult);
    assert_eq!(adult.age_group, AgeGroup::Adult);
}

#[test]
fn resubmitting_existing_title_is_rejected() {
    let mut catalogs = existing_catalogs();
    let result = merge_candidates(&mut catalogs, &batch(vec![snow_queen()], vec![]));

    assert_eq!(result.stats.total_added(), 0);
    assert_eq!(result.stats.children_duplicates, 1);
    assert_eq!(catalogs.children.len(), 1);
    assert_eq!(
        result.outcomes[0],
        CandidateOutcome::Duplicate {
            collection: CollectionKind::Children,
            slug: "the-snow-queen".to_string(),
            title: "The Snow Queen".to_string(),
            held_by: CollectionKind::Children,
        }
    );
}

#[test]
fn new_candidates_append_after_existing_in_input_order() {
    let mut catalogs = existing_catalogs();
    let original = catalogs.clone();
    let result = merge_candidates(
        &mut catalogs,
        &batch(
            vec![
                candidate("Ozma of Oz", "L. Frank Baum", 486),
                candidate("The Road to Oz", "L. Frank Baum", 485),
            ],
            vec![candidate("Moby Dick", "Herman Melville", 2701)],
        ),
    );

    assert_eq!(result.stats.children_added, 2);
    assert_eq!(result.stats.adult_added, 1);
    assert_eq!(result.stats.children_before, 1);
    assert_eq!(result.stats.adult_before, 1);
    assert_eq!(result.stats.unique_slugs_before, 2);

    let slugs: Vec<_> = catalogs.children.iter().filter_map(|e| e.slug()).collect();
    assert_eq!(slugs, vec!["the-snow-queen", "ozma-of-oz", "the-road-to-oz"]);
    assert_eq!(catalogs.adult[1].slug(), Some("moby-dick"));
    assert_eq!(catalogs.adult[1].str_field("ageGroup"), Some("adult"));

    // No-loss: originals are untouched prefixes.
    assert_eq!(catalogs.children[..1], original.children[..]);
    assert_eq!(catalogs.adult[..1], original.adult[..]);
}

#[test]
fn adult_candidate_colliding_with_children_entry_is_excluded() {
    let mut catalogs = existing_catalogs();
    let result = merge_candidates(&mut catalogs, &batch(vec![], vec![snow_queen()]));

    assert_eq!(result.stats.adult_duplicates, 1);
    assert_eq!(catalogs.adult.len(), 1);
    assert!(matches!(
        result.outcomes[0],
        CandidateOutcome::Duplicate {
            collection: CollectionKind::Adult,
            held_by: CollectionKind::Children,
            ..
        }
    ));
}

#[test]
fn children_candidate_colliding_with_adult_entry_is_excluded() {
    let mut catalogs = existing_catalogs();
    let result = merge_candidates(
        &mut catalogs,
        &batch(vec![candidate("The Time Machine", "H. G. Wells", 35)], vec![]),
    );

    assert_eq!(result.stats.children_duplicates, 1);
    assert_eq!(catalogs.children.len(), 1);
}

#[test]
fn first_seen_wins_within_and_across_candidate_lists() {
    let mut catalogs = Catalogs::default();
    let result = merge_candidates(
        &mut catalogs,
        &batch(
            vec![
                candidate("Heidi", "Johanna Spyri", 1448),
                candidate("HEIDI!", "Someone Else", 9999),
            ],
            vec![candidate("Heidi", "Johanna Spyri", 1448)],
        ),
    );

    assert_eq!(catalogs.children.len(), 1);
    assert_eq!(catalogs.children[0].str_field("author"), Some("Johanna Spyri"));
    assert!(catalogs.adult.is_empty());
    assert_eq!(result.stats.children_duplicates, 1);
    assert_eq!(result.stats.adult_duplicates, 1);
}

#[test]
fn reused_external_ids_are_tolerated() {
    let mut catalogs = Catalogs::default();
    merge_candidates(
        &mut catalogs,
        &batch(
            vec![
                candidate("The Ugly Duckling", "Hans Christian Andersen", 27200),
                candidate("Thumbelina", "Hans Christian Andersen", 27200),
            ],
            vec![],
        ),
    );
    assert_eq!(catalogs.children.len(), 2);
}

#[test]
fn empty_adult_batch_leaves_adult_unchanged() {
    let mut catalogs = existing_catalogs();
    let result = merge_candidates(
        &mut catalogs,
        &batch(vec![candidate("Heidi", "Johanna Spyri", 1448)], vec![]),
    );

    assert_eq!(result.stats.adult_added, 0);
    assert_eq!(catalogs.adult.len(), 1);
    assert_eq!(catalogs.children.len(), 2);
}

#[test]
fn rerun_is_idempotent() {
    let mut catalogs = existing_catalogs();
    let b = batch(
        vec![candidate("Heidi", "Johanna Spyri", 1448)],
        vec![candidate("Moby Dick", "Herman Melville", 2701)],
    );

    merge_candidates(&mut catalogs, &b);
    let after_first = catalogs.clone();
    let second = merge_candidates(&mut catalogs, &b);

    assert_eq!(second.stats.total_added(), 0);
    assert_eq!(second.stats.total_skipped(), 2);
    assert_eq!(catalogs, after_first);
}

#[test]
fn slugs_unique_across_union_after_merge() {
    let mut catalogs = existing_catalogs();
    merge_candidates(
        &mut catalogs,
        &batch(
            vec![
                candidate("Jack's Ward", "Horatio Alger", 1),
                candidate("Jacks Ward", "Horatio Alger", 2),
                candidate("The Snow-Queen", "Anon", 3),
            ],
            vec![
                candidate("Jack\u{2019}s Ward", "Horatio Alger", 4),
                candidate("Moby Dick", "Herman Melville", 2701),
            ],
        ),
    );

    let mut slugs: Vec<_> = catalogs.iter().filter_map(|(_, e)| e.slug()).collect();
    let total = slugs.len();
    slugs.sort();
    slugs.dedup();
    assert_eq!(slugs.len(), total);
    assert_eq!(total, 4);
}

#[test]
fn empty_slug_is_claimed_by_the_first_candidate() {
    let mut catalogs = Catalogs::default();
    let result = merge_candidates(
        &mut catalogs,
        &batch(
            vec![candidate("???", "Anonymous", 1)],
            vec![candidate("!!!", "Anonymous", 2)],
        ),
    );

    assert_eq!(catalogs.children.len(), 1);
    assert_eq!(catalogs.children[0].slug(), Some(""));
    assert!(catalogs.adult.is_empty());
    assert_eq!(result.stats.children_added, 1);
    assert_eq!(
        result.outcomes[1],
        CandidateOutcome::Duplicate {
            collection: CollectionKind::Adult,
            slug: String::new(),
            title: "!!!".to_string(),
            held_by: CollectionKind::Children,
        }
    );
}

#[test]
fn existing_entries_of_any_shape_pass_through() {
    let odd: StoredEntry = serde_json::json!({
        "title": "Heidi",
        "slug": "heidi",
        "chapterCount": null,
        "yearPublished": null
    })
    .into();
    let slugless: StoredEntry = serde_json::json!(["not", "an", "object"]).into();
    let mut catalogs = Catalogs::new(vec![odd.clone(), slugless.clone()], vec![]);

    let result = merge_candidates(
        &mut catalogs,
        &batch(
            vec![
                candidate("Heidi", "Johanna Spyri", 1448),
                candidate("Pinocchio", "Carlo Collodi", 500),
            ],
            vec![],
        ),
    );

    assert_eq!(result.stats.children_duplicates, 1);
    assert_eq!(result.stats.children_added, 1);
    assert_eq!(catalogs.children[..2], [odd, slugless]);
    assert_eq!(catalogs.children[2].slug(), Some("pinocchio"));
}

#[test]
fn shared_index_spans_batches() {
    let mut catalogs = Catalogs::default();
    let mut index = SlugIndex::from_catalogs(&catalogs);

    let first = batch(vec![candidate("Heidi", "Johanna Spyri", 1448)], vec![]);
    let second = batch(vec![], vec![candidate("Heidi", "Johanna Spyri", 1448)]);

    merge_batch(&mut catalogs, &first, &mut index, None);
    let result = merge_batch(&mut catalogs, &second, &mut index, Some(&SilentProgress));

    assert_eq!(result.stats.unique_slugs_before, 1);
    assert_eq!(result.stats.adult_duplicates, 1);
    assert_eq!(index.holder("heidi"), Some(CollectionKind::Children));
}

#[test]
fn index_seeded_from_both_collections() {
    let index = SlugIndex::from_catalogs(&existing_catalogs());
    assert_eq!(index.len(), 2);
    assert_eq!(
        index.holder("the-time-machine"),
        Some(CollectionKind::Adult)
    );
    assert!(index.contains("the-snow-queen"));
    assert!(!index.contains("moby-dick"));
}
