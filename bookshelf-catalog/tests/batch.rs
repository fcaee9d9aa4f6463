use bookshelf_catalog::{BatchError, CollectionKind, load_batch, load_batches, parse_batch};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const BATCH: &str = r#"
label: batch-3
children:
  - ["Ruth Fielding of the Red Mill", "Alice B. Emerson", 28001, 20, 35000, ["mystery", "fiction"], 1913]
  - ["Ruth Fielding at Snow Camp", "Alice B. Emerson", 28003, 20, 34000, ["adventure", "fiction"], 1913]
adult:
  - ["The Republic", "Plato", 1497, 10, 118000, ["philosophy"], -375]
"#;

#[test]
fn parse_candidate_tuples() {
    let batch = parse_batch("fallback", BATCH).unwrap();
    assert_eq!(batch.label, "batch-3");
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.candidates(CollectionKind::Children).len(), 2);

    let ruth = &batch.children[0];
    assert_eq!(ruth.title, "Ruth Fielding of the Red Mill");
    assert_eq!(ruth.author, "Alice B. Emerson");
    assert_eq!(ruth.external_id, 28001);
    assert_eq!(ruth.chapter_count, 20);
    assert_eq!(ruth.word_count, 35000);
    assert_eq!(ruth.genres, vec!["mystery", "fiction"]);

    assert_eq!(batch.adult[0].year_published, -375);
}

#[test]
fn missing_label_and_lists_default() {
    let batch = parse_batch("batch-2", "adult: []\n").unwrap();
    assert_eq!(batch.label, "batch-2");
    assert!(batch.children.is_empty());
    assert!(batch.is_empty());
}

#[test]
fn wrong_arity_is_rejected() {
    let yaml = r#"
children:
  - ["Heidi", "Johanna Spyri", 1448, 23]
"#;
    assert!(parse_batch("bad", yaml).is_err());
}

#[test]
fn wrong_field_type_is_rejected() {
    let yaml = r#"
children:
  - ["Heidi", "Johanna Spyri", "not-a-number", 23, 100000, ["classics"], 1881]
"#;
    assert!(parse_batch("bad", yaml).is_err());
}

#[test]
fn load_batch_uses_file_stem_as_label() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "002-oz.yaml", "children: []\n");

    let batch = load_batch(&tmp.path().join("002-oz.yaml")).unwrap();
    assert_eq!(batch.label, "002-oz");
}

#[test]
fn load_batches_sorted_by_file_name() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "b.yaml", "label: second\n");
    write_yaml(tmp.path(), "a.yml", "label: first\n");
    write_yaml(tmp.path(), "notes.txt", "ignored");

    let batches = load_batches(tmp.path()).unwrap();
    let labels: Vec<_> = batches.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["first", "second"]);
}

#[test]
fn missing_dir_returns_empty() {
    let tmp = TempDir::new().unwrap();
    let batches = load_batches(&tmp.path().join("nope")).unwrap();
    assert!(batches.is_empty());
}

#[test]
fn file_instead_of_dir_is_an_error() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "batch.yaml", "label: x\n");

    let err = load_batches(&tmp.path().join("batch.yaml")).unwrap_err();
    assert!(matches!(err, BatchError::NotADirectory(_)));
}

#[test]
fn parse_error_reports_path() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "broken.yaml", "children: [[[\n");

    let err = load_batch(&tmp.path().join("broken.yaml")).unwrap_err();
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn shipped_sample_batches_parse() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../catalog/batches");
    let batches = load_batches(&dir).unwrap();
    assert!(!batches.is_empty());
    assert_eq!(batches[0].label, "fairy-books");
    assert!(batches.iter().all(|b| !b.is_empty()));
}
