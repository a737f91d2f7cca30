// Integration tests for dataset loading from disk

use std::io::Write;

use hanzi_decomp::{DataLoader, Explorer, LoadError, StrokeCount, SAMPLE_DATASET};

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_json_lines_file() {
    let file = write_temp(SAMPLE_DATASET);
    let table = DataLoader::load(file.path()).unwrap();

    assert_eq!(table.len(), SAMPLE_DATASET.lines().count());
    assert_eq!(table.strokes("森"), StrokeCount::Known(12));
}

#[test]
fn test_load_json_array_file() {
    let file = write_temp(
        r#"[
  {"character": "日", "strokes": 4, "decomposition": ""},
  {"character": "明", "strokes": 8, "decomposition": "⿰日月", "pinyin": "míng"},
  {"definition": "no key"}
]"#,
    );
    let table = DataLoader::load(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.skipped(), 1);
    assert_eq!(table.get("明").unwrap().display_pinyin(), "míng");
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = DataLoader::load(dir.path().join("strokes.txt"));
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn test_garbage_file_is_fatal() {
    let file = write_temp("this is not json\nneither is this\n");
    let result = Explorer::load(file.path());
    assert!(matches!(result, Err(LoadError::Empty { skipped: 2 })));
}

#[test]
fn test_malformed_lines_counted() {
    let file = write_temp(
        "{\"character\":\"木\",\"strokes\":4}\n{broken\n{\"character\":\"林\",\"strokes\":8,\"decomposition\":\"⿰木木\"}\n",
    );
    let explorer = Explorer::load(file.path()).unwrap();
    let stats = explorer.stats(1);

    assert_eq!(stats.records, 2);
    assert_eq!(stats.skipped, 1);
}
