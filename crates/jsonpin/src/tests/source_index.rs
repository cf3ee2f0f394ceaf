use std::sync::Arc;

use crate::{DEFAULT_TAB_SIZE, LineAndColumn, LineAndIndex, Location, Source};

#[test]
fn line_and_start_index_boundaries() {
    let source = Source::new("index.json", "ab\ncd\n\nx");
    let cases = [
        (0, 0, 0),
        (2, 0, 0),
        (3, 1, 3),
        (5, 1, 3),
        (6, 2, 6),
        (7, 3, 7),
        (100, 3, 7),
    ];
    for (offset, line, index) in cases {
        assert_eq!(
            source.get_line_and_start_index(offset),
            LineAndIndex { line, index },
            "offset {offset}"
        );
    }
}

#[test]
fn columns_count_characters_not_bytes() {
    // é is 2 bytes, ✓ is 3; the x behind them sits at column 3.
    let source = Source::new("utf8.json", "é✓x");
    assert_eq!(
        source.get_line_and_column(5, DEFAULT_TAB_SIZE),
        LineAndColumn { line: 1, column: 3 }
    );
}

#[test]
fn tab_stops() {
    let source = Source::new("tabs.json", "\tX\tY");
    assert_eq!(source.get_line_and_column(0, DEFAULT_TAB_SIZE).column, 1);
    assert_eq!(source.get_line_and_column(1, DEFAULT_TAB_SIZE).column, 9);
    assert_eq!(source.get_line_and_column(2, DEFAULT_TAB_SIZE).column, 10);
    assert_eq!(source.get_line_and_column(3, DEFAULT_TAB_SIZE).column, 17);
    assert_eq!(source.get_line_and_column(1, 4).column, 5);
}

#[test]
fn crlf_lines() {
    let source = Source::new("crlf.json", "a\r\nb");
    assert_eq!(
        source.get_line_and_start_index(3),
        LineAndIndex { line: 1, index: 3 }
    );
    assert_eq!(
        source.get_line_and_column(3, DEFAULT_TAB_SIZE),
        LineAndColumn { line: 2, column: 1 }
    );
}

#[test]
fn offsets_past_the_end_resolve_to_the_last_line() {
    let source = Source::new("end.json", "a\nbc");
    assert_eq!(
        source.get_line_and_column(100, DEFAULT_TAB_SIZE),
        LineAndColumn { line: 2, column: 3 }
    );
}

#[test]
fn default_source_is_absent() {
    let source = Source::default();
    assert!(!source.has_contents());
    assert!(source.is_empty());
    assert_eq!(source.file_name(), "");
    assert_eq!(
        source.get_line_and_column(0, DEFAULT_TAB_SIZE),
        LineAndColumn { line: 1, column: 1 }
    );
}

#[test]
fn unknown_location_renders_zeroes() {
    let location = Location::default();
    assert_eq!(location.to_string(), "<unknown>:0:0");
    assert_eq!(
        location.get_line_and_column(DEFAULT_TAB_SIZE),
        LineAndColumn::default()
    );
    assert_eq!(location.get_line_and_start_index(), LineAndIndex::default());
}

#[test]
fn location_display_uses_file_name() {
    let source = Source::new("display.json", "x\ny");
    assert_eq!(Location::new(&source, 2).to_string(), "display.json:2:1");
}

#[test]
fn shared_contents_are_aliased_not_copied() {
    let bytes: Arc<[u8]> = Arc::from(b"[1, 2]".to_vec());
    let source = Source::from_shared("shared.json", Arc::clone(&bytes));
    assert_eq!(source.contents(), &bytes[..]);
    assert_eq!(Arc::strong_count(&bytes), 2);
}

#[test]
fn load_file_reads_contents() {
    let path = std::env::temp_dir().join("jsonpin_load_file_test.json");
    std::fs::write(&path, "{\"ok\": true}").unwrap();
    let source = Source::load_file(&path).unwrap();
    assert!(source.has_contents());
    assert_eq!(source.file_name(), path.display().to_string());
    assert_eq!(source.len(), 12);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn load_file_missing_reports_path() {
    let error = Source::load_file("/definitely/not/here.json").unwrap_err();
    assert_eq!(error.path(), "/definitely/not/here.json");
    assert!(error.to_string().contains("/definitely/not/here.json"));
}
