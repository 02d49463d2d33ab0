use super::{Location, SourceFile, Span};

#[test]
fn test_line_ranges() {
    let text = "Hello\nworld\r\n!\rtes";
    let ranges = super::line_ranges(text);
    assert_eq!(ranges, vec![0..6, 6..13, 13..15, 15..18]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "test file";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
}

#[test]
fn test_empty_mapped_file() {
    let source_file = SourceFile::temp("").unwrap();
    assert_eq!(source_file.content(), "");
    assert_eq!(source_file.line_number(), 1);
}

#[test]
fn test_read_rejects_invalid_utf8() {
    let bytes: &[u8] = &[b'a', 0xFF, b'b'];
    let result = SourceFile::read(bytes, "<bytes>");
    assert!(matches!(result, Err(super::Error::Utf8Error(_))));
}

#[test]
fn test_get_location() {
    let source_file = SourceFile::in_memory("<test>", "ab\ncé\nd");

    assert_eq!(
        source_file.get_location(0),
        Some(Location { line: 1, column: 1 })
    );
    assert_eq!(
        source_file.get_location(3),
        Some(Location { line: 2, column: 1 })
    );
    // `é` is two bytes wide, `\n` after it sits on column 3
    assert_eq!(
        source_file.get_location(6),
        Some(Location { line: 2, column: 3 })
    );
    // splits `é`
    assert_eq!(source_file.get_location(5), None);
    // end of file
    assert_eq!(
        source_file.get_location(8),
        Some(Location { line: 3, column: 2 })
    );
    assert_eq!(source_file.get_location(9), None);
}

#[test]
fn test_get_line() {
    let source_file = SourceFile::in_memory("<test>", "first\nsecond");

    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(1), Some("first\n"));
    assert_eq!(source_file.get_line(2), Some("second"));
    assert_eq!(source_file.get_line(3), None);
}

#[test]
fn test_span_validation() {
    let source_file = SourceFile::in_memory("<test>", "é!");

    assert!(Span::new(source_file.clone(), 0, 2).is_some());
    assert!(Span::new(source_file.clone(), 0, 1).is_none());
    assert!(Span::new(source_file.clone(), 2, 1).is_none());
    assert!(Span::new(source_file.clone(), 0, 4).is_none());

    let span = Span::new(source_file, 2, 3).unwrap();
    assert_eq!(span.str(), "!");
}

#[test]
fn test_cursor() {
    let source_file = SourceFile::in_memory("<test>", "/*é*/");
    let mut cursor = source_file.cursor();

    assert!(cursor.starts_with("/*"));
    assert_eq!(cursor.next(), Some((0, '/')));
    assert_eq!(cursor.next(), Some((1, '*')));

    cursor.eat_while(|character| character != '*');
    assert_eq!(cursor.offset(), 4);
    assert_eq!(cursor.span_from(2).str(), "é");

    assert!(cursor.starts_with("*/"));
    cursor.eat_while(|_| true);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.next(), None);
}
