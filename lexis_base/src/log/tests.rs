use super::{formatting, get_digit, Message, Severity, SourceCodeDisplay};
use crate::source_file::{SourceFile, Span};

#[test]
fn test_get_digit() {
    assert_eq!(get_digit(0), 1);
    assert_eq!(get_digit(9), 1);
    assert_eq!(get_digit(10), 2);
    assert_eq!(get_digit(12345), 5);
}

#[test]
fn test_message() {
    formatting::set_colors_enabled(false);

    let message = Message::new(Severity::Warning, "found an unterminated string");
    assert_eq!(message.to_string(), "[warning]: found an unterminated string");
}

#[test]
fn test_source_code_display() {
    formatting::set_colors_enabled(false);

    let source_file = SourceFile::in_memory("<test>", "let a = 1;\nlet b = @;\nlet c = 3;\n");
    let span = Span::new(source_file, 19, 20).unwrap();
    assert_eq!(span.str(), "@");

    let rendered = SourceCodeDisplay::new(&span, Some("remove this")).to_string();
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines, vec![
        " --> <test>:2:9",
        "  ┃",
        "1 ┃ let a = 1;",
        "2 ┃ let b = @;",
        "  ┃         ^ help: remove this",
        "3 ┃ let c = 3;",
        "  ┃",
    ]);
}

#[test]
fn test_multiline_source_code_display() {
    formatting::set_colors_enabled(false);

    let source_file = SourceFile::in_memory("<test>", "a /* one\ntwo */ b");
    let span = Span::new(source_file, 2, 15).unwrap();

    let rendered = SourceCodeDisplay::new(&span, Some("here")).to_string();

    assert!(rendered.contains("--> <test>:1:3"));
    assert!(rendered.contains("1 ┃ a /* one"));
    assert!(rendered.contains("2 ┃ two */ b"));
    assert!(rendered.contains("= help: here"));
    assert!(!rendered.contains('^'));
}
