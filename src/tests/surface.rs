use super::{EditingSurface, LineBuffer};
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_round_trip_keeps_trailing_newline() {
    assert_eq!(LineBuffer::from_text("a\nb\n").text(), "a\nb\n");
    assert_eq!(LineBuffer::from_text("a\nb").text(), "a\nb");
}

#[test]
fn test_crlf_line_endings_are_preserved() {
    let mut buffer = LineBuffer::from_text("# T\r\nold\r\ntail\r\n");
    assert_eq!(buffer.line_ending(), "\r\n");
    assert_eq!(buffer.text(), "# T\r\nold\r\ntail\r\n");

    buffer.replace_lines(1, 2, "new\none\n");
    assert_eq!(buffer.lines(), &["# T", "new", "one", "tail"]);
    assert_eq!(buffer.text(), "# T\r\nnew\r\none\r\ntail\r\n");
}

#[test]
fn test_replace_is_byte_exact() {
    let mut buffer = LineBuffer::from_text("# A\n  keep indent\n\n# B\n");
    buffer.replace_lines(0, 3, "# A\n    - [ ] x  \n\n");
    assert_eq!(buffer.text(), "# A\n    - [ ] x  \n\n# B\n");
}

#[test]
fn test_replace_middle_range() {
    let mut buffer = LineBuffer::from_text("A\nB\nC\nD\n");
    buffer.replace_lines(1, 3, "X\nY\nZ\n");
    assert_eq!(buffer.text(), "A\nX\nY\nZ\nD\n");
}

#[test]
fn test_replace_clamps_to_end() {
    let mut buffer = LineBuffer::from_text("A\nB");
    buffer.replace_lines(1, 10, "Z\n");
    assert_eq!(buffer.lines(), &["A".to_string(), "Z".to_string()]);
    assert_eq!(buffer.text(), "A\nZ\n");
}

#[test]
fn test_load_and_save() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "# Title\nbody\n").unwrap();

    let mut buffer = LineBuffer::load(file.path()).unwrap();
    buffer.replace_lines(1, 2, "new body\n");
    buffer.save(file.path()).unwrap();

    assert_eq!(fs::read_to_string(file.path()).unwrap(), "# Title\nnew body\n");
}
