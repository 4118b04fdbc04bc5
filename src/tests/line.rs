use super::{Checkbox, LineKind};

#[test]
fn test_header_depth_counts_markers() {
    assert_eq!(LineKind::classify("# Title"), LineKind::Header(1));
    assert_eq!(LineKind::classify("## `complete`"), LineKind::Header(2));
    assert_eq!(LineKind::classify("###\tTabbed"), LineKind::Header(3));
    assert_eq!(LineKind::classify("#"), LineKind::Header(1));
}

#[test]
fn test_bare_tag_is_not_a_header() {
    assert_eq!(LineKind::classify("#wip"), LineKind::Other);
    assert_eq!(LineKind::classify("##nospace"), LineKind::Other);
    assert_eq!(LineKind::classify(" # indented"), LineKind::Other);
}

#[test]
fn test_checkbox_split_around_marker() {
    assert_eq!(
        LineKind::classify("    - [x] shipped it"),
        LineKind::CheckedItem(Checkbox {
            prefix: "    - [x]",
            text: "shipped it",
        })
    );
    assert_eq!(
        LineKind::classify("- [ ] write tests"),
        LineKind::UncheckedItem(Checkbox {
            prefix: "- [ ]",
            text: "write tests",
        })
    );
}

#[test]
fn test_empty_checkbox_has_empty_text() {
    match LineKind::classify("- [ ]") {
        LineKind::UncheckedItem(item) => assert_eq!(item.text, ""),
        other => panic!("expected unchecked item, got {other:?}"),
    }
}

#[test]
fn test_checked_marker_wins() {
    assert!(matches!(
        LineKind::classify("- [x] done, see - [ ] other"),
        LineKind::CheckedItem(_)
    ));
}

#[test]
fn test_plain_lines() {
    assert_eq!(LineKind::classify(""), LineKind::Other);
    assert_eq!(LineKind::classify("- plain bullet"), LineKind::Other);
    assert_eq!(LineKind::classify("- [X] capital is not a marker"), LineKind::Other);
    assert_eq!(LineKind::classify("text").depth(), None);
}
