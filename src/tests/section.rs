use super::SectionIndex;

const DOC: &str = "preamble
# Log
intro
## 01-Jun-2024
- [ ] a
### detail
- [ ] b
## 02-Jun-2024
- [x] c
# Other
end";

fn coords(index: &SectionIndex, header: &str) -> (usize, usize, usize) {
    let section = index.get(header).unwrap();
    (section.start, section.body_end, section.end)
}

#[test]
fn test_sections_in_document_order() {
    let index = SectionIndex::from_text(DOC);
    let headers: Vec<&str> = index.iter().map(|s| s.header.as_str()).collect();
    assert_eq!(
        headers,
        vec![
            "preamble",
            "# Log",
            "## 01-Jun-2024",
            "### detail",
            "## 02-Jun-2024",
            "# Other",
        ]
    );
}

#[test]
fn test_partition_covers_every_line() {
    for text in [DOC, "# only", "no headers\nat all", "## a\n## b\n\n### c\n# d\n"] {
        let lines: Vec<&str> = text.lines().collect();
        let index = SectionIndex::new(&lines);
        let mut cursor = 0;
        for section in index.iter() {
            assert_eq!(section.start, cursor, "gap or overlap before {}", section.header);
            assert!(section.body_end > section.start);
            assert!(section.end >= section.body_end);
            cursor = section.body_end;
        }
        assert_eq!(cursor, lines.len());
    }
}

#[test]
fn test_nested_headers_are_absorbed() {
    let index = SectionIndex::from_text(DOC);
    assert_eq!(coords(&index, "# Log"), (1, 3, 9));
    assert_eq!(coords(&index, "## 01-Jun-2024"), (3, 5, 7));
    assert_eq!(coords(&index, "### detail"), (5, 7, 7));
    assert_eq!(coords(&index, "## 02-Jun-2024"), (7, 9, 9));
    assert_eq!(coords(&index, "# Other"), (9, 11, 11));
}

#[test]
fn test_preamble_is_depth_zero() {
    let index = SectionIndex::from_text(DOC);
    let preamble = index.get("preamble").unwrap();
    assert_eq!(preamble.depth, 0);
    assert_eq!((preamble.start, preamble.end), (0, 1));
}

#[test]
fn test_duplicate_header_last_wins() {
    let index = SectionIndex::from_text("## a\none\n## b\n## a\ntwo\nthree");
    assert_eq!(index.len(), 3);
    assert_eq!(coords(&index, "## a"), (3, 6, 6));
}

#[test]
fn test_body_excludes_subsections() {
    let lines: Vec<&str> = DOC.lines().collect();
    let index = SectionIndex::new(&lines);
    let body = index.get("## 01-Jun-2024").unwrap().body(&lines);
    assert_eq!(body, &["## 01-Jun-2024", "- [ ] a"]);
}

#[test]
fn test_empty_document() {
    let index = SectionIndex::from_text("");
    assert!(index.is_empty());
    assert!(index.get("# anything").is_none());
}
