use super::MetadataScanner;
use crate::formats::markdown::MarkdownFormat;

const NOTE: &str = "# Weekly sync

Met [[Alice|Al]] about [[02_June_2024#Notes]] and [[ roadmap ]].

- [ ] follow up #work #2024
- [x] send notes #admin/finance

```
[[not_a_link]] #code
```
";

#[test]
fn test_links_drop_alias_and_heading() {
    let mut scanner = MetadataScanner::new(&MarkdownFormat).unwrap();
    let meta = scanner.scan(NOTE).unwrap();
    let links: Vec<&str> = meta.links.iter().map(String::as_str).collect();
    assert_eq!(links, vec!["02_June_2024", "Alice", "roadmap"]);
}

#[test]
fn test_tags_skip_numeric_and_code() {
    let mut scanner = MetadataScanner::new(&MarkdownFormat).unwrap();
    let meta = scanner.scan(NOTE).unwrap();
    let tags: Vec<&str> = meta.tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["#admin/finance", "#work"]);
}

#[test]
fn test_heading_markers_are_not_tags() {
    let mut scanner = MetadataScanner::new(&MarkdownFormat).unwrap();
    let meta = scanner.scan("## Plans\n\nnothing tagged here\n").unwrap();
    assert!(meta.tags.is_empty());
    assert!(meta.links.is_empty());
}
