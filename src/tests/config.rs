use super::Config;
use std::fs;
use tempfile::NamedTempFile;

#[test]
fn test_empty_toml_gives_defaults() {
    let cfg = Config::from_toml("").unwrap();
    assert_eq!(cfg.path_prefixes, vec!["002_Projects", "005_Personal"]);
    assert_eq!(cfg.in_progress_tags, vec!["#wip"]);
    assert_eq!(cfg.excluded_tags, vec!["#wip"]);
    assert_eq!(cfg.index_document, "Task Index");
    assert_eq!(cfg.file_extensions, vec!["md"]);
}

#[test]
fn test_default_matches_empty_toml() {
    let parsed = Config::from_toml("").unwrap();
    let built = Config::default();
    assert_eq!(parsed.path_prefixes, built.path_prefixes);
    assert_eq!(parsed.index_path_prefixes, built.index_path_prefixes);
    assert_eq!(parsed.in_progress_tags, built.in_progress_tags);
    assert_eq!(parsed.excluded_tags, built.excluded_tags);
    assert_eq!(parsed.index_document, built.index_document);
    assert_eq!(parsed.file_extensions, built.file_extensions);
}

#[test]
fn test_load_from_file_overrides() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        "path_prefixes = [\"Work\"]\nin_progress_tags = [\"#active\", \"#wip\"]\n",
    )
    .unwrap();

    let cfg = Config::load_from(file.path()).unwrap();
    assert_eq!(cfg.path_prefixes, vec!["Work"]);
    assert_eq!(cfg.in_progress_tags, vec!["#active", "#wip"]);
    assert_eq!(cfg.index_path_prefixes, vec!["002_Projects", "005_Personal"]);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
}
