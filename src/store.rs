//! Document stores: where source documents and their metadata come from.
//!
//! [`VaultStore`] walks a directory of markdown files the way a notes vault is laid out.
//! [`MemoryStore`] holds documents in memory for embedding and tests.

use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::metadata::MetadataScanner;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// Identity of a document within a store.
pub struct DocumentRef {
    /// Store-relative path with `/` separators.
    pub path: String,
    /// Document name as used in wiki links (the file stem).
    pub name: String,
}

impl DocumentRef {
    #[must_use]
    /// Reference from a store-relative path; the name is the file stem.
    pub fn from_path(path: &str) -> Self {
        let name = Path::new(path)
            .file_stem()
            .map_or_else(|| path.to_string(), |s| s.to_string_lossy().into_owned());
        Self {
            path: path.to_string(),
            name,
        }
    }

    #[must_use]
    /// `[[name]]`.
    pub fn wiki_ref(&self) -> String {
        format!("[[{}]]", self.name)
    }

    #[must_use]
    /// Whether the path starts with any of `prefixes`.
    pub fn matches_prefix(&self, prefixes: &[String]) -> bool {
        prefixes.iter().any(|p| self.path.starts_with(p.as_str()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Outbound link targets and tags of a document. Absent metadata is simply empty.
pub struct Metadata {
    /// Wiki-link target names.
    pub links: BTreeSet<String>,
    /// Tags including the leading `#`.
    pub tags: BTreeSet<String>,
}

/// Source of documents to aggregate.
pub trait DocumentStore {
    /// Every document in the store, in a stable order.
    fn documents(&self) -> Vec<DocumentRef>;
    /// Full text of a document, read fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read.
    fn read(&self, doc: &DocumentRef) -> Result<String>;
    /// Links and tags of a document; empty if unknown.
    fn metadata(&self, doc: &DocumentRef) -> Metadata;
}

/// Documents found under a vault directory.
pub struct VaultStore {
    root: PathBuf,
    documents: Vec<DocumentRef>,
    metadata: HashMap<DocumentRef, Metadata>,
}

impl VaultStore {
    /// Scan `root` for files with one of `extensions` and index their metadata.
    ///
    /// Files that cannot be read at this point are kept with empty metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the vault directory cannot be walked or the markdown grammar fails
    /// to load.
    pub fn open(root: &Path, extensions: &[String]) -> Result<Self> {
        let mut scanner = MetadataScanner::new(&MarkdownFormat)?;
        let mut documents = Vec::new();
        let mut metadata = HashMap::new();

        for path in find_documents(root, extensions)? {
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let doc = DocumentRef::from_path(&relative);
            let meta = match fs::read_to_string(&path) {
                Ok(text) => scanner.scan(&text).unwrap_or_else(|e| {
                    warn!(path = %doc.path, error = %e, "could not scan metadata");
                    Metadata::default()
                }),
                Err(e) => {
                    warn!(path = %doc.path, error = %e, "could not read for metadata");
                    Metadata::default()
                }
            };
            metadata.insert(doc.clone(), meta);
            documents.push(doc);
        }
        debug!(root = %root.display(), count = documents.len(), "vault opened");

        Ok(Self {
            root: root.to_path_buf(),
            documents,
            metadata,
        })
    }
}

impl DocumentStore for VaultStore {
    fn documents(&self) -> Vec<DocumentRef> {
        self.documents.clone()
    }

    fn read(&self, doc: &DocumentRef) -> Result<String> {
        let path = self.root.join(&doc.path);
        fs::read_to_string(&path).map_err(|source| Error::Read { path, source })
    }

    fn metadata(&self, doc: &DocumentRef) -> Metadata {
        self.metadata.get(doc).cloned().unwrap_or_default()
    }
}

/// Collect files under `root` whose extension is in `extensions`, in file-name order.
///
/// Hidden entries (such as `.obsidian` or `.git`) are skipped and symlinks are not followed,
/// so a linked directory cannot make the same note appear twice.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed.
pub fn find_documents(root: &Path, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .is_some_and(|ext| extensions.iter().any(|e| ext == e.as_str()));
        if matches {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

#[derive(Default)]
/// In-memory document store.
pub struct MemoryStore {
    documents: Vec<DocumentRef>,
    texts: HashMap<DocumentRef, String>,
    metadata: HashMap<DocumentRef, Metadata>,
}

impl MemoryStore {
    #[must_use]
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document at `path` with its text and metadata.
    pub fn insert(&mut self, path: &str, text: &str, metadata: Metadata) -> DocumentRef {
        let doc = DocumentRef::from_path(path);
        self.documents.push(doc.clone());
        self.texts.insert(doc.clone(), text.to_string());
        self.metadata.insert(doc.clone(), metadata);
        doc
    }

    /// Add a document whose text is unavailable, so reads fail.
    pub fn insert_unreadable(&mut self, path: &str, metadata: Metadata) -> DocumentRef {
        let doc = DocumentRef::from_path(path);
        self.documents.push(doc.clone());
        self.metadata.insert(doc.clone(), metadata);
        doc
    }
}

impl DocumentStore for MemoryStore {
    fn documents(&self) -> Vec<DocumentRef> {
        self.documents.clone()
    }

    fn read(&self, doc: &DocumentRef) -> Result<String> {
        self.texts.get(doc).cloned().ok_or_else(|| Error::Read {
            path: PathBuf::from(&doc.path),
            source: io::Error::new(io::ErrorKind::NotFound, "document has no text"),
        })
    }

    fn metadata(&self, doc: &DocumentRef) -> Metadata {
        self.metadata.get(doc).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/store.rs"]
mod tests;
