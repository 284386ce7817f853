use crate::ast::Document;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Every compiled document, keyed by path, in the order they were added
#[derive(Debug, Clone, Default, Serialize)]
pub struct Specification {
    documents: Vec<Document>,
    #[serde(skip)]
    index: HashMap<PathBuf, usize>,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing the one with the same path. Documents without file info
    /// are keyed by the empty path.
    pub fn insert(&mut self, doc: Document) {
        let path = doc
            .file_info
            .as_ref()
            .map(|info| info.path.clone())
            .unwrap_or_default();
        match self.index.get(&path) {
            Some(&position) => self.documents[position] = doc,
            None => {
                self.index.insert(path, self.documents.len());
                self.documents.push(doc);
            }
        }
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Document> {
        self.index
            .get(path.as_ref())
            .map(|&position| &self.documents[position])
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.index.contains_key(path.as_ref())
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.documents
            .iter()
            .filter_map(|doc| doc.file_info.as_ref().map(|info| info.path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
