//! Per-file problem collection
//!
//!     Every stage reports into a [`ProblemMapper`] instead of returning early: lexing, parsing,
//!     reading, recognition and cross-document analysis all add entries keyed by the file they
//!     concern. Problems that belong to no file go under [`GENERIC_KEY`].

use crate::error::Problem;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key for problems not tied to a file.
pub const GENERIC_KEY: &str = "*";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileProblems {
    pub errors: Vec<Problem>,
    pub warnings: Vec<Problem>,
}

impl FileProblems {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProblemMapper {
    files: BTreeMap<PathBuf, FileProblems>,
}

impl ProblemMapper {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, path: &Path) -> &mut FileProblems {
        self.files.entry(path.to_path_buf()).or_default()
    }

    pub fn add_error(&mut self, path: impl AsRef<Path>, problem: impl Into<Problem>) {
        self.entry(path.as_ref()).errors.push(problem.into());
    }

    pub fn add_warning(&mut self, path: impl AsRef<Path>, problem: impl Into<Problem>) {
        self.entry(path.as_ref()).warnings.push(problem.into());
    }

    pub fn add_errors<I, P>(&mut self, path: impl AsRef<Path>, problems: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Problem>,
    {
        let entry = self.entry(path.as_ref());
        entry.errors.extend(problems.into_iter().map(Into::into));
    }

    pub fn add_warnings<I, P>(&mut self, path: impl AsRef<Path>, problems: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Problem>,
    {
        let entry = self.entry(path.as_ref());
        entry.warnings.extend(problems.into_iter().map(Into::into));
    }

    pub fn add_generic_error(&mut self, problem: impl Into<Problem>) {
        self.add_error(GENERIC_KEY, problem);
    }

    /// Moves everything from `other` into this mapper.
    pub fn merge(&mut self, other: ProblemMapper) {
        for (path, problems) in other.files {
            let entry = self.files.entry(path).or_default();
            entry.errors.extend(problems.errors);
            entry.warnings.extend(problems.warnings);
        }
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&FileProblems> {
        self.files.get(path.as_ref())
    }

    pub fn errors(&self, path: impl AsRef<Path>) -> &[Problem] {
        self.get(path).map_or(&[], |p| p.errors.as_slice())
    }

    pub fn warnings(&self, path: impl AsRef<Path>) -> &[Problem] {
        self.get(path).map_or(&[], |p| p.warnings.as_slice())
    }

    pub fn has_errors(&self) -> bool {
        self.files.values().any(|p| !p.errors.is_empty())
    }

    pub fn has_errors_for(&self, path: impl AsRef<Path>) -> bool {
        !self.errors(path).is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.files.values().map(|p| p.errors.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.files.values().map(|p| p.warnings.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &FileProblems)> {
        self.files
            .iter()
            .filter(|(_, problems)| !problems.is_empty())
            .map(|(path, problems)| (path.as_path(), problems))
    }

    pub fn is_empty(&self) -> bool {
        self.files.values().all(FileProblems::is_empty)
    }
}
