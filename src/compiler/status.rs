use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// How far the compilation of one file went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FileStatus {
    /// Claimed by a task, not compiled yet
    Pending,
    /// Parsed and added to the specification, imports not settled yet
    Compiled,
    /// Compiled and every import settled
    Done,
    /// Could not be read or compiled
    Failed,
}

impl FileStatus {
    pub fn can_advance_to(self, to: FileStatus) -> bool {
        use FileStatus::*;
        matches!(
            (self, to),
            (Pending, Compiled | Done | Failed) | (Compiled, Done | Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, FileStatus::Done | FileStatus::Failed)
    }
}

/// Per-path statuses shared by all compile tasks
///
/// [`claim`](Self::claim) is the only way in: the first caller for a path owns it, so each
/// file is compiled at most once however many files import it. After that a status only moves
/// forward through [`advance`](Self::advance).
#[derive(Debug, Default)]
pub struct StatusTable {
    statuses: Mutex<BTreeMap<PathBuf, FileStatus>>,
}

impl StatusTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `path` pending if nobody claimed it yet. Returns whether the caller owns it.
    pub fn claim(&self, path: &Path) -> bool {
        let mut statuses = self.statuses.lock();
        if statuses.contains_key(path) {
            return false;
        }
        statuses.insert(path.to_path_buf(), FileStatus::Pending);
        true
    }

    /// Moves a claimed path to `to` if that is a forward step. Returns whether it moved.
    ///
    /// Pending goes to Compiled, Done or Failed; Compiled goes to Done or Failed. Done and
    /// Failed are terminal, and paths nobody claimed are left alone.
    pub fn advance(&self, path: &Path, to: FileStatus) -> bool {
        let mut statuses = self.statuses.lock();
        let Some(current) = statuses.get_mut(path) else {
            tracing::warn!(path = %path.display(), ?to, "status change for an unclaimed path");
            return false;
        };
        if !current.can_advance_to(to) {
            tracing::warn!(path = %path.display(), from = ?*current, ?to, "status cannot go back");
            return false;
        }
        *current = to;
        true
    }

    pub fn get(&self, path: &Path) -> Option<FileStatus> {
        self.statuses.lock().get(path).copied()
    }

    pub fn snapshot(&self) -> BTreeMap<PathBuf, FileStatus> {
        self.statuses.lock().clone()
    }
}
