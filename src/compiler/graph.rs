//! Import dependency graph
//!
//!     Vertices are file paths and an edge `a -> b` means `a` imports `b`. The graph is built
//!     once every file task has settled, from the imports recorded in each document, so an
//!     import whose file could not be read is still a vertex.

use super::paths::resolve_import;
use super::spec::Specification;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Files importing each other, first file repeated at the end
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Import cycle: {}", CyclePath(.0))]
pub struct ImportCycle(pub Vec<PathBuf>);

struct CyclePath<'a>(&'a [PathBuf]);

impl fmt::Display for CyclePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportGraph {
    edges: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specification(spec: &Specification) -> Self {
        let mut graph = Self::new();
        for doc in spec.documents() {
            let Some(info) = doc.file_info.as_ref() else {
                continue;
            };
            graph.add_vertex(&info.path);
            for value in doc.import_values() {
                graph.add_edge(&info.path, &resolve_import(&info.path, value));
            }
        }
        graph
    }

    pub fn add_vertex(&mut self, path: &Path) {
        self.edges.entry(path.to_path_buf()).or_default();
    }

    pub fn add_edge(&mut self, from: &Path, to: &Path) {
        self.add_vertex(to);
        self.edges
            .entry(from.to_path_buf())
            .or_default()
            .insert(to.to_path_buf());
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Path> {
        self.edges.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Files imported by `path`.
    pub fn dependencies(&self, path: &Path) -> impl Iterator<Item = &Path> {
        self.edges
            .get(path)
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
    }

    /// Files importing `path`.
    pub fn dependents<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a Path> {
        self.edges
            .iter()
            .filter(move |(_, imports)| imports.contains(path))
            .map(|(from, _)| from.as_path())
    }

    /// Every file after the files it imports, or the first cycle found.
    pub fn topological_order(&self) -> Result<Vec<PathBuf>, ImportCycle> {
        let mut remaining: BTreeMap<&Path, usize> = self
            .edges
            .iter()
            .map(|(path, imports)| (path.as_path(), imports.len()))
            .collect();
        let mut ready: VecDeque<&Path> = remaining
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(&path, _)| path)
            .collect();
        let mut order = Vec::with_capacity(self.edges.len());

        while let Some(path) = ready.pop_front() {
            order.push(path.to_path_buf());
            for dependent in self.dependents(path) {
                if let Some(count) = remaining.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.push_back(dependent);
                    }
                }
            }
        }

        if order.len() == self.edges.len() {
            return Ok(order);
        }
        let cycle = self.cycles().into_iter().next().unwrap_or_default();
        Err(ImportCycle(cycle))
    }

    /// Every cycle reachable by depth-first search, each starting and ending with the file
    /// through which it was entered.
    pub fn cycles(&self) -> Vec<Vec<PathBuf>> {
        let mut visited = BTreeSet::new();
        let mut stack = Vec::new();
        let mut cycles = Vec::new();
        for start in self.edges.keys() {
            if !visited.contains(start.as_path()) {
                self.find_cycles(start, &mut visited, &mut stack, &mut cycles);
            }
        }
        cycles
    }

    fn find_cycles<'a>(
        &'a self,
        path: &'a Path,
        visited: &mut BTreeSet<&'a Path>,
        stack: &mut Vec<&'a Path>,
        cycles: &mut Vec<Vec<PathBuf>>,
    ) {
        visited.insert(path);
        stack.push(path);
        for next in self.dependencies(path) {
            if let Some(position) = stack.iter().position(|&p| p == next) {
                let mut cycle: Vec<PathBuf> =
                    stack[position..].iter().map(|p| p.to_path_buf()).collect();
                cycle.push(next.to_path_buf());
                cycles.push(cycle);
            } else if !visited.contains(next) {
                self.find_cycles(next, visited, stack, cycles);
            }
        }
        stack.pop();
    }
}
