//! Where file contents come from

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileReader;

#[async_trait]
impl FileReader for FsFileReader {
    async fn read(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

/// Serves files from memory and counts reads per path
#[derive(Debug, Default)]
pub struct MemoryFileReader {
    files: HashMap<PathBuf, String>,
    reads: Mutex<HashMap<PathBuf, usize>>,
}

impl MemoryFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn read_count(&self, path: impl AsRef<Path>) -> usize {
        self.reads.lock().get(path.as_ref()).copied().unwrap_or(0)
    }

    pub fn total_reads(&self) -> usize {
        self.reads.lock().values().sum()
    }
}

#[async_trait]
impl FileReader for MemoryFileReader {
    async fn read(&self, path: &Path) -> io::Result<String> {
        *self.reads.lock().entry(path.to_path_buf()).or_insert(0) += 1;
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}
