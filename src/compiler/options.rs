//! Compiler options
//!
//! Options are plain YAML with kebab-case keys. Every key is optional:
//!
//!     language: pt
//!     line-break: "\r\n"
//!     concurrency: 4          # null or 0 for no limit
//!     stop-on-first-error: true
//!     dictionary-dir: ./dictionaries

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONCURRENCY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CompilerOptions {
    /// Language of files without a `#language` declaration
    pub language: String,
    pub line_break: String,
    /// Files compiled at the same time; `None` or `0` means no limit
    pub concurrency: Option<usize>,
    pub stop_on_first_error: bool,
    /// Extra `<lang>.json` keyword dictionaries, layered over the built-in ones
    pub dictionary_dir: Option<PathBuf>,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            line_break: "\n".to_string(),
            concurrency: Some(DEFAULT_CONCURRENCY),
            stop_on_first_error: false,
            dictionary_dir: None,
        }
    }
}

impl CompilerOptions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Effective concurrency limit, `None` when unlimited.
    pub fn concurrency_limit(&self) -> Option<usize> {
        self.concurrency.filter(|&limit| limit > 0)
    }
}
