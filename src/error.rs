//! Error types
//!
//!     Lexical and syntactic diagnostics are data: they are accumulated, never raised, and end
//!     up as [`Problem`]s in a [`ProblemMapper`](crate::problems::ProblemMapper). The remaining
//!     error types describe operations that can fail as a whole (loading a dictionary, reading
//!     configuration, training a recognizer) and are converted into problems at the file
//!     boundary.

use crate::ast::Location;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A line that was recognized but is malformed
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} ({location})")]
pub struct LexicalError {
    pub message: String,
    pub location: Location,
}

impl LexicalError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// A recognized line that is suspicious but usable
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} ({location})")]
pub struct LexicalWarning {
    pub message: String,
    pub location: Location,
}

impl LexicalWarning {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// A node that is well formed but out of place
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message} ({location})")]
pub struct SyntacticError {
    pub message: String,
    pub location: Location,
}

impl SyntacticError {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("no dictionary available for language \"{0}\"")]
    NotFound(String),
    #[error("invalid dictionary for language \"{language}\": {source}")]
    Invalid {
        language: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failure reported by an external sentence recognizer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sentence recognition failed for language \"{language}\": {message}")]
pub struct RecognitionError {
    pub language: String,
    pub message: String,
}

impl RecognitionError {
    pub fn new(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            message: message.into(),
        }
    }
}

/// Which stage a problem comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProblemKind {
    Lexical,
    Syntactic,
    Io,
    Dictionary,
    Recognition,
    Import,
    Semantic,
    Internal,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProblemKind::Lexical => "lexical",
            ProblemKind::Syntactic => "syntactic",
            ProblemKind::Io => "io",
            ProblemKind::Dictionary => "dictionary",
            ProblemKind::Recognition => "recognition",
            ProblemKind::Import => "import",
            ProblemKind::Semantic => "semantic",
            ProblemKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Normalized error or warning, as stored per file
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("[{kind}] {message}{}", location_suffix(.location))]
pub struct Problem {
    pub kind: ProblemKind,
    pub message: String,
    pub location: Option<Location>,
}

fn location_suffix(location: &Option<Location>) -> String {
    match location {
        Some(location) => format!(" ({location})"),
        None => String::new(),
    }
}

impl Problem {
    pub fn new(kind: ProblemKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl From<LexicalError> for Problem {
    fn from(err: LexicalError) -> Self {
        Problem::new(ProblemKind::Lexical, err.message).at(err.location)
    }
}

impl From<LexicalWarning> for Problem {
    fn from(warning: LexicalWarning) -> Self {
        Problem::new(ProblemKind::Lexical, warning.message).at(warning.location)
    }
}

impl From<SyntacticError> for Problem {
    fn from(err: SyntacticError) -> Self {
        Problem::new(ProblemKind::Syntactic, err.message).at(err.location)
    }
}

impl From<DictionaryError> for Problem {
    fn from(err: DictionaryError) -> Self {
        Problem::new(ProblemKind::Dictionary, err.to_string())
    }
}

impl From<RecognitionError> for Problem {
    fn from(err: RecognitionError) -> Self {
        Problem::new(ProblemKind::Recognition, err.to_string())
    }
}
