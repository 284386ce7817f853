//! Single file pipeline
//!
//!     [`SingleFileCompiler`] runs lexing, parsing and sentence recognition over the content of
//!     one file and returns its [`Document`]. Nothing escapes it: every diagnostic, and any
//!     panic in lexing, parsing or the sentence recognizer, ends up in the [`ProblemMapper`]
//!     under the file's path. A document is always returned, possibly partial.
//!
//!     Sentence recognition is an extension point. The pipeline only decides which language
//!     to recognize in (the document's own `#language`, else the lexer's default) and makes
//!     sure the recognizer is trained for it.

use crate::ast::{Document, FileInfo};
use crate::error::{Problem, ProblemKind, RecognitionError};
use crate::lexing::Lexer;
use crate::parsing::Parser;
use crate::problems::ProblemMapper;
use sha2::{Digest, Sha256};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

/// Recognizes the sentences of steps, for a given language
pub trait SentenceRecognizer: Send + Sync {
    fn is_trained(&self, language: &str) -> bool;

    fn can_be_trained(&self, language: &str) -> bool;

    fn train(&self, language: &str) -> Result<(), RecognitionError>;

    fn recognize_sentences_in_document(
        &self,
        doc: &mut Document,
        language: &str,
        errors: &mut Vec<Problem>,
        warnings: &mut Vec<Problem>,
    );
}

/// Leaves documents as parsed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSentenceRecognition;

impl SentenceRecognizer for NoSentenceRecognition {
    fn is_trained(&self, _language: &str) -> bool {
        true
    }

    fn can_be_trained(&self, _language: &str) -> bool {
        true
    }

    fn train(&self, _language: &str) -> Result<(), RecognitionError> {
        Ok(())
    }

    fn recognize_sentences_in_document(
        &self,
        _doc: &mut Document,
        _language: &str,
        _errors: &mut Vec<Problem>,
        _warnings: &mut Vec<Problem>,
    ) {
    }
}

/// SHA-256 of `content`, lowercase hex.
pub fn content_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

pub struct SingleFileCompiler {
    lexer: Lexer,
    parser: Parser,
    recognizer: Arc<dyn SentenceRecognizer>,
}

impl SingleFileCompiler {
    pub fn new(lexer: Lexer, parser: Parser, recognizer: Arc<dyn SentenceRecognizer>) -> Self {
        Self {
            lexer,
            parser,
            recognizer,
        }
    }

    /// Compiles `content`, reporting problems under `path`.
    ///
    /// Lines are split on `line_break`; a `\r` left at the end of a line is dropped.
    pub fn process(
        &mut self,
        problems: &mut ProblemMapper,
        path: &Path,
        content: &str,
        line_break: &str,
    ) -> Document {
        let file_info = FileInfo {
            path: path.to_path_buf(),
            hash: content_hash(content),
        };
        let line_break = if line_break.is_empty() { "\n" } else { line_break };
        let lexer = &mut self.lexer;
        let parser = &mut self.parser;
        let parse_into = Document::new().with_file_info(file_info.clone());

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            for (index, line) in content.split(line_break).enumerate() {
                let line = line.strip_suffix('\r').unwrap_or(line);
                lexer.add_node_from_line(line, index + 1);
            }
            let lexed = lexer.finish();
            let mut syntax_errors = Vec::new();
            let doc = parser.analyze(&lexed.nodes, parse_into, &mut syntax_errors);
            (lexed.errors, lexed.warnings, syntax_errors, doc)
        }));

        let mut doc = match outcome {
            Ok((lexical_errors, lexical_warnings, syntax_errors, doc)) => {
                problems.add_errors(path, lexical_errors);
                problems.add_warnings(path, lexical_warnings);
                problems.add_errors(path, syntax_errors);
                doc
            }
            Err(_) => {
                tracing::warn!(path = %path.display(), "lexing or parsing panicked");
                self.lexer.recover();
                problems.add_error(
                    path,
                    Problem::new(ProblemKind::Internal, "lexing or parsing panicked"),
                );
                return Document::new().with_file_info(file_info);
            }
        };

        self.recognize(problems, path, &mut doc);
        doc
    }

    fn recognize(&self, problems: &mut ProblemMapper, path: &Path, doc: &mut Document) {
        let language = doc
            .language_value()
            .unwrap_or_else(|| self.lexer.default_language())
            .to_string();
        let recognizer = self.recognizer.as_ref();

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            if !recognizer.is_trained(&language) {
                if !recognizer.can_be_trained(&language) {
                    return Err(RecognitionError::new(
                        language.as_str(),
                        "no training data available",
                    ));
                }
                recognizer.train(&language)?;
            }
            let mut errors = Vec::new();
            let mut warnings = Vec::new();
            recognizer.recognize_sentences_in_document(doc, &language, &mut errors, &mut warnings);
            Ok((errors, warnings))
        }));

        match outcome {
            Ok(Ok((errors, warnings))) => {
                problems.add_errors(path, errors);
                problems.add_warnings(path, warnings);
            }
            Ok(Err(error)) => problems.add_error(path, error),
            Err(_) => {
                tracing::warn!(path = %path.display(), "sentence recognizer panicked");
                problems.add_error(
                    path,
                    Problem::new(ProblemKind::Internal, "sentence recognition panicked"),
                );
            }
        }
    }
}
