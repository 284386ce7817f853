//! Lexer
//!
//!     Lexing is line based. Every non-blank line is offered to a set of node lexers, each of
//!     which recognizes exactly one construct (a feature header, a step, a table row, ...). The
//!     first lexer that accepts the line produces its node(s) and diagnostics; nothing else is
//!     tried for that line.
//!
//! Node Lexers
//!
//!     A node lexer is anything implementing [`NodeLexer`]. Most of them are driven by a
//!     keyword [`Dictionary`](crate::dictionary::Dictionary): their patterns are built from the
//!     localized words of one keyword and rebuilt whenever the words change. The remaining
//!     ones (list items, table rows, long strings, text) are purely structural.
//!
//!     Lexers never fail. A line that looks like a construct but is malformed still yields its
//!     node, together with a [`LexicalError`]; a line that does not look like the construct at
//!     all yields `None`.
//!
//! The Dispatcher
//!
//!     [`Lexer`] owns the lexers in priority order and the per-file state: the accumulated
//!     nodes and diagnostics, the long string mode, the active language, and the last lexer
//!     that matched. The last lexer is used as a small lexical grammar: the constructs that
//!     usually follow it (see [`grammar`]) are tried before falling back to the full list.
//!     Besides saving work, this is what tells apart lines that several lexers accept, like a
//!     `- "x" is "y"` line inside a regular expressions block versus a constants block.

pub mod common;
pub mod grammar;
pub mod lexer;
pub mod lexers;

use crate::ast::{Node, NodeType};
use crate::dictionary::Dictionary;
use crate::error::{LexicalError, LexicalWarning};

pub use lexer::Lexer;

/// What one lexer produced for one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalAnalysisResult {
    pub nodes: Vec<Node>,
    pub errors: Vec<LexicalError>,
    pub warnings: Vec<LexicalWarning>,
}

impl LexicalAnalysisResult {
    pub fn node(node: Node) -> Self {
        Self {
            nodes: vec![node],
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn with_error(mut self, error: LexicalError) -> Self {
        self.errors.push(error);
        self
    }

    pub fn with_warning(mut self, warning: LexicalWarning) -> Self {
        self.warnings.push(warning);
        self
    }
}

/// Recognizes one construct on one line
pub trait NodeLexer: Send + Sync {
    /// Type of the nodes this lexer produces.
    fn node_type(&self) -> NodeType;

    /// Analyzes a line; `None` means the line is not this construct.
    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult>;

    /// Constructs worth trying first on the line after this one matched.
    fn suggested_next_node_types(&self) -> &'static [NodeType] {
        grammar::suggested_next(self.node_type())
    }

    /// Rebinds keyword words from a dictionary. Structural lexers ignore it.
    fn update_words(&mut self, _dictionary: &Dictionary) {}
}
