//! `"""` delimiters

use crate::ast::{Location, Node, NodeType};
use crate::lexing::{LexicalAnalysisResult, NodeLexer};
use once_cell::sync::Lazy;
use regex::Regex;

pub const LONG_STRING_DELIMITER: &str = r#"""""#;

static LONG_STRING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*"""\s*(#.*)?$"#).expect("valid long string pattern"));

/// Opens or closes a long string. The dispatcher tracks which one it is.
#[derive(Debug, Clone, Default)]
pub struct LongStringLexer;

impl LongStringLexer {
    pub fn new() -> Self {
        Self
    }
}

impl NodeLexer for LongStringLexer {
    fn node_type(&self) -> NodeType {
        NodeType::LongString
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        if !LONG_STRING_REGEX.is_match(line) {
            return None;
        }
        Some(LexicalAnalysisResult::node(Node::new(
            NodeType::LongString,
            Location::of_content(line, line_number),
            LONG_STRING_DELIMITER,
        )))
    }
}
