//! `<keyword> "<value>"` lines, such as imports

use crate::ast::{Location, Node, NodeData, NodeType};
use crate::dictionary::{Dictionary, Keyword};
use crate::error::LexicalError;
use crate::lexing::common::{group, is_valid_path, remove_comment, scan_quoted, KeywordPattern};
use crate::lexing::{LexicalAnalysisResult, NodeLexer};

fn quoted_pattern(keywords: &str) -> String {
    format!(r#"^\s*({keywords})\s*(".*)$"#)
}

#[derive(Debug, Clone)]
pub struct QuotedNodeLexer {
    node_type: NodeType,
    pattern: KeywordPattern,
}

impl QuotedNodeLexer {
    /// The quoted value must be a valid file path.
    pub fn new(node_type: NodeType, keyword: Keyword, dictionary: &Dictionary) -> Self {
        Self {
            node_type,
            pattern: KeywordPattern::new(keyword, quoted_pattern, dictionary),
        }
    }

    pub fn import(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::Import, Keyword::Import, dictionary)
    }
}

impl NodeLexer for QuotedNodeLexer {
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line);
        let captures = self.pattern.captures(content)?;
        let quoted = group(&captures, 2).trim_end();
        let location = Location::of_content(line, line_number);
        let mut errors = Vec::new();

        let value = match scan_quoted(quoted) {
            Some((value, rest)) => {
                if !rest.trim().is_empty() {
                    errors.push(LexicalError::new(
                        format!("Unexpected content after the {} value", self.node_type),
                        location,
                    ));
                }
                value
            }
            None => {
                errors.push(LexicalError::new(
                    format!("Unclosed quoted {} value", self.node_type),
                    location,
                ));
                &quoted[1..]
            }
        };
        if !is_valid_path(value) {
            errors.push(LexicalError::new(
                format!("Invalid {} value: \"{value}\"", self.node_type),
                location,
            ));
        }

        let node = Node::new(self.node_type, location, content.trim()).with_data(NodeData::Value {
            value: value.to_string(),
        });
        Some(LexicalAnalysisResult {
            nodes: vec![node],
            errors,
            warnings: Vec::new(),
        })
    }

    fn update_words(&mut self, dictionary: &Dictionary) {
        self.pattern.rebind(dictionary);
    }
}
