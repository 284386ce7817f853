//! `- <content>` items of UI elements and databases

use crate::ast::{Location, Node, NodeData, NodeType};
use crate::error::LexicalError;
use crate::lexing::common::remove_comment;
use crate::lexing::{LexicalAnalysisResult, NodeLexer};
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s*(.*)$").expect("valid list item pattern"));

#[derive(Debug, Clone)]
pub struct ListItemLexer {
    node_type: NodeType,
}

impl ListItemLexer {
    pub fn new(node_type: NodeType) -> Self {
        Self { node_type }
    }

    pub fn ui_property() -> Self {
        Self::new(NodeType::UiProperty)
    }

    pub fn database_property() -> Self {
        Self::new(NodeType::DatabaseProperty)
    }
}

impl NodeLexer for ListItemLexer {
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line);
        let captures = LIST_ITEM_REGEX.captures(content)?;
        let value = captures.get(1).map_or("", |m| m.as_str()).trim();
        let location = Location::of_content(line, line_number);

        let node = Node::new(self.node_type, location, content.trim()).with_data(NodeData::Value {
            value: value.to_string(),
        });
        let result = LexicalAnalysisResult::node(node);
        if value.is_empty() {
            return Some(result.with_error(LexicalError::new(
                format!("Empty {}", self.node_type),
                location,
            )));
        }
        Some(result)
    }
}
