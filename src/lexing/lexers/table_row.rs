//! `| a | b |` rows

use crate::ast::{Location, Node, NodeData, NodeType};
use crate::lexing::common::remove_comment;
use crate::lexing::{LexicalAnalysisResult, NodeLexer};

const SEPARATOR: char = '|';

/// Splits a row into trimmed cells. Adjacent separators delimit an empty cell.
fn cells(row: &str) -> Vec<String> {
    let mut normalized = row.to_string();
    while normalized.contains("||") {
        normalized = normalized.replace("||", "| |");
    }
    let inner = &normalized[1..normalized.len() - 1];
    inner.split(SEPARATOR).map(|cell| cell.trim().to_string()).collect()
}

#[derive(Debug, Clone, Default)]
pub struct TableRowLexer;

impl TableRowLexer {
    pub fn new() -> Self {
        Self
    }
}

impl NodeLexer for TableRowLexer {
    fn node_type(&self) -> NodeType {
        NodeType::TableRow
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line).trim();
        if !content.starts_with(SEPARATOR)
            || !content.ends_with(SEPARATOR)
            || content.matches(SEPARATOR).count() < 2
        {
            return None;
        }
        let node = Node::new(
            NodeType::TableRow,
            Location::of_content(line, line_number),
            content,
        )
        .with_data(NodeData::Cells {
            cells: cells(content),
        });
        Some(LexicalAnalysisResult::node(node))
    }
}
