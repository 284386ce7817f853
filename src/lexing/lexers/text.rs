//! Anything else

use crate::ast::{Location, Node, NodeData, NodeType};
use crate::lexing::common::{remove_comment, COMMENT_PREFIX};
use crate::lexing::{LexicalAnalysisResult, NodeLexer};

/// Accepts every line with content left after removing its comment, except comment-only
/// lines. Always tried last.
#[derive(Debug, Clone, Default)]
pub struct TextLexer;

impl TextLexer {
    pub fn new() -> Self {
        Self
    }
}

impl NodeLexer for TextLexer {
    fn node_type(&self) -> NodeType {
        NodeType::Text
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        if line.trim_start().starts_with(COMMENT_PREFIX) {
            return None;
        }
        let content = remove_comment(line).trim();
        if content.is_empty() {
            return None;
        }
        let node = Node::new(
            NodeType::Text,
            Location::of_content(line, line_number),
            content,
        )
        .with_data(NodeData::Value {
            value: content.to_string(),
        });
        Some(LexicalAnalysisResult::node(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_text() {
        let lexer = TextLexer::new();
        let result = lexer.analyze("  As a user # who", 1).expect("text");
        assert_eq!(result.nodes[0].value(), Some("As a user"));
        assert!(lexer.analyze("   # just a comment", 1).is_none());
        assert!(lexer.analyze("", 1).is_none());
    }

    #[rstest]
    #[case("# see issue #12")]
    #[case("# TODO check <#login>")]
    #[case(r#"  # say "hi""#)]
    #[case("#>")]
    fn test_comment_lines_are_not_text(#[case] line: &str) {
        assert!(TextLexer::new().analyze(line, 1).is_none());
    }
}
