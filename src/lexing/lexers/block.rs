//! Headers that open a block and carry nothing else: `Background:`, `Constants:`,
//! `Before Each Scenario:`

use crate::ast::{Location, Node, NodeType, TestEventKind};
use crate::dictionary::{Dictionary, Keyword};
use crate::error::LexicalError;
use crate::lexing::common::{group, remove_comment, KeywordPattern};
use crate::lexing::{LexicalAnalysisResult, NodeLexer};

fn block_pattern(keywords: &str) -> String {
    format!(r"^\s*({keywords})\s*:(.*)$")
}

fn event_keyword(kind: TestEventKind) -> Keyword {
    match kind {
        TestEventKind::BeforeAll => Keyword::BeforeAll,
        TestEventKind::AfterAll => Keyword::AfterAll,
        TestEventKind::BeforeFeature => Keyword::BeforeFeature,
        TestEventKind::AfterFeature => Keyword::AfterFeature,
        TestEventKind::BeforeEachScenario => Keyword::BeforeEachScenario,
        TestEventKind::AfterEachScenario => Keyword::AfterEachScenario,
    }
}

#[derive(Debug, Clone)]
pub struct BlockLexer {
    node_type: NodeType,
    pattern: KeywordPattern,
}

impl BlockLexer {
    pub fn new(node_type: NodeType, keyword: Keyword, dictionary: &Dictionary) -> Self {
        Self {
            node_type,
            pattern: KeywordPattern::new(keyword, block_pattern, dictionary),
        }
    }

    pub fn background(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::Background, Keyword::Background, dictionary)
    }

    pub fn variant_background(dictionary: &Dictionary) -> Self {
        Self::new(
            NodeType::VariantBackground,
            Keyword::VariantBackground,
            dictionary,
        )
    }

    pub fn constants(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::ConstantBlock, Keyword::ConstantBlock, dictionary)
    }

    pub fn regular_expressions(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::RegexBlock, Keyword::RegexBlock, dictionary)
    }

    pub fn test_event(kind: TestEventKind, dictionary: &Dictionary) -> Self {
        Self::new(kind.node_type(), event_keyword(kind), dictionary)
    }
}

impl NodeLexer for BlockLexer {
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line);
        let captures = self.pattern.captures(content)?;
        let trailing = group(&captures, 2).trim();
        let location = Location::of_content(line, line_number);

        let result = LexicalAnalysisResult::node(Node::new(
            self.node_type,
            location,
            content.trim(),
        ));
        if !trailing.is_empty() {
            return Some(result.with_error(LexicalError::new(
                format!("Unexpected content after {}: \"{trailing}\"", self.node_type),
                location,
            )));
        }
        Some(result)
    }

    fn update_words(&mut self, dictionary: &Dictionary) {
        self.pattern.rebind(dictionary);
    }
}
