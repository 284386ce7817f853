//! Lines that start with a step keyword

use crate::ast::{Location, Node, NodeData, NodeType};
use crate::dictionary::{Dictionary, Keyword};
use crate::error::LexicalWarning;
use crate::lexing::common::{group, remove_comment, KeywordPattern};
use crate::lexing::{LexicalAnalysisResult, NodeLexer};

fn step_pattern(keywords: &str) -> String {
    format!(r"^\s*({keywords})(?:\s|,)+(.*)$")
}

/// `Given`, `When`, `Then`, `And` and `Otherwise` lines
///
/// The keyword must be followed by whitespace or a comma; what comes after is the step value.
/// A step with nothing after its keyword is accepted with a warning.
#[derive(Debug, Clone)]
pub struct StartingKeywordLexer {
    node_type: NodeType,
    pattern: KeywordPattern,
}

impl StartingKeywordLexer {
    pub fn new(node_type: NodeType, keyword: Keyword, dictionary: &Dictionary) -> Self {
        Self {
            node_type,
            pattern: KeywordPattern::new(keyword, step_pattern, dictionary),
        }
    }

    pub fn given(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::StepGiven, Keyword::StepGiven, dictionary)
    }

    pub fn when(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::StepWhen, Keyword::StepWhen, dictionary)
    }

    pub fn then(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::StepThen, Keyword::StepThen, dictionary)
    }

    pub fn and(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::StepAnd, Keyword::StepAnd, dictionary)
    }

    pub fn otherwise(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::StepOtherwise, Keyword::StepOtherwise, dictionary)
    }
}

impl NodeLexer for StartingKeywordLexer {
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line);
        let captures = self.pattern.captures(content)?;
        let keyword = group(&captures, 1);
        let value = group(&captures, 2).trim();
        let location = Location::of_content(line, line_number);

        let node = Node::new(self.node_type, location, content.trim()).with_data(NodeData::Step {
            keyword: keyword.to_string(),
            value: value.to_string(),
        });
        let result = LexicalAnalysisResult::node(node);
        if value.is_empty() {
            return Some(result.with_warning(LexicalWarning::new(
                format!("{} step has no content", self.node_type),
                location,
            )));
        }
        Some(result)
    }

    fn update_words(&mut self, dictionary: &Dictionary) {
        self.pattern.rebind(dictionary);
    }
}
