//! Headers with a name: `Feature: Login`, `Variant 2: Happy path`

use crate::ast::{Location, Node, NodeData, NodeType};
use crate::dictionary::{Dictionary, Keyword};
use crate::error::LexicalError;
use crate::lexing::common::{group, is_valid_name, remove_comment, KeywordPattern};
use crate::lexing::{LexicalAnalysisResult, NodeLexer};

fn named_pattern(keywords: &str) -> String {
    format!(r"^\s*({keywords})\s*:\s*(.*)$")
}

fn numbered_pattern(keywords: &str) -> String {
    format!(r"^\s*({keywords})(?:\s*(\d+))?\s*:\s*(.*)$")
}

fn name_error(node_type: NodeType, name: &str, location: Location) -> Option<LexicalError> {
    if name.is_empty() {
        Some(LexicalError::new(
            format!("{node_type} has no name"),
            location,
        ))
    } else if !is_valid_name(name) {
        Some(LexicalError::new(
            format!("Invalid {node_type} name: \"{name}\""),
            location,
        ))
    } else {
        None
    }
}

/// `<keyword>: <name>`
///
/// A malformed name still produces the node, along with an error.
#[derive(Debug, Clone)]
pub struct NamedNodeLexer {
    node_type: NodeType,
    pattern: KeywordPattern,
}

impl NamedNodeLexer {
    pub fn new(node_type: NodeType, keyword: Keyword, dictionary: &Dictionary) -> Self {
        Self {
            node_type,
            pattern: KeywordPattern::new(keyword, named_pattern, dictionary),
        }
    }

    pub fn feature(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::Feature, Keyword::Feature, dictionary)
    }

    pub fn scenario(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::Scenario, Keyword::Scenario, dictionary)
    }

    pub fn test_case(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::TestCase, Keyword::TestCase, dictionary)
    }

    pub fn table(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::Table, Keyword::Table, dictionary)
    }

    pub fn database(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::Database, Keyword::Database, dictionary)
    }

    pub fn ui_element(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::UiElement, Keyword::UiElement, dictionary)
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        is_valid_name(name)
    }
}

impl NodeLexer for NamedNodeLexer {
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line);
        let captures = self.pattern.captures(content)?;
        let name = group(&captures, 2).trim();
        let location = Location::of_content(line, line_number);

        let node = Node::new(self.node_type, location, content.trim()).with_data(NodeData::Name {
            name: name.to_string(),
        });
        let mut result = LexicalAnalysisResult::node(node);
        if let Some(error) = name_error(self.node_type, name, location) {
            result = result.with_error(error);
        }
        Some(result)
    }

    fn update_words(&mut self, dictionary: &Dictionary) {
        self.pattern.rebind(dictionary);
    }
}

/// `<keyword> [number]: <name>`
#[derive(Debug, Clone)]
pub struct NamePlusNumberNodeLexer {
    node_type: NodeType,
    pattern: KeywordPattern,
}

impl NamePlusNumberNodeLexer {
    pub fn new(node_type: NodeType, keyword: Keyword, dictionary: &Dictionary) -> Self {
        Self {
            node_type,
            pattern: KeywordPattern::new(keyword, numbered_pattern, dictionary),
        }
    }

    pub fn variant(dictionary: &Dictionary) -> Self {
        Self::new(NodeType::Variant, Keyword::Variant, dictionary)
    }
}

impl NodeLexer for NamePlusNumberNodeLexer {
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line);
        let captures = self.pattern.captures(content)?;
        let location = Location::of_content(line, line_number);
        let name = group(&captures, 3).trim();
        let mut errors = Vec::new();

        let number = match captures.get(2) {
            None => None,
            Some(digits) => match digits.as_str().parse::<u32>() {
                Ok(number) => Some(number),
                Err(_) => {
                    errors.push(LexicalError::new(
                        format!("Invalid {} number: {}", self.node_type, digits.as_str()),
                        location,
                    ));
                    None
                }
            },
        };
        errors.extend(name_error(self.node_type, name, location));

        let node = Node::new(self.node_type, location, content.trim()).with_data(
            NodeData::NumberedName {
                name: name.to_string(),
                number,
            },
        );
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::lexers::english;
    use rstest::rstest;

    #[rstest]
    #[case("Feature: Login", "Login")]
    #[case("  feature :  Área 51  # comment", "Área 51")]
    #[case("User Story: v1.2-beta", "v1.2-beta")]
    fn test_feature_names(#[case] line: &str, #[case] name: &str) {
        let result = NamedNodeLexer::feature(&english())
            .analyze(line, 1)
            .expect("a feature");
        assert_eq!(result.nodes[0].name(), Some(name));
        assert!(result.errors.is_empty());
    }

    #[rstest]
    #[case("Feature: 1st")]
    #[case("Feature: name!")]
    #[case("Feature:")]
    fn test_bad_names_keep_the_node(#[case] line: &str) {
        let result = NamedNodeLexer::feature(&english())
            .analyze(line, 3)
            .expect("a feature");
        assert_eq!(result.nodes.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].location, Location::new(3, 1));
    }

    #[test]
    fn test_requires_colon() {
        let lexer = NamedNodeLexer::scenario(&english());
        assert!(lexer.analyze("Scenario Login", 1).is_none());
        assert!(lexer.analyze("The scenario: x", 1).is_none());
    }

    #[test]
    fn test_ui_element_multi_word_keyword() {
        let result = NamedNodeLexer::ui_element(&english())
            .analyze("UI  Element: Login Button", 1)
            .expect("a ui element");
        assert_eq!(result.nodes[0].node_type, NodeType::UiElement);
        assert_eq!(result.nodes[0].name(), Some("Login Button"));
    }

    #[rstest]
    #[case("Variant: Happy path", None)]
    #[case("Variant 2: Happy path", Some(2))]
    #[case("variant3: Happy path", Some(3))]
    fn test_variant(#[case] line: &str, #[case] number: Option<u32>) {
        let result = NamePlusNumberNodeLexer::variant(&english())
            .analyze(line, 1)
            .expect("a variant");
        assert_eq!(result.nodes[0].name(), Some("Happy path"));
        assert_eq!(result.nodes[0].number(), number);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_variant_background_is_not_a_variant() {
        let lexer = NamePlusNumberNodeLexer::variant(&english());
        assert!(lexer.analyze("Variant Background:", 1).is_none());
    }
}
