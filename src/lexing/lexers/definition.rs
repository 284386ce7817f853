//! `- "<name>" is <value>` lines in constant and regular expression blocks

use crate::ast::{ConstantValue, Location, Node, NodeData, NodeType};
use crate::dictionary::{Dictionary, Keyword};
use crate::error::LexicalError;
use crate::lexing::common::{
    group, is_number, is_valid_name, remove_comment, scan_quoted, KeywordPattern,
};
use crate::lexing::{LexicalAnalysisResult, NodeLexer};

fn is_pattern(keywords: &str) -> String {
    format!(r"^({keywords})\b\s*(.*)$")
}

/// A named definition
///
/// The value is either quoted or a bare number. Regular expression blocks only take quoted
/// values, so `- "x" is 1` is not a regular expression.
#[derive(Debug, Clone)]
pub struct DefinitionLexer {
    node_type: NodeType,
    numbers_allowed: bool,
    is_keyword: KeywordPattern,
}

impl DefinitionLexer {
    pub fn constant(dictionary: &Dictionary) -> Self {
        Self {
            node_type: NodeType::Constant,
            numbers_allowed: true,
            is_keyword: KeywordPattern::new(Keyword::Is, is_pattern, dictionary),
        }
    }

    pub fn regex(dictionary: &Dictionary) -> Self {
        Self {
            node_type: NodeType::Regex,
            numbers_allowed: false,
            is_keyword: KeywordPattern::new(Keyword::Is, is_pattern, dictionary),
        }
    }

    fn value(&self, text: &str) -> Option<ConstantValue> {
        if let Some((value, rest)) = scan_quoted(text) {
            return rest
                .trim()
                .is_empty()
                .then(|| ConstantValue::Text(value.to_string()));
        }
        (self.numbers_allowed && is_number(text)).then(|| ConstantValue::Number(text.to_string()))
    }
}

impl NodeLexer for DefinitionLexer {
    fn node_type(&self) -> NodeType {
        self.node_type
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line);
        let item = content.trim_start().strip_prefix('-')?.trim_start();
        let (name, after_name) = scan_quoted(item)?;
        let captures = self.is_keyword.captures(after_name.trim_start())?;
        let value = self.value(group(&captures, 2).trim())?;
        let location = Location::of_content(line, line_number);

        let node = Node::new(self.node_type, location, content.trim()).with_data(
            NodeData::Definition {
                name: name.to_string(),
                value,
            },
        );
        let result = LexicalAnalysisResult::node(node);
        if !is_valid_name(name) {
            return Some(result.with_error(LexicalError::new(
                format!("Invalid {} name: \"{name}\"", self.node_type),
                location,
            )));
        }
        Some(result)
    }

    fn update_words(&mut self, dictionary: &Dictionary) {
        self.is_keyword.rebind(dictionary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::lexers::english;
    use rstest::rstest;

    #[rstest]
    #[case(r#"- "pi" is 3.1416"#, "pi", ConstantValue::Number("3.1416".to_string()))]
    #[case(r#"  - "site" is "http://x.com""#, "site", ConstantValue::Text("http://x.com".to_string()))]
    #[case(r#"-"neg" IS -2 # negative"#, "neg", ConstantValue::Number("-2".to_string()))]
    #[case(r#"- "q" is "say \"hi\"""#, "q", ConstantValue::Text(r#"say \"hi\""#.to_string()))]
    fn test_constants(#[case] line: &str, #[case] name: &str, #[case] value: ConstantValue) {
        let result = DefinitionLexer::constant(&english())
            .analyze(line, 1)
            .expect("a constant");
        assert_eq!(
            result.nodes[0].data,
            NodeData::Definition {
                name: name.to_string(),
                value,
            }
        );
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_regex_requires_quoted_value() {
        let lexer = DefinitionLexer::regex(&english());
        assert!(lexer.analyze(r#"- "n" is 1"#, 1).is_none());
        let result = lexer.analyze(r##"- "hex" is "#[0-9a-f]+""##, 1).expect("a regex");
        assert_eq!(result.nodes[0].value(), Some("#[0-9a-f]+"));
    }

    #[rstest]
    #[case(r#"- "x" equals 1"#)]
    #[case(r#"- "x" is one"#)]
    #[case(r#"- x is 1"#)]
    #[case(r#""x" is 1"#)]
    #[case(r#"- "x" island 1"#)]
    fn test_not_a_definition(#[case] line: &str) {
        assert!(DefinitionLexer::constant(&english()).analyze(line, 1).is_none());
    }

    #[test]
    fn test_invalid_name_keeps_node() {
        let result = DefinitionLexer::constant(&english())
            .analyze(r#"- "1x" is 1"#, 1)
            .expect("a constant");
        assert_eq!(result.errors.len(), 1);
    }
}
