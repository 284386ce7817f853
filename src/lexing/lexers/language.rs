//! `#language: pt` declarations

use crate::ast::{Location, Node, NodeData, NodeType};
use crate::dictionary::{Dictionary, Keyword, UNIVERSAL_LANGUAGE_KEYWORD};
use crate::lexing::common::{group, KeywordPattern};
use crate::lexing::{LexicalAnalysisResult, NodeLexer};

fn language_pattern(keywords: &str) -> String {
    format!(r"^\s*#\s*({keywords})\s*:\s*([\p{{L}}\p{{N}}_-]+)\s*(?:#.*)?$")
}

/// Written as a comment, so it sees the raw line; a trailing `# note` after the code is
/// allowed. The English word is always accepted, which lets a file switch back from any
/// language.
#[derive(Debug, Clone)]
pub struct LanguageLexer {
    pattern: KeywordPattern,
}

impl LanguageLexer {
    pub fn new(dictionary: &Dictionary) -> Self {
        let mut lexer = Self {
            pattern: KeywordPattern::new(Keyword::Language, language_pattern, dictionary),
        };
        lexer.update_words(dictionary);
        lexer
    }
}

impl NodeLexer for LanguageLexer {
    fn node_type(&self) -> NodeType {
        NodeType::Language
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let captures = self.pattern.captures(line)?;
        let value = group(&captures, 2);
        let end = captures.get(2).map_or(line.len(), |m| m.end());
        let node = Node::new(
            NodeType::Language,
            Location::of_content(line, line_number),
            line[..end].trim(),
        )
        .with_data(NodeData::Value {
            value: value.to_string(),
        });
        Some(LexicalAnalysisResult::node(node))
    }

    fn update_words(&mut self, dictionary: &Dictionary) {
        let mut words = dictionary.words(Keyword::Language).to_vec();
        words.push(UNIVERSAL_LANGUAGE_KEYWORD.to_string());
        self.pattern.set_words(words);
    }
}
