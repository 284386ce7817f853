//! `@name` and `@name(value, ...)` tags, several per line

use crate::ast::{Location, Node, NodeData, NodeType, TagSubType};
use crate::dictionary::{Dictionary, Keyword};
use crate::error::LexicalError;
use crate::lexing::common::remove_comment;
use crate::lexing::{LexicalAnalysisResult, NodeLexer};
use once_cell::sync::Lazy;
use regex::Regex;

const TAG_PREFIX: char = '@';
const TAG_SEPARATOR: &str = " @";

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\p{L}[\p{L}\p{N}_-]*)\s*(?:\((.*)\))?$").expect("valid tag pattern")
});

fn sub_type_keyword(sub_type: TagSubType) -> Keyword {
    match sub_type {
        TagSubType::Feature => Keyword::TagFeature,
        TagSubType::Scenario => Keyword::TagScenario,
        TagSubType::Variant => Keyword::TagVariant,
        TagSubType::Generated => Keyword::TagGenerated,
        TagSubType::Fail => Keyword::TagFail,
        TagSubType::Ignore => Keyword::TagIgnore,
        TagSubType::Global => Keyword::TagGlobal,
        TagSubType::Importance => Keyword::TagImportance,
        TagSubType::GenerateOnlyValidValues => Keyword::TagGenerateOnlyValidValues,
    }
}

/// Recognizes the reserved tag names of one sub-type
#[derive(Debug, Clone)]
pub struct TagSubLexer {
    sub_type: TagSubType,
    words: Vec<String>,
}

impl TagSubLexer {
    pub fn new(sub_type: TagSubType, dictionary: &Dictionary) -> Self {
        let mut lexer = Self {
            sub_type,
            words: Vec::new(),
        };
        lexer.update_words(dictionary);
        lexer
    }

    pub fn sub_type(&self) -> TagSubType {
        self.sub_type
    }

    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.words.iter().any(|word| word.to_lowercase() == name)
    }

    pub fn update_words(&mut self, dictionary: &Dictionary) {
        self.words = dictionary
            .words(sub_type_keyword(self.sub_type))
            .iter()
            .map(|word| word.trim().to_string())
            .collect();
    }
}

/// Splits a tag line into one node per tag
///
/// Tags are separated by ` @`. Each node gets the location of its own `@`. A malformed tag is
/// reported and skipped; the other tags on the line are kept.
#[derive(Debug, Clone)]
pub struct TagLexer {
    sub_lexers: Vec<TagSubLexer>,
}

impl TagLexer {
    pub fn new(dictionary: &Dictionary) -> Self {
        Self {
            sub_lexers: TagSubType::ALL
                .into_iter()
                .map(|sub_type| TagSubLexer::new(sub_type, dictionary))
                .collect(),
        }
    }

    fn sub_type(&self, name: &str) -> Option<TagSubType> {
        self.sub_lexers
            .iter()
            .find(|lexer| lexer.matches(name))
            .map(TagSubLexer::sub_type)
    }

    fn tag_node(&self, text: &str, location: Location) -> Result<Node, LexicalError> {
        let invalid = || LexicalError::new(format!("Invalid tag: \"{text}\""), location);
        let body = text.strip_prefix(TAG_PREFIX).ok_or_else(invalid)?.trim();
        let captures = TAG_REGEX.captures(body).ok_or_else(invalid)?;
        let name = captures.get(1).map_or("", |m| m.as_str());
        // Empty entries keep their position; only a blank list is empty
        let values = captures.get(2).map(|m| match m.as_str().trim() {
            "" => Vec::new(),
            inner => inner.split(',').map(|value| value.trim().to_string()).collect(),
        });

        Ok(
            Node::new(NodeType::Tag, location, text).with_data(NodeData::Tag {
                name: name.to_string(),
                sub_type: self.sub_type(name),
                values,
            }),
        )
    }
}

impl NodeLexer for TagLexer {
    fn node_type(&self) -> NodeType {
        NodeType::Tag
    }

    fn analyze(&self, line: &str, line_number: usize) -> Option<LexicalAnalysisResult> {
        let content = remove_comment(line).trim_end();
        let body = content.trim_start();
        if !body.starts_with(TAG_PREFIX) {
            return None;
        }
        let indent = content.len() - body.len();

        let mut starts = vec![0];
        starts.extend(body.match_indices(TAG_SEPARATOR).map(|(index, _)| index + 1));
        let mut result = LexicalAnalysisResult::default();
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).map_or(body.len(), |&next| next - 1);
            let text = body[start..end].trim();
            let column = line[..indent + start].chars().count() + 1;
            match self.tag_node(text, Location::new(line_number, column)) {
                Ok(node) => result.nodes.push(node),
                Err(error) => result.errors.push(error),
            }
        }
        Some(result)
    }

    fn update_words(&mut self, dictionary: &Dictionary) {
        for lexer in &mut self.sub_lexers {
            lexer.update_words(dictionary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::lexers::english;

    #[test]
    fn test_several_tags_on_a_line() {
        let result = TagLexer::new(&english())
            .analyze("@one @hello( you, there ) @two", 1)
            .expect("tags");

        assert!(result.errors.is_empty());
        let names: Vec<_> = result.nodes.iter().filter_map(Node::name).collect();
        assert_eq!(names, ["one", "hello", "two"]);
        assert_eq!(result.nodes[0].values(), None);
        assert_eq!(
            result.nodes[1].values(),
            Some(&["you".to_string(), "there".to_string()][..])
        );
        let columns: Vec<_> = result.nodes.iter().map(|n| n.location.column).collect();
        assert_eq!(columns, [1, 6, 27]);
    }

    #[test]
    fn test_sub_types_are_resolved() {
        let result = TagLexer::new(&english())
            .analyze("  @Importance(8) @generate-only-valid-values @custom", 2)
            .expect("tags");

        let sub_types: Vec<_> = result.nodes.iter().map(Node::tag_sub_type).collect();
        assert_eq!(
            sub_types,
            [
                Some(TagSubType::Importance),
                Some(TagSubType::GenerateOnlyValidValues),
                None
            ]
        );
        assert_eq!(result.nodes[0].location, Location::new(2, 3));
    }

    #[test]
    fn test_invalid_tag_is_skipped() {
        let result = TagLexer::new(&english())
            .analyze("@ok @1bad @fine # trailing", 1)
            .expect("tags");
        assert_eq!(result.nodes.len(), 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].location, Location::new(1, 5));
    }

    #[test]
    fn test_empty_values() {
        let result = TagLexer::new(&english()).analyze("@x()", 1).expect("tags");
        assert_eq!(result.nodes[0].values(), Some(&[][..]));
    }

    #[test]
    fn test_empty_entries_keep_their_position() {
        let result = TagLexer::new(&english())
            .analyze("@x(a,,b) @y( , c)", 1)
            .expect("tags");
        assert_eq!(
            result.nodes[0].values(),
            Some(&["a".to_string(), String::new(), "b".to_string()][..])
        );
        assert_eq!(
            result.nodes[1].values(),
            Some(&[String::new(), "c".to_string()][..])
        );
    }

    #[test]
    fn test_not_a_tag_line() {
        assert!(TagLexer::new(&english()).analyze("Feature: @x", 1).is_none());
    }
}
