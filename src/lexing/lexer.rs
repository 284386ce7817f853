//! The lexer dispatcher
//!
//!     [`Lexer`] feeds lines to the node lexers and accumulates what they produce for one file.
//!     Per line it tries the follow set of the last matching lexer, then the full priority
//!     list. The first lexer that accepts the line wins.
//!
//!     Two modes change how a match is handled:
//!
//!     - Long strings. A `"""` line toggles the mode. While it is on, every other line becomes a
//!       `Text` node holding the raw trimmed line and lexer diagnostics are dropped.
//!     - Language switches. A `#language:` line naming a language other than the active one
//!       rebinds every lexer to that language's dictionary for the rest of the file. An
//!       unknown language is a lexical error and the active language stays.
//!
//!     A lexer is reused across files by calling [`Lexer::reset`] in between, which also
//!     restores the default language.

use super::lexers::standard_lexers;
use super::{LexicalAnalysisResult, NodeLexer};
use crate::ast::{Location, Node, NodeData, NodeType};
use crate::dictionary::{Dictionary, DictionaryProvider};
use crate::error::{DictionaryError, LexicalError, LexicalWarning};
use std::collections::HashMap;
use std::sync::Arc;

pub struct Lexer {
    provider: Arc<dyn DictionaryProvider>,
    default_dictionary: Arc<Dictionary>,
    stop_on_first_error: bool,
    lexers: Vec<Box<dyn NodeLexer>>,
    index: HashMap<NodeType, usize>,
    // Per-file state
    language: String,
    nodes: Vec<Node>,
    errors: Vec<LexicalError>,
    warnings: Vec<LexicalWarning>,
    in_long_string: bool,
    last_lexer: Option<usize>,
}

impl Lexer {
    /// Fails only when there is no dictionary for `default_language`.
    pub fn new(
        default_language: &str,
        provider: Arc<dyn DictionaryProvider>,
        stop_on_first_error: bool,
    ) -> Result<Self, DictionaryError> {
        let default_dictionary = provider.dictionary(default_language)?;
        let lexers = standard_lexers(&default_dictionary);
        let index = lexers
            .iter()
            .enumerate()
            .map(|(i, lexer)| (lexer.node_type(), i))
            .collect();
        Ok(Self {
            provider,
            language: default_dictionary.language().to_string(),
            default_dictionary,
            stop_on_first_error,
            lexers,
            index,
            nodes: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            in_long_string: false,
            last_lexer: None,
        })
    }

    pub fn default_language(&self) -> &str {
        self.default_dictionary.language()
    }

    /// Language of the dictionary the lexers are currently bound to.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[LexicalWarning] {
        &self.warnings
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn in_long_string(&self) -> bool {
        self.in_long_string
    }

    /// Lexes one line. Returns whether a lexer accepted it.
    ///
    /// `line_number` is 1-based. Blank lines are skipped, as is everything once an error was
    /// recorded if the lexer stops on the first error.
    pub fn add_node_from_line(&mut self, line: &str, line_number: usize) -> bool {
        if (self.stop_on_first_error && self.has_errors()) || line.trim().is_empty() {
            return false;
        }
        if self.in_long_string {
            self.add_long_string_line(line, line_number);
            return true;
        }

        let Some((lexer, result)) = self.analyze(line, line_number) else {
            return false;
        };
        self.last_lexer = Some(lexer);
        self.accept(result);
        true
    }

    /// Suggested lexers first, then every lexer in priority order.
    fn analyze(&self, line: &str, line_number: usize) -> Option<(usize, LexicalAnalysisResult)> {
        let suggested = self
            .last_lexer
            .map_or(&[][..], |last| self.lexers[last].suggested_next_node_types());
        suggested
            .iter()
            .filter_map(|node_type| self.index.get(node_type).copied())
            .chain(0..self.lexers.len())
            .find_map(|i| self.lexers[i].analyze(line, line_number).map(|r| (i, r)))
    }

    fn add_long_string_line(&mut self, line: &str, line_number: usize) {
        let long_string = self.index[&NodeType::LongString];
        if let Some(result) = self.lexers[long_string].analyze(line, line_number) {
            self.in_long_string = false;
            self.last_lexer = Some(long_string);
            self.nodes.extend(result.nodes);
            return;
        }
        let content = line.trim();
        self.nodes.push(
            Node::new(
                NodeType::Text,
                Location::of_content(line, line_number),
                content,
            )
            .with_data(NodeData::Value {
                value: content.to_string(),
            }),
        );
    }

    fn accept(&mut self, result: LexicalAnalysisResult) {
        let LexicalAnalysisResult {
            nodes,
            errors,
            warnings,
        } = result;
        self.errors.extend(errors);
        self.warnings.extend(warnings);

        for node in nodes {
            match node.node_type {
                NodeType::LongString => self.in_long_string = true,
                NodeType::Language => {
                    if let Some(language) = node.value() {
                        self.switch_language(language.to_string(), node.location);
                    }
                }
                _ => {}
            }
            self.nodes.push(node);
        }
    }

    fn switch_language(&mut self, language: String, location: Location) {
        if language.eq_ignore_ascii_case(&self.language) {
            return;
        }
        match self.provider.dictionary(&language) {
            Ok(dictionary) => {
                tracing::debug!(from = %self.language, to = %language, "switching language");
                self.bind(&dictionary);
                self.language = language;
            }
            Err(error) => {
                tracing::debug!(%language, %error, "language switch failed");
                self.errors.push(LexicalError::new(
                    format!("Unsupported language \"{language}\": {error}"),
                    location,
                ));
            }
        }
    }

    fn bind(&mut self, dictionary: &Dictionary) {
        for lexer in &mut self.lexers {
            lexer.update_words(dictionary);
        }
    }

    /// Clears the per-file state and goes back to the default language.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.errors.clear();
        self.warnings.clear();
        self.in_long_string = false;
        self.last_lexer = None;
        if self.language != self.default_dictionary.language() {
            let dictionary = Arc::clone(&self.default_dictionary);
            self.bind(&dictionary);
            self.language = dictionary.language().to_string();
        }
    }

    /// Like [`reset`](Self::reset), but rebinds the default words even when the language looks
    /// unchanged. For lexers left in an unknown state, such as after a panic mid-line.
    pub fn recover(&mut self) {
        self.reset();
        let dictionary = Arc::clone(&self.default_dictionary);
        self.bind(&dictionary);
        self.language = dictionary.language().to_string();
    }

    /// Takes everything lexed so far and resets.
    pub fn finish(&mut self) -> LexicalAnalysisResult {
        let result = LexicalAnalysisResult {
            nodes: std::mem::take(&mut self.nodes),
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        };
        self.reset();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::BuiltinDictionaries;

    fn lexer() -> Lexer {
        Lexer::new("en", BuiltinDictionaries::shared(), false).expect("english lexer")
    }

    fn lex(lexer: &mut Lexer, source: &str) {
        for (i, line) in source.lines().enumerate() {
            lexer.add_node_from_line(line, i + 1);
        }
    }

    fn types(lexer: &Lexer) -> Vec<NodeType> {
        lexer.nodes().iter().map(|n| n.node_type).collect()
    }

    #[test]
    fn test_unknown_default_language_is_fatal() {
        assert!(Lexer::new("xx", BuiltinDictionaries::shared(), false).is_err());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut lexer = lexer();
        assert!(!lexer.add_node_from_line("   ", 1));
        assert!(lexer.nodes().is_empty());
    }

    #[test]
    fn test_long_string_content_is_text() {
        let mut lexer = lexer();
        lex(
            &mut lexer,
            "Given a document\n\"\"\"\nFeature: not a feature # kept\n@not a tag\n\"\"\"\nThen done",
        );

        assert_eq!(
            types(&lexer),
            [
                NodeType::StepGiven,
                NodeType::LongString,
                NodeType::Text,
                NodeType::Text,
                NodeType::LongString,
                NodeType::StepThen,
            ]
        );
        assert_eq!(lexer.nodes()[2].content, "Feature: not a feature # kept");
        assert!(lexer.errors().is_empty());
        assert!(!lexer.in_long_string());
    }

    #[test]
    fn test_language_switch_rebinds_keywords() {
        let mut lexer = lexer();
        lex(&mut lexer, "#language: pt\nCaracterística: Y\nFeature: Z");

        assert_eq!(lexer.language(), "pt");
        assert_eq!(
            types(&lexer),
            [NodeType::Language, NodeType::Feature, NodeType::Text]
        );
        assert_eq!(lexer.nodes()[1].name(), Some("Y"));
    }

    #[test]
    fn test_unknown_language_keeps_current() {
        let mut lexer = lexer();
        lex(&mut lexer, "#language: xx\nFeature: Z");

        assert_eq!(lexer.language(), "en");
        assert_eq!(lexer.errors().len(), 1);
        assert_eq!(lexer.nodes()[1].node_type, NodeType::Feature);
    }

    #[test]
    fn test_reset_restores_default_language() {
        let mut lexer = lexer();
        lex(&mut lexer, "#language: pt\n\"\"\"");
        lexer.reset();

        assert_eq!(lexer.language(), "en");
        assert!(!lexer.in_long_string());
        assert!(lexer.nodes().is_empty());
        lex(&mut lexer, "Feature: X");
        assert_eq!(types(&lexer), [NodeType::Feature]);
    }

    #[test]
    fn test_stop_on_first_error() {
        let mut lexer =
            Lexer::new("en", BuiltinDictionaries::shared(), true).expect("english lexer");
        assert!(lexer.add_node_from_line("Feature: 1bad", 1));
        assert!(!lexer.add_node_from_line("Scenario: ok", 2));
        assert_eq!(lexer.nodes().len(), 1);
    }

    #[test]
    fn test_follow_set_tells_regex_from_constant() {
        let mut lexer = lexer();
        lex(
            &mut lexer,
            "Regular Expressions:\n  - \"id\" is \"[0-9]+\"\nConstants:\n  - \"pi\" is \"3\"",
        );
        assert_eq!(
            types(&lexer),
            [
                NodeType::RegexBlock,
                NodeType::Regex,
                NodeType::ConstantBlock,
                NodeType::Constant,
            ]
        );
    }

    #[test]
    fn test_finish_takes_and_resets() {
        let mut lexer = lexer();
        lex(&mut lexer, "Feature: 1bad");
        let result = lexer.finish();
        assert_eq!(result.nodes.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert!(lexer.nodes().is_empty());
        assert!(lexer.errors().is_empty());
    }
}
