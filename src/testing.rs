//! Helpers for lexing and parsing source text in tests
//!
//!     Everything here uses the built-in English dictionary and never stops on errors.

use crate::ast::Document;
use crate::dictionary::BuiltinDictionaries;
use crate::error::{DictionaryError, SyntacticError};
use crate::lexing::{Lexer, LexicalAnalysisResult};
use crate::parsing::Parser;

pub fn english_lexer() -> Result<Lexer, DictionaryError> {
    Lexer::new("en", BuiltinDictionaries::shared(), false)
}

/// Lexes `source` line by line with a fresh English lexer.
pub fn lex_source(source: &str) -> LexicalAnalysisResult {
    match english_lexer() {
        Ok(mut lexer) => lex_with(&mut lexer, source),
        Err(error) => panic!("the built-in English dictionary must load: {error}"),
    }
}

/// Lexes `source` with an existing lexer, then resets it.
pub fn lex_with(lexer: &mut Lexer, source: &str) -> LexicalAnalysisResult {
    for (index, line) in source.lines().enumerate() {
        lexer.add_node_from_line(line, index + 1);
    }
    lexer.finish()
}

/// Lexes and parses `source`. Lexical errors are dropped; only syntactic ones are returned.
pub fn parse_source(source: &str) -> (Document, Vec<SyntacticError>) {
    let lexed = lex_source(source);
    let mut errors = Vec::new();
    let doc = Parser::new(false).analyze(&lexed.nodes, Document::new(), &mut errors);
    (doc, errors)
}
