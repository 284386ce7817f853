//! Node lexers
//!
//!     One lexer per construct. Keyword-driven lexers hold a [`KeywordPattern`] and rebuild it
//!     in [`NodeLexer::update_words`]; structural lexers (list items, table rows, long strings,
//!     text) match on punctuation only and keep the default no-op.
//!
//!     [`standard_lexers`] builds the full set in priority order. The order matters: tags and
//!     imports are tried before headers, headers before steps, and [`TextLexer`] always last
//!     because it accepts any non-empty line.
//!
//! [`KeywordPattern`]: super::common::KeywordPattern

mod block;
mod definition;
mod language;
mod list_item;
mod long_string;
mod named;
mod quoted;
mod starting_keyword;
mod table_row;
mod tag;
mod text;

pub use block::BlockLexer;
pub use definition::DefinitionLexer;
pub use language::LanguageLexer;
pub use list_item::ListItemLexer;
pub use long_string::LongStringLexer;
pub use named::{NamePlusNumberNodeLexer, NamedNodeLexer};
pub use quoted::QuotedNodeLexer;
pub use starting_keyword::StartingKeywordLexer;
pub use table_row::TableRowLexer;
pub use tag::{TagLexer, TagSubLexer};
pub use text::TextLexer;

use super::NodeLexer;
use crate::ast::TestEventKind;
use crate::dictionary::Dictionary;

/// Every lexer, in the order they are tried when no suggestion matches.
pub fn standard_lexers(dictionary: &Dictionary) -> Vec<Box<dyn NodeLexer>> {
    let mut lexers: Vec<Box<dyn NodeLexer>> = vec![
        Box::new(LongStringLexer::new()),
        Box::new(LanguageLexer::new(dictionary)),
        Box::new(QuotedNodeLexer::import(dictionary)),
        Box::new(TagLexer::new(dictionary)),
        Box::new(NamedNodeLexer::feature(dictionary)),
        Box::new(BlockLexer::background(dictionary)),
        Box::new(BlockLexer::variant_background(dictionary)),
        Box::new(NamedNodeLexer::scenario(dictionary)),
        Box::new(NamePlusNumberNodeLexer::variant(dictionary)),
        Box::new(NamedNodeLexer::test_case(dictionary)),
        Box::new(BlockLexer::constants(dictionary)),
        Box::new(BlockLexer::regular_expressions(dictionary)),
        Box::new(NamedNodeLexer::table(dictionary)),
        Box::new(NamedNodeLexer::database(dictionary)),
        Box::new(NamedNodeLexer::ui_element(dictionary)),
    ];
    for kind in TestEventKind::ALL {
        lexers.push(Box::new(BlockLexer::test_event(kind, dictionary)));
    }
    lexers.extend([
        Box::new(StartingKeywordLexer::given(dictionary)) as Box<dyn NodeLexer>,
        Box::new(StartingKeywordLexer::when(dictionary)),
        Box::new(StartingKeywordLexer::then(dictionary)),
        Box::new(StartingKeywordLexer::and(dictionary)),
        Box::new(StartingKeywordLexer::otherwise(dictionary)),
        Box::new(DefinitionLexer::constant(dictionary)),
        Box::new(DefinitionLexer::regex(dictionary)),
        Box::new(TableRowLexer::new()),
        Box::new(ListItemLexer::ui_property()),
        Box::new(ListItemLexer::database_property()),
        Box::new(TextLexer::new()),
    ]);
    lexers
}

#[cfg(test)]
pub(crate) fn english() -> std::sync::Arc<Dictionary> {
    use crate::dictionary::{BuiltinDictionaries, DictionaryProvider};
    BuiltinDictionaries::shared()
        .dictionary("en")
        .expect("english dictionary")
}
