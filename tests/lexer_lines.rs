//! Line level lexing through the dispatcher
//!
//! One construct per test group, fed through the full English lexer so that priority order and
//! follow sets are exercised along with the individual node lexers.

use concordia::ast::{NodeType, TagSubType};
use concordia::dictionary::{BuiltinDictionaries, DictionaryProvider};
use concordia::lexing::lexers::{NamedNodeLexer, TableRowLexer};
use concordia::lexing::{Lexer, NodeLexer};
use concordia::testing::{english_lexer, lex_source, lex_with};
use rstest::rstest;

fn types(source: &str) -> Vec<NodeType> {
    lex_source(source)
        .nodes
        .iter()
        .map(|node| node.node_type)
        .collect()
}

#[rstest]
#[case("Given x # c", "Given x", "x")]
#[case(r##"Given x "#h""##, r##"Given x "#h""##, r##"x "#h""##)]
#[case(r##"Given x "#h" # c"##, r##"Given x "#h""##, r##"x "#h""##)]
#[case("When I click <#save>", "When I click <#save>", "I click <#save>")]
fn test_comments_are_stripped_from_steps(
    #[case] line: &str,
    #[case] content: &str,
    #[case] value: &str,
) {
    let result = lex_source(line);
    assert_eq!(result.nodes.len(), 1);
    assert_eq!(result.nodes[0].content, content);
    assert_eq!(result.nodes[0].value(), Some(value));
}

#[test]
fn test_comment_only_line_yields_nothing() {
    let mut lexer = english_lexer().expect("english lexer");
    assert!(!lexer.add_node_from_line("  # just a note", 1));
    assert!(lexer.nodes().is_empty());
}

#[test]
fn test_tags_on_one_line() {
    let result = lex_source("@one @hello( you, there ) @two");
    let names: Vec<_> = result.nodes.iter().filter_map(|n| n.name()).collect();

    assert_eq!(names, ["one", "hello", "two"]);
    assert_eq!(result.nodes[0].values(), None);
    assert_eq!(
        result.nodes[1].values(),
        Some(&["you".to_string(), "there".to_string()][..])
    );
    assert_eq!(result.nodes[2].values(), None);
    assert!(result.errors.is_empty());
}

#[rstest]
#[case("@ignore", TagSubType::Ignore)]
#[case("@IMPORTANCE(5)", TagSubType::Importance)]
#[case("@generate-only-valid-values", TagSubType::GenerateOnlyValidValues)]
fn test_reserved_tags(#[case] line: &str, #[case] sub_type: TagSubType) {
    let result = lex_source(line);
    assert_eq!(result.nodes[0].tag_sub_type(), Some(sub_type));
}

#[test]
fn test_invalid_tag_is_skipped_with_an_error() {
    let result = lex_source("@ok @1bad");
    assert_eq!(result.nodes.len(), 1);
    assert_eq!(result.errors.len(), 1);
}

#[test]
fn test_table_rows_keep_empty_cells() {
    let result = lex_source("Table: t\n|| a || b |");
    let row = &result.nodes[1];
    assert_eq!(row.node_type, NodeType::TableRow);
    assert_eq!(
        row.cells(),
        Some(&["".to_string(), "a".into(), "".into(), "b".into()][..])
    );
}

#[test]
fn test_unclosed_table_row_is_not_a_row() {
    assert!(TableRowLexer::new().analyze("| a", 1).is_none());
    assert_eq!(types("| a"), [NodeType::Text]);
}

#[test]
fn test_name_validity() {
    let dictionary = BuiltinDictionaries::shared()
        .dictionary("en")
        .expect("english dictionary");
    let lexer = NamedNodeLexer::feature(&dictionary);
    assert!(lexer.is_valid_name("A_"));
    assert!(!lexer.is_valid_name("-"));

    let result = lexer.analyze("Feature: -", 1).expect("feature line");
    assert_eq!(result.nodes.len(), 1);
    assert_eq!(result.errors.len(), 1);
}

#[rstest]
#[case("Feature: Login", NodeType::Feature)]
#[case("  Story: Login", NodeType::Feature)]
#[case("Background:", NodeType::Background)]
#[case("Variant Background:", NodeType::VariantBackground)]
#[case("Scenario: Sign in", NodeType::Scenario)]
#[case("Variant 2: Sign in again", NodeType::Variant)]
#[case("Test Case: Sign in 1", NodeType::TestCase)]
#[case("Constants:", NodeType::ConstantBlock)]
#[case("Regular Expressions:", NodeType::RegexBlock)]
#[case("Table: users", NodeType::Table)]
#[case("Database: main", NodeType::Database)]
#[case("UI Element: Login", NodeType::UiElement)]
#[case("Before All:", NodeType::BeforeAll)]
#[case("After Each Scenario:", NodeType::AfterEachScenario)]
#[case("import \"a.feature\"", NodeType::Import)]
#[case("#language: pt", NodeType::Language)]
#[case("but nothing else", NodeType::StepAnd)]
#[case("if it fails then retry", NodeType::StepOtherwise)]
#[case("\"\"\"", NodeType::LongString)]
#[case("just words", NodeType::Text)]
fn test_line_types(#[case] line: &str, #[case] node_type: NodeType) {
    assert_eq!(types(line), [node_type]);
}

#[test]
fn test_numbered_variant() {
    let result = lex_source("Variant 2: Again");
    assert_eq!(result.nodes[0].number(), Some(2));
    assert_eq!(result.nodes[0].name(), Some("Again"));
}

#[test]
fn test_empty_step_is_a_warning() {
    let result = lex_source("Given ,");
    assert_eq!(result.nodes.len(), 1);
    assert!(result.errors.is_empty());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_language_switch_mid_file() {
    let source = "#language:en\nFeature: X\n\n#language:pt\nCaracterística: Y";
    let result = lex_source(source);

    let features: Vec<_> = result
        .nodes
        .iter()
        .filter(|node| node.node_type == NodeType::Feature)
        .filter_map(|node| node.name())
        .collect();
    assert_eq!(features, ["X", "Y"]);
    assert!(result.errors.is_empty());
}

#[test]
fn test_regional_language_code() {
    let result = lex_source("#language: pt-BR\nCenário: S");
    assert_eq!(result.nodes[1].node_type, NodeType::Scenario);
}

#[test]
fn test_reused_lexer_matches_a_fresh_one() {
    let source = "#language: es\n@a @b(1)\nCaracterística: Z\n\"\"\"\nFeature: raw\n";
    let mut lexer = english_lexer().expect("english lexer");
    let first = lex_with(&mut lexer, source);
    let second = lex_with(&mut lexer, source);

    let mut fresh = Lexer::new("en", BuiltinDictionaries::shared(), false).expect("lexer");
    assert_eq!(first, second);
    assert_eq!(second, lex_with(&mut fresh, source));
}
