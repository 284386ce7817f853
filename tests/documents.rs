//! Whole documents, lexed and parsed

use concordia::ast::{Document, Location, Node, NodeData, NodeType, TagSubType, TestEventKind};
use concordia::parsing::Parser;
use concordia::testing::{lex_source, parse_source};

const SIGN_IN: &str = r##"#language: en
import "shared/ui.feature"

@importance(8)
Feature: Sign in
  As a registered user
  I want to sign in

Background:
  Given that I am on the login page

@scenario(1)
Scenario: Successful sign in
  Given that I am on the login page
  When I fill <#username> with "bob"
  Then I see "Welcome"

  Variant Background:
    Given that I am a new visitor

  @generated
  Variant: Sign in with valid credentials
    Given that I visit the [Login Screen]
    When I fill {Username}
    And I click on {Sign In}
    Then I see "Welcome"
    Otherwise I see "Invalid credentials"

UI Element: Username
  - id is "#username"
  - min length is 3

Constants:
  - "App Name" is "Acme"
  - "max tries" is 3

Regular Expressions:
  - "email" is "[a-z]+@[a-z]+"

Table: users
  | name | password |
  | bob  | 123456   |

Database: main
  - type is "sqlite"
  - path is "./db.sqlite"

Before Each Scenario:
  Given I connect to the database main

Test Case: Sign in 1
  Given that I visit the url "/login"
  Then I see "Welcome"
"##;

#[test]
fn test_sign_in_document_is_clean() {
    let lexed = lex_source(SIGN_IN);
    assert!(lexed.errors.is_empty(), "{:?}", lexed.errors);
    assert!(lexed.warnings.is_empty(), "{:?}", lexed.warnings);

    let (_, errors) = parse_source(SIGN_IN);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn test_sign_in_document_header() {
    let (doc, _) = parse_source(SIGN_IN);
    assert_eq!(doc.language_value(), Some("en"));
    assert_eq!(doc.import_values().collect::<Vec<_>>(), ["shared/ui.feature"]);

    let feature = doc.feature.expect("feature");
    assert_eq!(feature.name(), Some("Sign in"));
    assert_eq!(feature.tags[0].tag_sub_type(), Some(TagSubType::Importance));
    assert_eq!(feature.description.len(), 2);
    assert_eq!(feature.background.expect("background").steps.len(), 1);
    assert_eq!(feature.ui_elements[0].properties.len(), 2);
}

#[test]
fn test_sign_in_scenario() {
    let (doc, _) = parse_source(SIGN_IN);
    let feature = doc.feature.expect("feature");
    let scenario = &feature.scenarios[0];

    assert_eq!(scenario.tags[0].tag_sub_type(), Some(TagSubType::Scenario));
    assert_eq!(scenario.steps.len(), 3);
    assert_eq!(
        scenario.background.as_ref().map(|b| b.steps.len()),
        Some(1)
    );

    let variant = &scenario.variants[0];
    assert_eq!(variant.tags[0].tag_sub_type(), Some(TagSubType::Generated));
    let step_types: Vec<_> = variant.steps.iter().map(|s| s.node_type).collect();
    assert_eq!(
        step_types,
        [
            NodeType::StepGiven,
            NodeType::StepWhen,
            NodeType::StepAnd,
            NodeType::StepThen,
            NodeType::StepOtherwise,
        ]
    );
}

#[test]
fn test_sign_in_definitions_and_data() {
    let (doc, _) = parse_source(SIGN_IN);

    let constants = doc.constant_block.as_ref().expect("constants");
    let values: Vec<_> = constants.items.iter().filter_map(Node::value).collect();
    assert_eq!(values, ["Acme", "3"]);
    assert_eq!(constants.items[0].name(), Some("App Name"));

    let regexes = doc.regex_block.as_ref().expect("regular expressions");
    assert_eq!(regexes.items[0].value(), Some("[a-z]+@[a-z]+"));

    assert_eq!(
        doc.tables[0].rows[1].cells(),
        Some(&["bob".to_string(), "123456".to_string()][..])
    );
    assert_eq!(doc.databases[0].properties.len(), 2);
    assert_eq!(
        doc.test_event(TestEventKind::BeforeEachScenario)
            .map(|event| event.steps.len()),
        Some(1)
    );
    assert_eq!(doc.test_cases[0].steps.len(), 2);
}

#[test]
fn test_portuguese_document() {
    let source = "#language: pt\n\
        Funcionalidade: Entrar\n\
        Cenário: Sucesso\n  \
        Dado que estou na tela de login\n  \
        Quando eu clico em {Entrar}\n  \
        Então eu vejo \"Bem-vindo\"\n";
    let (doc, errors) = parse_source(source);

    assert!(errors.is_empty(), "{errors:?}");
    let feature = doc.feature.expect("feature");
    assert_eq!(feature.name(), Some("Entrar"));
    assert_eq!(feature.scenarios[0].steps.len(), 3);
}

#[test]
fn test_duplicate_feature_guard() {
    let feature = |line: usize, name: &str| {
        Node::new(NodeType::Feature, Location::new(line, 1), format!("Feature: {name}"))
            .with_data(NodeData::Name {
                name: name.to_string(),
            })
    };
    let nodes = [feature(1, "A"), feature(2, "B")];
    let mut errors = Vec::new();
    let doc = Parser::new(false).analyze(&nodes, Document::new(), &mut errors);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location, Location::new(2, 1));
    assert_eq!(doc.feature.map(|f| f.node), Some(nodes[0].clone()));
}

#[test]
fn test_misplaced_nodes_do_not_stop_parsing() {
    let (doc, errors) = parse_source(
        "Given orphan\nFeature: F\nBackground:\nScenario: S\nBackground:\n  Given x\n",
    );

    assert_eq!(errors.len(), 2);
    let feature = doc.feature.expect("feature");
    assert_eq!(feature.scenarios[0].steps.len(), 1);
}

#[test]
fn test_comment_lines_stay_out_of_the_description() {
    let (doc, errors) = parse_source(
        "Feature: F\n# ticket #42\n  As a user\n# say \"hi\"\nScenario: S\n  Given x\n",
    );

    assert!(errors.is_empty(), "{errors:?}");
    let feature = doc.feature.expect("feature");
    let description: Vec<_> = feature.description.iter().filter_map(Node::value).collect();
    assert_eq!(description, ["As a user"]);
}
