//! Node parsers, one per parsed node type

mod blocks;
mod data;
mod feature;
mod import;
mod language;
mod scenario;
mod step;
mod test_case;
mod test_event;
mod ui_element;

pub use blocks::{DefinitionBlockParser, DefinitionParser};
pub use data::{DatabaseParser, DatabasePropertyParser, TableParser, TableRowParser};
pub use feature::{BackgroundParser, FeatureParser};
pub use import::ImportParser;
pub use language::LanguageParser;
pub use scenario::{ScenarioParser, VariantBackgroundParser, VariantParser};
pub use step::StepParser;
pub use test_case::TestCaseParser;
pub use test_event::TestEventParser;
pub use ui_element::{UiElementParser, UiPropertyParser};

use super::NodeParser;
use crate::ast::{NodeType, TestEventKind};
use std::collections::HashMap;

/// Every node parser, keyed by the node type it handles.
pub fn standard_parsers() -> HashMap<NodeType, Box<dyn NodeParser>> {
    let mut parsers: HashMap<NodeType, Box<dyn NodeParser>> = HashMap::new();
    parsers.insert(NodeType::Language, Box::new(LanguageParser));
    parsers.insert(NodeType::Import, Box::new(ImportParser));
    parsers.insert(NodeType::Feature, Box::new(FeatureParser));
    parsers.insert(NodeType::Background, Box::new(BackgroundParser));
    parsers.insert(NodeType::Scenario, Box::new(ScenarioParser));
    parsers.insert(NodeType::VariantBackground, Box::new(VariantBackgroundParser));
    parsers.insert(NodeType::Variant, Box::new(VariantParser));
    parsers.insert(NodeType::TestCase, Box::new(TestCaseParser));
    parsers.insert(
        NodeType::ConstantBlock,
        Box::new(DefinitionBlockParser::constants()),
    );
    parsers.insert(
        NodeType::RegexBlock,
        Box::new(DefinitionBlockParser::regular_expressions()),
    );
    parsers.insert(NodeType::Constant, Box::new(DefinitionParser::constant()));
    parsers.insert(NodeType::Regex, Box::new(DefinitionParser::regex()));
    parsers.insert(NodeType::Table, Box::new(TableParser));
    parsers.insert(NodeType::TableRow, Box::new(TableRowParser));
    parsers.insert(NodeType::Database, Box::new(DatabaseParser));
    parsers.insert(NodeType::DatabaseProperty, Box::new(DatabasePropertyParser));
    parsers.insert(NodeType::UiElement, Box::new(UiElementParser));
    parsers.insert(NodeType::UiProperty, Box::new(UiPropertyParser));
    for kind in TestEventKind::ALL {
        parsers.insert(kind.node_type(), Box::new(TestEventParser::new(kind)));
    }
    for node_type in [
        NodeType::StepGiven,
        NodeType::StepWhen,
        NodeType::StepThen,
        NodeType::StepAnd,
        NodeType::StepOtherwise,
    ] {
        parsers.insert(node_type, Box::new(StepParser::new(node_type)));
    }
    parsers
}
