//! Lexer output nodes
//!
//!     A [`Node`] is what one node lexer recognizes on one line: its [`NodeType`], where it
//!     starts, the line content with any comment removed, and construct specific [`NodeData`].
//!
//!     The node type is kept apart from the payload because the lexer dispatcher may reclassify
//!     a node (everything inside a long string becomes `Text`) without touching what was
//!     captured from the line.

use super::location::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every construct the lexers can recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    Language,
    Import,
    Tag,
    Feature,
    Background,
    VariantBackground,
    Scenario,
    Variant,
    TestCase,
    ConstantBlock,
    Constant,
    RegexBlock,
    Regex,
    Table,
    TableRow,
    Database,
    DatabaseProperty,
    UiElement,
    UiProperty,
    BeforeAll,
    AfterAll,
    BeforeFeature,
    AfterFeature,
    BeforeEachScenario,
    AfterEachScenario,
    StepGiven,
    StepWhen,
    StepThen,
    StepAnd,
    StepOtherwise,
    Text,
    LongString,
}

impl NodeType {
    /// Human readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            NodeType::Language => "Language",
            NodeType::Import => "Import",
            NodeType::Tag => "Tag",
            NodeType::Feature => "Feature",
            NodeType::Background => "Background",
            NodeType::VariantBackground => "Variant Background",
            NodeType::Scenario => "Scenario",
            NodeType::Variant => "Variant",
            NodeType::TestCase => "Test Case",
            NodeType::ConstantBlock => "Constants",
            NodeType::Constant => "Constant",
            NodeType::RegexBlock => "Regular Expressions",
            NodeType::Regex => "Regular Expression",
            NodeType::Table => "Table",
            NodeType::TableRow => "Table Row",
            NodeType::Database => "Database",
            NodeType::DatabaseProperty => "Database Property",
            NodeType::UiElement => "UI Element",
            NodeType::UiProperty => "UI Property",
            NodeType::BeforeAll => "Before All",
            NodeType::AfterAll => "After All",
            NodeType::BeforeFeature => "Before Feature",
            NodeType::AfterFeature => "After Feature",
            NodeType::BeforeEachScenario => "Before Each Scenario",
            NodeType::AfterEachScenario => "After Each Scenario",
            NodeType::StepGiven => "Given",
            NodeType::StepWhen => "When",
            NodeType::StepThen => "Then",
            NodeType::StepAnd => "And",
            NodeType::StepOtherwise => "Otherwise",
            NodeType::Text => "Text",
            NodeType::LongString => "Long String",
        }
    }

    pub fn is_step(self) -> bool {
        matches!(
            self,
            NodeType::StepGiven
                | NodeType::StepWhen
                | NodeType::StepThen
                | NodeType::StepAnd
                | NodeType::StepOtherwise
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved meaning of a tag, resolved from its name against the active dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagSubType {
    Feature,
    Scenario,
    Variant,
    Generated,
    Fail,
    Ignore,
    Global,
    Importance,
    GenerateOnlyValidValues,
}

impl TagSubType {
    pub const ALL: [TagSubType; 9] = [
        TagSubType::Feature,
        TagSubType::Scenario,
        TagSubType::Variant,
        TagSubType::Generated,
        TagSubType::Fail,
        TagSubType::Ignore,
        TagSubType::Global,
        TagSubType::Importance,
        TagSubType::GenerateOnlyValidValues,
    ];
}

/// Right-hand side of a constant or regular expression definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ConstantValue {
    /// Content of a quoted value, escapes kept verbatim
    Text(String),
    /// A bare number, kept as written
    Number(String),
}

impl ConstantValue {
    pub fn as_str(&self) -> &str {
        match self {
            ConstantValue::Text(value) | ConstantValue::Number(value) => value,
        }
    }
}

/// Construct specific content captured by a lexer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeData {
    #[default]
    Empty,
    Name {
        name: String,
    },
    NumberedName {
        name: String,
        number: Option<u32>,
    },
    Value {
        value: String,
    },
    Step {
        keyword: String,
        value: String,
    },
    Tag {
        name: String,
        sub_type: Option<TagSubType>,
        values: Option<Vec<String>>,
    },
    Definition {
        name: String,
        value: ConstantValue,
    },
    Cells {
        cells: Vec<String>,
    },
}

/// One typed token, produced by lexing a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub node_type: NodeType,
    pub location: Location,
    /// The line without its comment, trimmed
    pub content: String,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    pub fn new(node_type: NodeType, location: Location, content: impl Into<String>) -> Self {
        Self {
            node_type,
            location,
            content: content.into(),
            data: NodeData::Empty,
        }
    }

    pub fn with_data(mut self, data: NodeData) -> Self {
        self.data = data;
        self
    }

    pub fn name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Name { name }
            | NodeData::NumberedName { name, .. }
            | NodeData::Tag { name, .. }
            | NodeData::Definition { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Value { value } | NodeData::Step { value, .. } => Some(value),
            NodeData::Definition { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Parenthesized tag content, `None` when the tag had no parentheses.
    pub fn values(&self) -> Option<&[String]> {
        match &self.data {
            NodeData::Tag {
                values: Some(values),
                ..
            } => Some(values),
            _ => None,
        }
    }

    pub fn cells(&self) -> Option<&[String]> {
        match &self.data {
            NodeData::Cells { cells } => Some(cells),
            _ => None,
        }
    }

    pub fn tag_sub_type(&self) -> Option<TagSubType> {
        match &self.data {
            NodeData::Tag { sub_type, .. } => *sub_type,
            _ => None,
        }
    }

    pub fn number(&self) -> Option<u32> {
        match &self.data {
            NodeData::NumberedName { number, .. } => *number,
            _ => None,
        }
    }
}
