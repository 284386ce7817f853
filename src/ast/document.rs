//! Document tree
//!
//!     One [`Document`] per source file. Containers own clones of the lexer nodes that opened
//!     them (`node`) plus the nodes attached to them during parsing. Child collections always
//!     exist (possibly empty); optional singletons are `Option`s.

use super::node::{Node, NodeType};
use serde::Serialize;
use std::path::PathBuf;

/// Where a document came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub path: PathBuf,
    /// SHA-256 of the file content, lowercase hex
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub node: Node,
    pub tags: Vec<Node>,
    pub description: Vec<Node>,
    pub background: Option<Background>,
    pub scenarios: Vec<Scenario>,
    pub ui_elements: Vec<UiElement>,
}

impl Feature {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            tags: Vec::new(),
            description: Vec::new(),
            background: None,
            scenarios: Vec::new(),
            ui_elements: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.node.name()
    }
}

/// Steps shared by every scenario of a feature, or by every variant of a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Background {
    pub node: Node,
    pub steps: Vec<Node>,
}

impl Background {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub node: Node,
    pub tags: Vec<Node>,
    pub description: Vec<Node>,
    pub background: Option<Background>,
    pub steps: Vec<Node>,
    pub variants: Vec<Variant>,
}

impl Scenario {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            tags: Vec::new(),
            description: Vec::new(),
            background: None,
            steps: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.node.name()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    pub node: Node,
    pub tags: Vec<Node>,
    pub description: Vec<Node>,
    pub steps: Vec<Node>,
}

impl Variant {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            tags: Vec::new(),
            description: Vec::new(),
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    pub node: Node,
    pub tags: Vec<Node>,
    pub description: Vec<Node>,
    pub steps: Vec<Node>,
}

impl TestCase {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            tags: Vec::new(),
            description: Vec::new(),
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiElement {
    pub node: Node,
    pub tags: Vec<Node>,
    pub properties: Vec<Node>,
}

impl UiElement {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            tags: Vec::new(),
            properties: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Database {
    pub node: Node,
    pub properties: Vec<Node>,
}

impl Database {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            properties: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub node: Node,
    pub rows: Vec<Node>,
}

impl Table {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            rows: Vec::new(),
        }
    }
}

/// A `Constants:` or `Regular Expressions:` block and its definitions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub node: Node,
    pub items: Vec<Node>,
}

impl Block {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TestEventKind {
    BeforeAll,
    AfterAll,
    BeforeFeature,
    AfterFeature,
    BeforeEachScenario,
    AfterEachScenario,
}

impl TestEventKind {
    pub const ALL: [TestEventKind; 6] = [
        TestEventKind::BeforeAll,
        TestEventKind::AfterAll,
        TestEventKind::BeforeFeature,
        TestEventKind::AfterFeature,
        TestEventKind::BeforeEachScenario,
        TestEventKind::AfterEachScenario,
    ];

    pub fn node_type(self) -> NodeType {
        match self {
            TestEventKind::BeforeAll => NodeType::BeforeAll,
            TestEventKind::AfterAll => NodeType::AfterAll,
            TestEventKind::BeforeFeature => NodeType::BeforeFeature,
            TestEventKind::AfterFeature => NodeType::AfterFeature,
            TestEventKind::BeforeEachScenario => NodeType::BeforeEachScenario,
            TestEventKind::AfterEachScenario => NodeType::AfterEachScenario,
        }
    }

    pub fn from_node_type(node_type: NodeType) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.node_type() == node_type)
    }

    /// Feature-level events only make sense once a feature exists.
    pub fn requires_feature(self) -> bool {
        !matches!(self, TestEventKind::BeforeAll | TestEventKind::AfterAll)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestEvent {
    pub node: Node,
    pub steps: Vec<Node>,
}

impl TestEvent {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            steps: Vec::new(),
        }
    }
}

/// Parsed tree of one source file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub file_info: Option<FileInfo>,
    pub language: Option<Node>,
    pub imports: Vec<Node>,
    pub feature: Option<Feature>,
    /// Global UI elements, declared outside a feature
    pub ui_elements: Vec<UiElement>,
    pub databases: Vec<Database>,
    pub tables: Vec<Table>,
    pub constant_block: Option<Block>,
    pub regex_block: Option<Block>,
    pub before_all: Option<TestEvent>,
    pub after_all: Option<TestEvent>,
    pub before_feature: Option<TestEvent>,
    pub after_feature: Option<TestEvent>,
    pub before_each_scenario: Option<TestEvent>,
    pub after_each_scenario: Option<TestEvent>,
    pub test_cases: Vec<TestCase>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_info(mut self, file_info: FileInfo) -> Self {
        self.file_info = Some(file_info);
        self
    }

    /// Value of the `#language` declaration, if any.
    pub fn language_value(&self) -> Option<&str> {
        self.language.as_ref().and_then(Node::value)
    }

    pub fn import_values(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().filter_map(Node::value)
    }

    pub fn test_event(&self, kind: TestEventKind) -> Option<&TestEvent> {
        match kind {
            TestEventKind::BeforeAll => self.before_all.as_ref(),
            TestEventKind::AfterAll => self.after_all.as_ref(),
            TestEventKind::BeforeFeature => self.before_feature.as_ref(),
            TestEventKind::AfterFeature => self.after_feature.as_ref(),
            TestEventKind::BeforeEachScenario => self.before_each_scenario.as_ref(),
            TestEventKind::AfterEachScenario => self.after_each_scenario.as_ref(),
        }
    }

    pub fn test_event_mut(&mut self, kind: TestEventKind) -> &mut Option<TestEvent> {
        match kind {
            TestEventKind::BeforeAll => &mut self.before_all,
            TestEventKind::AfterAll => &mut self.after_all,
            TestEventKind::BeforeFeature => &mut self.before_feature,
            TestEventKind::AfterFeature => &mut self.after_feature,
            TestEventKind::BeforeEachScenario => &mut self.before_each_scenario,
            TestEventKind::AfterEachScenario => &mut self.after_each_scenario,
        }
    }
}
