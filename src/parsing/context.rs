use crate::ast::{
    Background, Block, Database, Document, Node, Scenario, Table, TestCase, TestEventKind,
    UiElement, Variant,
};

/// The construct that nodes are currently attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Root,
    Feature,
    Background,
    Scenario,
    VariantBackground,
    Variant,
    TestCase,
    UiElement {
        in_feature: bool,
    },
    Database,
    Table,
    ConstantBlock,
    RegexBlock,
    TestEvent(TestEventKind),
}

/// The document under construction and where parsing currently is
#[derive(Debug, Default)]
pub struct ParsingContext {
    pub doc: Document,
    pub scope: Scope,
}

impl ParsingContext {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            scope: Scope::Root,
        }
    }

    pub fn in_feature(&self) -> bool {
        self.doc.feature.is_some()
    }

    pub fn current_scenario_mut(&mut self) -> Option<&mut Scenario> {
        self.doc.feature.as_mut()?.scenarios.last_mut()
    }

    pub fn current_variant_mut(&mut self) -> Option<&mut Variant> {
        self.current_scenario_mut()?.variants.last_mut()
    }

    pub fn current_test_case_mut(&mut self) -> Option<&mut TestCase> {
        self.doc.test_cases.last_mut()
    }

    fn background_mut(&mut self) -> Option<&mut Background> {
        self.doc.feature.as_mut()?.background.as_mut()
    }

    /// Steps of the open step container, if any.
    pub fn step_container_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self.scope {
            Scope::Background => self.background_mut().map(|b| &mut b.steps),
            Scope::Scenario => self.current_scenario_mut().map(|s| &mut s.steps),
            Scope::VariantBackground => self
                .current_scenario_mut()?
                .background
                .as_mut()
                .map(|b| &mut b.steps),
            Scope::Variant => self.current_variant_mut().map(|v| &mut v.steps),
            Scope::TestCase => self.current_test_case_mut().map(|t| &mut t.steps),
            Scope::TestEvent(kind) => self
                .doc
                .test_event_mut(kind)
                .as_mut()
                .map(|e| &mut e.steps),
            _ => None,
        }
    }

    pub fn current_ui_element_mut(&mut self) -> Option<&mut UiElement> {
        match self.scope {
            Scope::UiElement { in_feature: true } => {
                self.doc.feature.as_mut()?.ui_elements.last_mut()
            }
            Scope::UiElement { in_feature: false } => self.doc.ui_elements.last_mut(),
            _ => None,
        }
    }

    pub fn current_database_mut(&mut self) -> Option<&mut Database> {
        match self.scope {
            Scope::Database => self.doc.databases.last_mut(),
            _ => None,
        }
    }

    pub fn current_table_mut(&mut self) -> Option<&mut Table> {
        match self.scope {
            Scope::Table => self.doc.tables.last_mut(),
            _ => None,
        }
    }

    /// The open constants or regular expressions block.
    pub fn current_block_mut(&mut self) -> Option<&mut Block> {
        match self.scope {
            Scope::ConstantBlock => self.doc.constant_block.as_mut(),
            Scope::RegexBlock => self.doc.regex_block.as_mut(),
            _ => None,
        }
    }

    pub fn into_document(self) -> Document {
        self.doc
    }
}
