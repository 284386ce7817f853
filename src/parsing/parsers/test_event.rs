use crate::ast::{Node, TestEvent, TestEventKind};
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext, Scope};

/// Before/after hooks, at most one of each kind per file
pub struct TestEventParser {
    kind: TestEventKind,
}

impl TestEventParser {
    pub fn new(kind: TestEventKind) -> Self {
        Self { kind }
    }
}

impl NodeParser for TestEventParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let name = self.kind.node_type();
        if self.kind.requires_feature() && !context.in_feature() {
            return reject(errors, node, format!("{name} must be declared after a Feature"));
        }
        let slot = context.doc.test_event_mut(self.kind);
        if slot.is_some() {
            return reject(errors, node, format!("Only one {name} is allowed per file"));
        }
        *slot = Some(TestEvent::new(node.clone()));
        context.scope = Scope::TestEvent(self.kind);
        true
    }
}
