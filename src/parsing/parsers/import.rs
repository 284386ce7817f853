use crate::ast::Node;
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext};

pub struct ImportParser;

impl NodeParser for ImportParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let value = node.value().unwrap_or_default();
        if context.doc.import_values().any(|imported| imported == value) {
            return reject(errors, node, format!("Duplicate import: \"{value}\""));
        }
        context.doc.imports.push(node.clone());
        true
    }
}
