//! The parser dispatcher

use super::parsers::standard_parsers;
use super::{NodeIterator, NodeParser, ParsingContext};
use crate::ast::{Document, Node, NodeType};
use crate::error::SyntacticError;
use std::collections::{BTreeSet, HashMap};

pub struct Parser {
    parsers: HashMap<NodeType, Box<dyn NodeParser>>,
    stop_on_first_error: bool,
    ignored: BTreeSet<NodeType>,
}

impl Parser {
    pub fn new(stop_on_first_error: bool) -> Self {
        Self {
            parsers: standard_parsers(),
            stop_on_first_error,
            ignored: BTreeSet::new(),
        }
    }

    /// Node types without a parser seen in the last analysis.
    pub fn ignored_types(&self) -> &BTreeSet<NodeType> {
        &self.ignored
    }

    /// Builds `doc` from `nodes`, adding misplaced nodes to `errors`.
    pub fn analyze(
        &mut self,
        nodes: &[Node],
        doc: Document,
        errors: &mut Vec<SyntacticError>,
    ) -> Document {
        self.ignored.clear();
        let mut context = ParsingContext::new(doc);
        let mut iterator = NodeIterator::new(nodes);

        while let Some(node) = iterator.next() {
            let Some(parser) = self.parsers.get(&node.node_type) else {
                if self.ignored.insert(node.node_type) {
                    tracing::trace!(node_type = %node.node_type, "no parser, ignoring");
                }
                continue;
            };
            parser.analyze(node, &mut context, &mut iterator, errors);
            if self.stop_on_first_error && !errors.is_empty() {
                break;
            }
        }
        context.into_document()
    }
}
