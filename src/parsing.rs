//! Parser
//!
//!     Parsing turns the flat node list of one file into a [`Document`](crate::ast::Document).
//!     It is a dispatch on node type: the [`Parser`] walks the nodes with a [`NodeIterator`] and
//!     hands each one to the [`NodeParser`] registered for its type, together with a
//!     [`ParsingContext`] holding the document under construction and the current [`Scope`].
//!
//!     Node parsers check where their node may appear, attach it to the right container and
//!     move the scope. Some of them look around the current node: preceding tags are picked up
//!     backwards from what was already consumed, description lines are taken forward from the
//!     iterator, so they never reach the dispatcher.
//!
//!     Types without a parser (stray text, tags nobody claimed, long string delimiters) are
//!     skipped and remembered as ignored. Misplaced nodes are reported as
//!     [`SyntacticError`]s and parsing goes on.

pub mod context;
pub mod iterator;
pub mod parser;
pub mod parsers;

use crate::ast::Node;
use crate::error::SyntacticError;

pub use context::{ParsingContext, Scope};
pub use iterator::NodeIterator;
pub use parser::Parser;

/// Places one node of a given type in the document
pub trait NodeParser: Send + Sync {
    /// Returns `false` when the node was rejected, in which case an error was added.
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool;
}

/// Records an error at `node` and rejects it.
pub(crate) fn reject(
    errors: &mut Vec<SyntacticError>,
    node: &Node,
    message: impl Into<String>,
) -> bool {
    errors.push(SyntacticError::new(message, node.location));
    false
}
