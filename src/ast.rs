//! Abstract syntax for Concordia documents
//!
//!     Lexing produces a flat list of [`Node`]s, one typed token per recognized line. Parsing
//!     then assembles those nodes into a [`Document`], the tree for one source file.
//!
//!     Nodes are never built by parsers; parsers only move (clones of) lexer output into the
//!     right slot of the document. That keeps locations and raw content identical between the
//!     token stream and the tree, which tooling relies on.

pub mod document;
pub mod location;
pub mod node;

pub use document::{
    Background, Block, Database, Document, Feature, FileInfo, Scenario, Table, TestCase,
    TestEvent, TestEventKind, UiElement, Variant,
};
pub use location::Location;
pub use node::{ConstantValue, Node, NodeData, NodeType, TagSubType};
