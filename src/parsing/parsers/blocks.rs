//! Constants and regular expressions blocks

use crate::ast::{Block, Document, Node, NodeType};
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext, Scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Constants,
    RegularExpressions,
}

impl BlockKind {
    fn block_type(self) -> NodeType {
        match self {
            BlockKind::Constants => NodeType::ConstantBlock,
            BlockKind::RegularExpressions => NodeType::RegexBlock,
        }
    }

    fn item_type(self) -> NodeType {
        match self {
            BlockKind::Constants => NodeType::Constant,
            BlockKind::RegularExpressions => NodeType::Regex,
        }
    }

    fn scope(self) -> Scope {
        match self {
            BlockKind::Constants => Scope::ConstantBlock,
            BlockKind::RegularExpressions => Scope::RegexBlock,
        }
    }

    fn slot(self, doc: &mut Document) -> &mut Option<Block> {
        match self {
            BlockKind::Constants => &mut doc.constant_block,
            BlockKind::RegularExpressions => &mut doc.regex_block,
        }
    }
}

pub struct DefinitionBlockParser {
    kind: BlockKind,
}

impl DefinitionBlockParser {
    pub fn constants() -> Self {
        Self {
            kind: BlockKind::Constants,
        }
    }

    pub fn regular_expressions() -> Self {
        Self {
            kind: BlockKind::RegularExpressions,
        }
    }
}

impl NodeParser for DefinitionBlockParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let slot = self.kind.slot(&mut context.doc);
        if slot.is_some() {
            return reject(
                errors,
                node,
                format!("Only one {} block is allowed per file", self.kind.block_type()),
            );
        }
        *slot = Some(Block::new(node.clone()));
        context.scope = self.kind.scope();
        true
    }
}

/// A named constant or regular expression, unique within its block
pub struct DefinitionParser {
    kind: BlockKind,
}

impl DefinitionParser {
    pub fn constant() -> Self {
        Self {
            kind: BlockKind::Constants,
        }
    }

    pub fn regex() -> Self {
        Self {
            kind: BlockKind::RegularExpressions,
        }
    }
}

impl NodeParser for DefinitionParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let item_type = self.kind.item_type();
        let block = if context.scope == self.kind.scope() {
            context.current_block_mut()
        } else {
            None
        };
        let Some(block) = block else {
            return reject(
                errors,
                node,
                format!(
                    "{item_type} must be declared inside a {} block",
                    self.kind.block_type()
                ),
            );
        };
        let name = node.name().unwrap_or_default();
        if block.items.iter().any(|item| item.name() == Some(name)) {
            return reject(errors, node, format!("Duplicate {item_type}: \"{name}\""));
        }
        block.items.push(node.clone());
        true
    }
}
