use crate::ast::{Node, UiElement};
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext, Scope};

/// UI elements belong to the feature when there is one, to the document otherwise
pub struct UiElementParser;

impl NodeParser for UiElementParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        iterator: &mut NodeIterator<'_>,
        _errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let mut element = UiElement::new(node.clone());
        element.tags = iterator.preceding_tags();
        let in_feature = match context.doc.feature.as_mut() {
            Some(feature) => {
                feature.ui_elements.push(element);
                true
            }
            None => {
                context.doc.ui_elements.push(element);
                false
            }
        };
        context.scope = Scope::UiElement { in_feature };
        true
    }
}

pub struct UiPropertyParser;

impl NodeParser for UiPropertyParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let Some(element) = context.current_ui_element_mut() else {
            return reject(
                errors,
                node,
                "UI Property must be declared inside a UI Element",
            );
        };
        element.properties.push(node.clone());
        true
    }
}
