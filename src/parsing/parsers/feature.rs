use crate::ast::{Background, Feature, Node, NodeType};
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext, Scope};

/// Opens the feature, taking its tags and description
pub struct FeatureParser;

impl NodeParser for FeatureParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        if context.in_feature() {
            return reject(errors, node, "Only one Feature is allowed per file");
        }
        let mut feature = Feature::new(node.clone());
        feature.tags = iterator.preceding_tags();
        feature.description = iterator.collect_forward(NodeType::Text);
        context.doc.feature = Some(feature);
        context.scope = Scope::Feature;
        true
    }
}

pub struct BackgroundParser;

impl NodeParser for BackgroundParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let Some(feature) = context.doc.feature.as_mut() else {
            return reject(errors, node, "Background must be declared after a Feature");
        };
        if feature.background.is_some() {
            return reject(errors, node, "Only one Background is allowed per Feature");
        }
        if !feature.scenarios.is_empty() {
            return reject(errors, node, "Background must be declared before the Scenarios");
        }
        feature.background = Some(Background::new(node.clone()));
        context.scope = Scope::Background;
        true
    }
}
