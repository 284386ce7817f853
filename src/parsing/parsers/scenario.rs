use crate::ast::{Background, Node, NodeType, Scenario, Variant};
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext, Scope};

pub struct ScenarioParser;

impl NodeParser for ScenarioParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let Some(feature) = context.doc.feature.as_mut() else {
            return reject(errors, node, "Scenario must be declared after a Feature");
        };
        let mut scenario = Scenario::new(node.clone());
        scenario.tags = iterator.preceding_tags();
        scenario.description = iterator.collect_forward(NodeType::Text);
        feature.scenarios.push(scenario);
        context.scope = Scope::Scenario;
        true
    }
}

/// Steps shared by the variants of the current scenario
pub struct VariantBackgroundParser;

impl NodeParser for VariantBackgroundParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let Some(scenario) = context.current_scenario_mut() else {
            return reject(
                errors,
                node,
                "Variant Background must be declared after a Scenario",
            );
        };
        if scenario.background.is_some() {
            return reject(
                errors,
                node,
                "Only one Variant Background is allowed per Scenario",
            );
        }
        if !scenario.variants.is_empty() {
            return reject(
                errors,
                node,
                "Variant Background must be declared before the Variants",
            );
        }
        scenario.background = Some(Background::new(node.clone()));
        context.scope = Scope::VariantBackground;
        true
    }
}

pub struct VariantParser;

impl NodeParser for VariantParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let Some(scenario) = context.current_scenario_mut() else {
            return reject(errors, node, "Variant must be declared after a Scenario");
        };
        let mut variant = Variant::new(node.clone());
        variant.tags = iterator.preceding_tags();
        variant.description = iterator.collect_forward(NodeType::Text);
        scenario.variants.push(variant);
        context.scope = Scope::Variant;
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::parse_source;

    const SOURCE: &str = r#"
Feature: Sales
  Scenario: Sell
    As a seller
    Given I sell
  Variant Background:
    Given I am on the shop
  @scenario(1)
  Variant: Sell one
    When I sell one
    Then I see "1"
  Variant 2: Sell two
    When I sell two
"#;

    #[test]
    fn test_scenario_and_variants() {
        let (doc, errors) = parse_source(SOURCE);
        assert!(errors.is_empty(), "{errors:?}");

        let feature = doc.feature.expect("feature");
        let scenario = &feature.scenarios[0];
        assert_eq!(scenario.name(), Some("Sell"));
        assert_eq!(scenario.description.len(), 1);
        assert_eq!(scenario.steps.len(), 1);
        assert_eq!(scenario.background.as_ref().map(|b| b.steps.len()), Some(1));
        assert_eq!(scenario.variants.len(), 2);
        assert_eq!(scenario.variants[0].tags.len(), 1);
        assert_eq!(scenario.variants[0].steps.len(), 2);
        assert_eq!(scenario.variants[1].node.number(), Some(2));
    }

    #[test]
    fn test_scenario_requires_feature() {
        let (doc, errors) = parse_source("Scenario: Lost\n  Given x");
        assert!(doc.feature.is_none());
        assert_eq!(errors[0].message, "Scenario must be declared after a Feature");
    }

    #[test]
    fn test_variant_background_after_variant() {
        let (_, errors) =
            parse_source("Feature: F\nScenario: S\nVariant: V\nVariant Background:");
        assert_eq!(
            errors[0].message,
            "Variant Background must be declared before the Variants"
        );
    }

    #[test]
    fn test_variant_requires_scenario() {
        let (_, errors) = parse_source("Feature: F\nVariant: V");
        assert_eq!(errors[0].message, "Variant must be declared after a Scenario");
    }
}
