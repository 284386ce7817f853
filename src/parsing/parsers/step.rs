use crate::ast::{Node, NodeType};
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext};

/// Appends a step to the open step container
///
/// `And` and `Otherwise` continue a previous step, so they need one in the same container.
pub struct StepParser {
    node_type: NodeType,
}

impl StepParser {
    pub fn new(node_type: NodeType) -> Self {
        Self { node_type }
    }

    fn continues_previous_step(&self) -> bool {
        matches!(self.node_type, NodeType::StepAnd | NodeType::StepOtherwise)
    }
}

impl NodeParser for StepParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let Some(steps) = context.step_container_mut() else {
            return reject(
                errors,
                node,
                format!(
                    "{} step must be inside a Background, Scenario, Variant, Test Case or test event",
                    self.node_type
                ),
            );
        };
        if self.continues_previous_step() && steps.is_empty() {
            return reject(
                errors,
                node,
                format!("{} step must follow another step", self.node_type),
            );
        }
        steps.push(node.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::parse_source;

    #[test]
    fn test_steps_go_to_the_open_container() {
        let (doc, errors) = parse_source(
            "Feature: F\nScenario: S\n  Given a\n  And b\n  When c\n  Then d\n  Otherwise e",
        );
        assert!(errors.is_empty());
        let feature = doc.feature.expect("feature");
        let values: Vec<_> = feature.scenarios[0]
            .steps
            .iter()
            .filter_map(|s| s.value())
            .collect();
        assert_eq!(values, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_step_outside_container() {
        let (_, errors) = parse_source("Feature: F\n  Given a");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Given step must be inside"));
    }

    #[test]
    fn test_and_needs_a_previous_step() {
        let (_, errors) = parse_source("Feature: F\nScenario: S\n  And b");
        assert_eq!(errors[0].message, "And step must follow another step");
    }
}
