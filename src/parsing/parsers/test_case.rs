use crate::ast::{Node, NodeType, TestCase};
use crate::error::SyntacticError;
use crate::parsing::{NodeIterator, NodeParser, ParsingContext, Scope};

/// Test cases live at the top level of their file
pub struct TestCaseParser;

impl NodeParser for TestCaseParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        iterator: &mut NodeIterator<'_>,
        _errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let mut test_case = TestCase::new(node.clone());
        test_case.tags = iterator.preceding_tags();
        test_case.description = iterator.collect_forward(NodeType::Text);
        context.doc.test_cases.push(test_case);
        context.scope = Scope::TestCase;
        true
    }
}
