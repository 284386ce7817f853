use crate::ast::Node;
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext};

pub struct LanguageParser;

impl NodeParser for LanguageParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        if context.doc.language.is_some() {
            return reject(errors, node, "Language is already declared");
        }
        context.doc.language = Some(node.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::parse_source;

    #[test]
    fn test_second_declaration_is_an_error() {
        let (doc, errors) = parse_source("#language: en\n#language: en\nFeature: X");
        assert_eq!(doc.language_value(), Some("en"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location.line, 2);
    }
}
