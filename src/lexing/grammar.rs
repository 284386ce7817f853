//! Lexical follow sets
//!
//!     After a lexer matches, the dispatcher first tries the lexers of the node types that
//!     usually come next. This table is hand written and small on purpose. It must never list
//!     `Text`: the text lexer accepts almost anything, including the long string delimiter, so
//!     it may only be reached through the full priority list.

use crate::ast::NodeType;

pub fn suggested_next(node_type: NodeType) -> &'static [NodeType] {
    use NodeType::*;
    match node_type {
        Language | Import => &[Import, Tag, Feature],
        Tag => &[Tag, Feature, Scenario, Variant, TestCase, UiElement],
        Feature => &[Background, Scenario],
        Background | VariantBackground | Scenario | Variant | TestCase | BeforeAll | AfterAll
        | BeforeFeature | AfterFeature | BeforeEachScenario | AfterEachScenario => &[StepGiven],
        StepGiven => &[StepAnd, StepWhen, StepThen],
        StepWhen => &[StepAnd, StepThen],
        StepThen => &[StepAnd, StepOtherwise],
        StepAnd => &[StepAnd, StepWhen, StepThen, StepOtherwise],
        StepOtherwise => &[StepAnd],
        ConstantBlock | Constant => &[Constant],
        RegexBlock | Regex => &[Regex],
        Table | TableRow => &[TableRow],
        Database | DatabaseProperty => &[DatabaseProperty],
        UiElement | UiProperty => &[UiProperty],
        Text | LongString => &[],
    }
}
