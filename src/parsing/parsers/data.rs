//! Tables and databases

use crate::ast::{Database, Node, Table};
use crate::error::SyntacticError;
use crate::parsing::{reject, NodeIterator, NodeParser, ParsingContext, Scope};

pub struct TableParser;

impl NodeParser for TableParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        _errors: &mut Vec<SyntacticError>,
    ) -> bool {
        context.doc.tables.push(Table::new(node.clone()));
        context.scope = Scope::Table;
        true
    }
}

pub struct TableRowParser;

impl NodeParser for TableRowParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let Some(table) = context.current_table_mut() else {
            return reject(errors, node, "Table Row must be declared inside a Table");
        };
        table.rows.push(node.clone());
        true
    }
}

pub struct DatabaseParser;

impl NodeParser for DatabaseParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        _errors: &mut Vec<SyntacticError>,
    ) -> bool {
        context.doc.databases.push(Database::new(node.clone()));
        context.scope = Scope::Database;
        true
    }
}

pub struct DatabasePropertyParser;

impl NodeParser for DatabasePropertyParser {
    fn analyze(
        &self,
        node: &Node,
        context: &mut ParsingContext,
        _iterator: &mut NodeIterator<'_>,
        errors: &mut Vec<SyntacticError>,
    ) -> bool {
        let Some(database) = context.current_database_mut() else {
            return reject(
                errors,
                node,
                "Database Property must be declared inside a Database",
            );
        };
        database.properties.push(node.clone());
        true
    }
}
