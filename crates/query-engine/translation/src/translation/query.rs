//! Translate a query plan to a SQL AST to be run against the database.

use indexmap::IndexMap;

use query_engine_metadata::metadata::SchemaDescription;
use query_engine_sql::sql::ast;
use query_engine_sql::sql::helpers;
use query_engine_sql::sql::string::Param;

use super::error::Error;
use super::plan::{Intent, QueryPlan};

/// Translate a validated query plan into a SELECT statement.
///
/// Validation happens here, before any SQL exists: a plan naming no table, or
/// a table the schema snapshot does not know, aborts the translation.
pub fn translate(schema: &SchemaDescription, plan: &QueryPlan) -> Result<ast::Select, Error> {
    if plan.table.is_empty() {
        return Err(Error::EmptyTableName);
    }
    if !schema.contains_table(&plan.table) {
        return Err(Error::TableNotFound(plan.table.clone()));
    }

    let from = ast::From::Table {
        name: ast::TableName(plan.table.clone()),
    };

    let mut select = match plan.intent {
        Intent::CountRecords => helpers::count_select(from),
        Intent::CheckExistence | Intent::GetDetails => {
            let mut select = if plan.fields.is_empty() {
                helpers::star_select(from)
            } else {
                helpers::simple_select(
                    plan.fields.iter().cloned().map(ast::ColumnName).collect(),
                    from,
                )
            };
            // an existence check only ever needs one row
            if plan.intent == Intent::CheckExistence {
                select.limit = ast::Limit { limit: Some(1) };
            }
            select
        }
    };

    if let Some(filter) = translate_conditions(&plan.conditions) {
        select.where_ = ast::Where(filter);
    }

    tracing::debug!("SQL AST: {:?}", select);
    Ok(select)
}

/// Join all conditions with AND, in mapping order.
fn translate_conditions(
    conditions: &IndexMap<String, serde_json::Value>,
) -> Option<ast::Expression> {
    conditions
        .iter()
        .map(|(column, value)| translate_condition(column, value))
        .reduce(|left, right| ast::Expression::And {
            left: Box::new(left),
            right: Box::new(right),
        })
}

/// Render one condition. A value that contains a space or runs past ten
/// characters compares exactly; anything shorter becomes a substring match.
/// The boundary is deliberate and load-bearing: prompting was tuned against
/// it, so it must not be "improved".
fn translate_condition(column: &str, value: &serde_json::Value) -> ast::Expression {
    let rendered = condition_text(value);

    let (operator, param) = if rendered.contains(' ') || rendered.chars().count() > 10 {
        (ast::BinaryOperator::Equals, Param::Value(value.clone()))
    } else {
        (
            ast::BinaryOperator::Like,
            Param::String(format!("%{}%", helpers::escape_like(&rendered))),
        )
    };

    ast::Expression::BinaryOperation {
        left: Box::new(ast::Expression::ColumnReference(ast::ColumnName(
            column.to_string(),
        ))),
        operator,
        right: Box::new(ast::Expression::Parameter(param)),
    }
}

/// The textual form of a condition value, as the length heuristic sees it.
/// JSON strings are taken bare; other values use their JSON text.
fn condition_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
