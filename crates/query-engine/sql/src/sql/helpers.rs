//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;
use super::string::SQL;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `LIMIT` clause.
pub fn empty_limit() -> Limit {
    Limit { limit: None }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

// Aliasing //

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: String) -> ColumnAlias {
    ColumnAlias { name }
}

// SELECTs //

/// Build a `SELECT *`.
pub fn star_select(from: From) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from,
        where_: Where(empty_where()),
        limit: empty_limit(),
    }
}

/// Build a select of named columns and the rest are empty.
pub fn simple_select(columns: Vec<ColumnName>, from: From) -> Select {
    Select {
        select_list: SelectList::SelectColumns(columns),
        from,
        where_: Where(empty_where()),
        limit: empty_limit(),
    }
}

/// Build a `SELECT COUNT(*) AS "count"`.
pub fn count_select(from: From) -> Select {
    Select {
        select_list: SelectList::CountStar(make_column_alias("count".to_string())),
        from,
        where_: Where(empty_where()),
        limit: empty_limit(),
    }
}

/// Extract a select statement as SQL.
pub fn select_to_sql(select: &Select) -> SQL {
    let mut sql = SQL::new();
    select.to_sql(&mut sql);
    sql
}

/// Escape the LIKE metacharacters in user content so a pattern built from it
/// only matches literally.
pub fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_handles_metacharacters() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn count_select_renders_aliased_count() {
        let select = count_select(From::Table {
            name: TableName("app_user".to_string()),
        });
        let sql = select_to_sql(&select);
        assert_eq!(sql.sql, "SELECT COUNT(*) AS \"count\" FROM \"app_user\"");
        assert!(sql.params.is_empty());
    }
}
