pub mod common;

use common::sql_for_reply;
use query_engine_sql::sql::string::Param;
use serde_json::json;

#[test]
fn count_with_a_short_condition() {
    let sql = sql_for_reply(
        r#"```json
{"queryDatabase": {"intent": "count_records", "table": "app_user", "conditions": {"age": 30}}}
```"#,
    );
    insta::assert_snapshot!(
        sql.sql,
        @r#"SELECT COUNT(*) AS "count" FROM "app_user" WHERE ("age" LIKE $1)"#
    );
    assert_eq!(sql.params, vec![Param::String("%30%".to_string())]);
}

#[test]
fn details_with_fields_and_two_conditions() {
    let sql = sql_for_reply(
        r#"{"queryDatabase": {"intent": "get_details", "table": "app_user",
            "conditions": {"name": "bob", "email": "b@x.io"},
            "fields": ["name", "email"]}}"#,
    );
    insta::assert_snapshot!(
        sql.sql,
        @r#"SELECT "name", "email" FROM "app_user" WHERE (("name" LIKE $1) AND ("email" LIKE $2))"#
    );
    assert_eq!(
        sql.params,
        vec![
            Param::String("%bob%".to_string()),
            Param::String("%b@x.io%".to_string()),
        ]
    );
}

#[test]
fn existence_checks_are_limited_to_one_row() {
    let sql = sql_for_reply(
        r#"{"queryDatabase": {"intent": "check_existence", "table": "app_user",
            "conditions": {"name": "Alice Margatroid"}}}"#,
    );
    insta::assert_snapshot!(
        sql.sql,
        @r#"SELECT * FROM "app_user" WHERE ("name" = $1) LIMIT 1"#
    );
    assert_eq!(sql.params, vec![Param::Value(json!("Alice Margatroid"))]);
}

#[test]
fn no_conditions_means_no_where_clause() {
    let sql = sql_for_reply(
        r#"{"queryDatabase": {"intent": "get_details", "table": "orders"}}"#,
    );
    insta::assert_snapshot!(sql.sql, @r#"SELECT * FROM "orders""#);
    assert!(sql.params.is_empty());
}

#[test]
fn like_metacharacters_in_values_are_escaped() {
    let sql = sql_for_reply(
        r#"{"queryDatabase": {"intent": "count_records", "table": "app_user",
            "conditions": {"name": "50%_off"}}}"#,
    );
    insta::assert_snapshot!(
        sql.sql,
        @r#"SELECT COUNT(*) AS "count" FROM "app_user" WHERE ("name" LIKE $1)"#
    );
    assert_eq!(sql.params, vec![Param::String("%50\\%\\_off%".to_string())]);
}
