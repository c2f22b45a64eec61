use query_engine_metadata::metadata::{ColumnInfo, SchemaDescription, TableInfo};
use query_engine_sql::sql::helpers::select_to_sql;
use query_engine_sql::sql::string::SQL;
use query_engine_translation::translation::{plan, query};

/// The schema snapshot the tests translate against.
pub fn test_schema() -> SchemaDescription {
    let table = |name: &str, columns: &[(&str, &str)]| TableInfo {
        name: name.to_string(),
        columns: columns
            .iter()
            .map(|(column, data_type)| ColumnInfo {
                name: (*column).to_string(),
                data_type: (*data_type).to_string(),
            })
            .collect(),
    };

    SchemaDescription {
        tables: vec![
            table(
                "app_user",
                &[
                    ("id", "bigint"),
                    ("name", "character varying"),
                    ("email", "character varying"),
                    ("age", "integer"),
                ],
            ),
            table("orders", &[("id", "bigint"), ("user_id", "bigint")]),
        ],
        error: None,
    }
}

/// Run a generated reply through the parser and translator, returning the SQL.
pub fn sql_for_reply(reply: &str) -> SQL {
    let plan = plan::parse_reply(reply)
        .expect("parsing should succeed")
        .expect("the reply should contain a plan");
    let select = query::translate(&test_schema(), &plan).expect("translation should succeed");
    select_to_sql(&select)
}
