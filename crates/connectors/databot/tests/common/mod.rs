//! Scripted fakes for the two external boundaries, so the conversation
//! protocol can be exercised without a chat model or a database.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::json;

use databot::state::ServerState;
use databot_chat::{ChatClient, ChatError, Message};
use query_engine_execution::datasource::Datasource;
use query_engine_execution::error::Error as ExecutionError;
use query_engine_execution::metrics::initialise_metrics;
use query_engine_execution::query::Rows;
use query_engine_metadata::metadata::{ColumnInfo, SchemaDescription, TableInfo};
use query_engine_sql::sql::string::SQL;

/// A chat client that replays scripted replies and records every request it
/// receives.
pub struct ScriptedChat {
    replies: Mutex<Vec<String>>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedChat {
    pub fn new(replies: &[&str]) -> Self {
        ScriptedChat {
            replies: Mutex::new(replies.iter().map(|reply| (*reply).to_string()).collect()),
            requests: Mutex::new(vec![]),
        }
    }

    /// Every message sequence sent so far, in order.
    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for ScriptedChat {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(ChatError::MalformedResponse("script exhausted".to_string()));
        }
        Ok(replies.remove(0))
    }
}

/// A datasource returning fixed rows (or a fixed failure) and counting calls.
pub struct FakeDatasource {
    schema: SchemaDescription,
    result: Result<Rows, String>,
    executions: AtomicUsize,
    queries: Mutex<Vec<SQL>>,
}

impl FakeDatasource {
    pub fn with_rows(rows: Rows) -> Self {
        FakeDatasource {
            schema: users_schema(),
            result: Ok(rows),
            executions: AtomicUsize::new(0),
            queries: Mutex::new(vec![]),
        }
    }

    pub fn failing(message: &str) -> Self {
        FakeDatasource {
            schema: users_schema(),
            result: Err(message.to_string()),
            executions: AtomicUsize::new(0),
            queries: Mutex::new(vec![]),
        }
    }

    pub fn with_schema(mut self, schema: SchemaDescription) -> Self {
        self.schema = schema;
        self
    }

    pub fn execution_count(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }

    /// Every query executed so far, in order.
    pub fn queries(&self) -> Vec<SQL> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Datasource for FakeDatasource {
    async fn describe_schema(&self) -> SchemaDescription {
        self.schema.clone()
    }

    async fn execute(&self, query: &SQL) -> Result<Rows, ExecutionError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.clone());
        match &self.result {
            Ok(rows) => Ok(rows.clone()),
            Err(message) => Err(ExecutionError::Db(sqlx::Error::Protocol(message.clone()))),
        }
    }
}

/// The schema snapshot the fakes hand out.
pub fn users_schema() -> SchemaDescription {
    SchemaDescription {
        tables: vec![TableInfo {
            name: "app_user".to_string(),
            columns: vec![
                ColumnInfo {
                    name: "id".to_string(),
                    data_type: "bigint".to_string(),
                },
                ColumnInfo {
                    name: "name".to_string(),
                    data_type: "character varying".to_string(),
                },
                ColumnInfo {
                    name: "age".to_string(),
                    data_type: "integer".to_string(),
                },
            ],
        }],
        error: None,
    }
}

/// A single-row count result.
pub fn count_row(count: i64) -> Rows {
    vec![IndexMap::from([("count".to_string(), json!(count))])]
}

/// Server state wired up entirely from fakes.
pub fn fake_state(chat: ScriptedChat, datasource: FakeDatasource) -> ServerState {
    let mut metrics_registry = prometheus::Registry::new();
    let metrics = initialise_metrics(&mut metrics_registry).unwrap();
    ServerState {
        datasource: Arc::new(datasource),
        chat: Arc::new(chat),
        metrics,
        metrics_registry: Arc::new(metrics_registry),
    }
}
