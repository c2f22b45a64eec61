//! The two-turn conversation protocol between the user, the text generator,
//! and the database.
//!
//! One request, one conversation: a system message with persona and schema
//! context, the user's question, and, when the generator asks for a lookup,
//! a second turn that phrases the lookup result (or an apology) in plain
//! language. The growing message sequence is resent whole on every call and
//! discarded when the request ends.

use thiserror::Error;

use databot_chat::{ChatClient, ChatError, Message};
use query_engine_execution::datasource::Datasource;
use query_engine_metadata::metadata::SchemaDescription;
use query_engine_sql::sql::helpers::select_to_sql;
use query_engine_translation::translation::plan::{self, QueryPlan};
use query_engine_translation::translation::query;

use crate::format;

const PERSONA_AND_PROTOCOL: &str = r#"You are a friendly, helpful database assistant named DataBot. Your task is to help users access information from the database in a conversational way. When you need to query the database, internally formulate a JSON query, but DO NOT show this to the user. The query should follow this structure:

```json
{
  "queryDatabase": {
    "intent": "[count_records|check_existence|get_details]",
    "table": "[table_name]",
    "conditions": {
      "[column]": "[value]"
    },
    "fields": ["field1", "field2"]
  }
}
```

Here is the database schema:

"#;

const RESPONSE_RULES: &str = r#"

Your responses should be:
1. Conversational and friendly - like you're having a chat
2. Brief but informative
3. Occasionally add a touch of humor when appropriate

If a user asks about something not in the database, politely explain that you can only help with information stored in the database, and suggest some topics you can help with based on the schema.

IMPORTANT: Your final response to the user must NEVER contain any JSON, SQL, or technical details about how the query works. Instead, present the information in natural language as if you're having a conversation."#;

const APOLOGY_PROMPT: &str = "An error occurred while trying to query the database. \
     Please respond with a friendly error message that doesn't contain technical details.";

fn system_prompt(schema_context: &str) -> String {
    format!("{PERSONA_AND_PROTOCOL}{schema_context}{RESPONSE_RULES}")
}

fn follow_up_prompt(query_result: &str) -> String {
    format!(
        "I've queried the database with your question and found the following result: \
         {query_result}\n\nPlease respond to the user in a friendly, conversational way. \
         DO NOT include any JSON, SQL, or technical details in your response. \
         Just provide the information in a natural, helpful manner as if you're having a \
         conversation."
    )
}

/// Everything that can go wrong between detecting a lookup request and
/// producing its summary. Recovered in exactly one place: [`Conversation::respond`]
/// converts any of these into the apology turn.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Translation(#[from] query_engine_translation::translation::error::Error),
    #[error(transparent)]
    Execution(#[from] query_engine_execution::error::Error),
}

/// Drives the protocol for a single request. Dependencies are passed in at
/// construction; nothing here is shared between requests.
pub struct Conversation<'a> {
    chat: &'a dyn ChatClient,
    datasource: &'a dyn Datasource,
}

impl<'a> Conversation<'a> {
    pub fn new(chat: &'a dyn ChatClient, datasource: &'a dyn Datasource) -> Self {
        Conversation { chat, datasource }
    }

    /// Answer a natural-language question.
    ///
    /// Every path through here ends in exactly one generator call producing
    /// the final answer text; lookup failures of any kind reach the user only
    /// as a friendly apology. The sole exception is the chat transport
    /// itself failing, which the HTTP layer reports.
    pub async fn respond(&self, question: &str) -> Result<String, ChatError> {
        let schema = self.datasource.describe_schema().await;

        let mut messages = vec![
            Message::system(system_prompt(&schema.render())),
            Message::user(question),
        ];

        let initial_reply = self.chat.complete(&messages).await?;

        let lookup = match plan::parse_reply(&initial_reply) {
            // the generator judged no lookup was needed
            Ok(None) => return Ok(initial_reply),
            Ok(Some(plan)) => self.run_lookup(&schema, &plan).await,
            Err(err) => Err(LookupError::from(err)),
        };

        match lookup {
            Ok(query_result) => {
                messages.push(Message::user(follow_up_prompt(&query_result)));
            }
            Err(err) => {
                tracing::error!("query lookup failed: {}", err);
                messages.push(Message::user(APOLOGY_PROMPT));
            }
        }

        self.chat.complete(&messages).await
    }

    /// Dispatch a plan through synthesis, execution and formatting.
    async fn run_lookup(
        &self,
        schema: &SchemaDescription,
        plan: &QueryPlan,
    ) -> Result<String, LookupError> {
        let select = query::translate(schema, plan)?;
        let sql = select_to_sql(&select);
        let rows = self.datasource.execute(&sql).await?;
        Ok(format::summarize(plan.intent, &rows))
    }
}
