//! Extract a structured query plan from free-form generated text.

use indexmap::IndexMap;
use serde::Deserialize;

use super::error::Error;

/// The marker the generator embeds when it wants a database lookup. The
/// surrounding quotes are part of the marker: the payload always carries the
/// key in quoted JSON form, while prose mentioning the word alone does not
/// trigger a lookup.
pub const QUERY_MARKER: &str = "\"queryDatabase\"";

/// The closed set of lookups the generator may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    CountRecords,
    CheckExistence,
    GetDetails,
}

/// A structured description of a requested database lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub intent: Intent,
    /// Target table. Validated against the schema snapshot before any SQL is
    /// built.
    pub table: String,
    /// Column/value filters, in the order the generator wrote them.
    pub conditions: IndexMap<String, serde_json::Value>,
    /// Columns to return; empty means all.
    pub fields: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "queryDatabase")]
    query_database: Payload,
}

#[derive(Debug, Deserialize)]
struct Payload {
    intent: Intent,
    table: String,
    #[serde(default)]
    conditions: Option<IndexMap<String, serde_json::Value>>,
    #[serde(default)]
    fields: Option<Vec<String>>,
}

/// Decide whether a generated reply requests a lookup, and decode it if so.
///
/// `Ok(None)` means the generator answered directly and no lookup is needed.
/// Decoding fails closed: malformed JSON, a missing `queryDatabase` key, an
/// unknown intent or a mistyped field are all errors, never partial plans.
pub fn parse_reply(reply: &str) -> Result<Option<QueryPlan>, Error> {
    if !reply.contains(QUERY_MARKER) {
        return Ok(None);
    }

    let payload = extract_payload(reply)?;
    let envelope: Envelope =
        serde_json::from_str(payload).map_err(|err| Error::PlanDecode(err.to_string()))?;

    let Payload {
        intent,
        table,
        conditions,
        fields,
    } = envelope.query_database;

    Ok(Some(QueryPlan {
        intent,
        table,
        conditions: conditions.unwrap_or_default(),
        fields: fields.unwrap_or_default(),
    }))
}

/// Slice the structured payload out of a reply that may wrap it in prose or
/// markdown. Tried in order: a ```json fence, any fence, the outermost pair
/// of braces. With none of those, the whole reply goes to the decoder.
fn extract_payload(text: &str) -> Result<&str, Error> {
    if let Some(open) = text.find("```json") {
        return fenced_content(&text[open + "```json".len()..]);
    }

    if let Some(open) = text.find("```") {
        return fenced_content(&text[open + "```".len()..]);
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Ok(text),
    }
}

fn fenced_content(rest: &str) -> Result<&str, Error> {
    let end = rest.find("```").ok_or(Error::UnterminatedFence)?;
    Ok(rest[..end].trim())
}
