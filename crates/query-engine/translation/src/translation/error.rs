//! Errors arising while interpreting a generated reply.

use thiserror::Error;

/// An error occurred when decoding or translating a query plan.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("unterminated code fence in generated reply")]
    UnterminatedFence,
    #[error("unable to decode query plan: {0}")]
    PlanDecode(String),
    #[error("query plan names no table")]
    EmptyTableName,
    #[error("table {0} not found in schema")]
    TableNotFound(String),
}
