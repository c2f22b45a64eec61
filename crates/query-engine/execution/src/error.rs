//! Errors during query execution.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error communicating with the database: {0}")]
    Db(#[from] sqlx::Error),
}
