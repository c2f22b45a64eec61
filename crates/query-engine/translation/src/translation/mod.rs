//! Turn the text generator's reply into a SQL AST to be run against the
//! database: detect and decode the embedded query plan, validate it against
//! the schema snapshot, and build the SELECT it describes.

pub mod error;
pub mod plan;
pub mod query;
