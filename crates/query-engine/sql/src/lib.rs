//! SQL AST types and the low-level string representation of a SQL query.

pub mod sql;
