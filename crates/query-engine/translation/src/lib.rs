//! Translate a generated reply into an executable query description.

pub mod translation;
