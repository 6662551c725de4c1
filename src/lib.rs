//! modelprobe: Structural Field Resolution
//!
//! Grades a student-authored data model without knowing what the student named
//! their fields. Each semantic role ("the comment's text", "the post's image")
//! is matched to the one declared field whose kind and relation target fit it.
//! Adapters wrap models and instances so checks read and write by role.

pub mod adapter;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod expect;
pub mod logging;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod schema;
pub mod signature;
pub mod store;
