//! Property-based tests for resolution guarantees

mod resolution;
