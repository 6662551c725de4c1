//! Integration tests for structural field resolution and grading

mod adapter_access;
mod check_report;
mod resolver_scenarios;
mod schema_loading;
