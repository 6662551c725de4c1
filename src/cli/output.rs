//! CLI output: error mapping and the command result surface.

use crate::error::ApiError;

/// Rendered command output plus whether the process should exit successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Schema(_) | ApiError::ConfigError(_) => format!("error: {}", e),
        _ => e.to_string(),
    }
}
