//! Configuration System
//!
//! Layered configuration for probing runs: which model names the assignment
//! fixes, how displayed values are normalized, and logging. Sources, lowest
//! precedence first: built-in defaults, the global config file, the workspace
//! `config/` files, then `MODELPROBE__*` environment variables.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub entities: EntitiesConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Model names the assignment fixes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitiesConfig {
    #[serde(default = "default_post_model")]
    pub post_model: String,

    #[serde(default = "default_user_model")]
    pub user_model: String,

    /// Models that are never taken for the comment model
    #[serde(default = "default_known_models")]
    pub known_models: Vec<String>,
}

fn default_post_model() -> String {
    "Post".to_string()
}

fn default_user_model() -> String {
    "User".to_string()
}

fn default_known_models() -> Vec<String> {
    ["BaseModel", "Meta", "Category", "Location", "Post"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            post_model: default_post_model(),
            user_model: default_user_model(),
            known_models: default_known_models(),
        }
    }
}

impl EntitiesConfig {
    /// Whether `name` is a model the assignment names explicitly
    pub fn is_known(&self, name: &str) -> bool {
        name == self.post_model
            || name == self.user_model
            || self.known_models.iter().any(|k| k == name)
    }
}

/// How displayed values are normalized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters of a comment's first line shown on a page
    #[serde(default = "default_comment_text_len")]
    pub comment_text_len: usize,
}

fn default_comment_text_len() -> usize {
    50
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            comment_text_len: default_comment_text_len(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Entities(String),
    Display(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Entities(msg) => write!(f, "Entities: {}", msg),
            ValidationError::Display(msg) => write!(f, "Display: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ProbeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.entities.post_model.trim().is_empty() {
            errors.push(ValidationError::Entities(
                "post_model cannot be empty".to_string(),
            ));
        }
        if self.entities.user_model.trim().is_empty() {
            errors.push(ValidationError::Entities(
                "user_model cannot be empty".to_string(),
            ));
        }
        if self.entities.post_model == self.entities.user_model {
            errors.push(ValidationError::Entities(format!(
                "post_model and user_model are both '{}'",
                self.entities.post_model
            )));
        }

        if self.display.comment_text_len == 0 {
            errors.push(ValidationError::Display(
                "comment_text_len must be positive".to_string(),
            ));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
