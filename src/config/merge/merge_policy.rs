//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with merge policy defaults applied.
///
/// Lists (`entities.known_models`) are replaced wholesale by later sources,
/// never concatenated.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("entities.post_model", "Post")?
        .set_default("entities.user_model", "User")?
        .set_default("display.comment_text_len", 50)?
        .set_default("logging.level", "warn")
}
