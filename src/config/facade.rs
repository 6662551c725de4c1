//! Config loader facade: assembles sources in precedence order.

use crate::config::merge::merge_policy::builder_with_defaults;
use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::ProbeConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`ProbeConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest first): defaults, global file, `config/config.toml`,
    /// `config/{MODELPROBE_ENV}.toml`, `MODELPROBE__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<ProbeConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);

        let config: ProbeConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from one explicit file, over defaults
    pub fn load_from_file(path: &Path) -> Result<ProbeConfig, ConfigError> {
        builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Path of the global config file, if a config home can be determined
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
