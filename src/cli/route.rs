//! CLI route: single route table and run context. Dispatches to library services and presentation.

use crate::adapter::{Adapters, ModelAdapter};
use crate::config::{ConfigLoader, ProbeConfig};
use crate::discovery::find_entity_model;
use crate::error::ApiError;
use crate::registry::EntityKind;
use crate::report::check_schema;
use crate::schema::{load_schema_file, SchemaSet};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::output::CommandOutput;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_discovery_text, format_report_json, format_report_text, format_resolution_text,
    format_roles_json, format_roles_text,
};

/// Runtime context for CLI execution: workspace, loaded config and adapters.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: ProbeConfig,
    adapters: Adapters,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::with_config(workspace_root, config)
    }

    /// Create run context from an already-loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: ProbeConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            ApiError::ConfigError(joined)
        })?;

        let adapters = Adapters::new(&config);
        Ok(Self {
            workspace_root,
            config,
            adapters,
        })
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.as_ref().map(|o| o.success).unwrap_or(false),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Check { schema, format } => {
                let schema = self.load_schema(schema)?;
                let report = check_schema(&schema, &self.config);
                let text = if format == "json" {
                    format_report_json(&report)?
                } else {
                    format_report_text(&report, std::io::stdout().is_terminal())
                };
                Ok(CommandOutput {
                    text,
                    success: report.is_success(),
                })
            }
            Commands::Resolve {
                schema,
                entity,
                role,
            } => {
                let entity: EntityKind = entity.parse()?;
                let schema = self.load_schema(schema)?;
                let class = self.adapters.for_schema(entity, &schema)?;
                let field = class.student_field_name(role)?;
                Ok(CommandOutput::ok(format_resolution_text(
                    entity,
                    role,
                    &class.item_model().name,
                    &field,
                )))
            }
            Commands::Roles { entity, format } => {
                let entity: EntityKind = entity.parse()?;
                let registry = self.adapters.registries().get(entity);
                let text = if format == "json" {
                    format_roles_json(registry)?
                } else {
                    format_roles_text(registry)
                };
                Ok(CommandOutput::ok(text))
            }
            Commands::Discover { schema } => {
                let schema = self.load_schema(schema)?;
                let found: Vec<_> = EntityKind::ALL
                    .into_iter()
                    .map(|entity| {
                        let result = find_entity_model(entity, &schema, &self.config.entities)
                            .map(|model| model.name.clone())
                            .map_err(|e| e.to_string());
                        (entity, result)
                    })
                    .collect();
                let success = found.iter().all(|(_, r)| r.is_ok());
                Ok(CommandOutput {
                    text: format_discovery_text(&found),
                    success,
                })
            }
        }
    }

    /// Schema paths are taken relative to the workspace root unless absolute
    fn load_schema(&self, path: &Path) -> Result<SchemaSet, ApiError> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        };
        debug!(path = %path.display(), "Loading models file");
        Ok(load_schema_file(&path)?)
    }
}
