//! CLI parse: clap types for modelprobe. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// modelprobe - grade a data model by structural field matching
#[derive(Parser)]
#[command(name = "modelprobe")]
#[command(about = "Resolve semantic roles to declared fields in a student's data model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (for config/ lookup)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every check against a models file and print the grading report
    Check {
        /// Models file (TOML)
        schema: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Resolve one role of an entity to its declared field
    Resolve {
        /// Models file (TOML)
        schema: PathBuf,
        /// Entity: post, comment or user
        entity: String,
        /// Role name (e.g. text, author, image)
        role: String,
    },
    /// List the roles an entity expects
    Roles {
        /// Entity: post, comment or user
        entity: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show which declared model stands for each entity
    Discover {
        /// Models file (TOML)
        schema: PathBuf,
    },
}
