//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name recorded on log events (e.g. "check", "roles").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Check { .. } => "check",
        Commands::Resolve { .. } => "resolve",
        Commands::Roles { .. } => "roles",
        Commands::Discover { .. } => "discover",
    }
}
