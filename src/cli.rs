//! CLI domain: parse, route, help, output, and presentation only.
//! No probing logic; a single route table dispatches to the library.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{map_error, CommandOutput};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_discovery_text, format_report_json, format_report_text, format_resolution_text,
    format_roles_json, format_roles_text,
};
pub use route::RunContext;
