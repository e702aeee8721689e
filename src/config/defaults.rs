//! Default values for configuration options.

use crate::output::OutputFormat;

/// Default output format.
pub const FORMAT: OutputFormat = OutputFormat::Colon;

/// Default path written by the `init` subcommand.
pub const CONFIG_FILE: &str = "ifhwaddr.toml";
