//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

use super::defaults;

/// ifhwaddr: interface hardware address lookup
///
/// Prints the 6-byte link-layer (MAC) address of each named
/// network interface.
#[derive(Debug, Parser)]
#[command(name = "ifhwaddr")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Interface names to look up (replace `lookup.interfaces` from the config file).
    /// Put `--` first to look up an interface literally named `init`
    #[arg(value_name = "INTERFACE")]
    pub interfaces: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Read settings from this TOML file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log at debug level (`RUST_LOG` still overrides)
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a commented config template
    Init {
        /// Where to write it
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// `eth0 aa:bb:cc:dd:ee:ff`
    #[value(name = "colon")]
    Colon,
    /// `eth0 AA-BB-CC-DD-EE-FF`
    #[value(name = "hyphen")]
    Hyphen,
    /// `aabbccddeeff`
    #[value(name = "bare")]
    Bare,
    /// One JSON object per line
    #[value(name = "json")]
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Colon => Self::Colon,
            FormatArg::Hyphen => Self::Hyphen,
            FormatArg::Bare => Self::Bare,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses `std::env::args`, exiting with usage on error.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses an explicit argument list; the first item is the program name.
    #[must_use]
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
