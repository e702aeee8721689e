//! Configuration layer for the `ifhwaddr` binary.
//!
//! [`Cli`] is parsed by clap, [`TomlConfig`] is read from `--config`, and
//! both are folded into a [`ValidatedConfig`]. `ifhwaddr init` writes a
//! commented file via [`write_default_config`].
//!
//! # Precedence
//!
//! A value given on the command line wins over the config file, which wins
//! over [`defaults`].
//!
//! Interfaces named on the command line **replace** `lookup.interfaces`
//! from the file (not merged). Duplicate names are dropped, keeping the
//! first occurrence.
//!
//! `--verbose` is CLI-only.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, FormatArg};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
