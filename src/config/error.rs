//! Configuration errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Anything that stops the command line and config file from becoming a
/// [`ValidatedConfig`](super::ValidatedConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Cannot read config file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Malformed config file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `init` could not write the template.
    #[error("Cannot write config template '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Neither the command line nor the config file supplied a value.
    #[error("No {field} given. {hint}")]
    MissingRequired {
        field: &'static str,
        hint: &'static str,
    },

    /// Unknown output format name.
    #[error("Invalid output format '{value}': expected colon, hyphen, bare, or json")]
    InvalidFormat { value: String },

    /// Interface name that can never be looked up.
    #[error("Invalid interface name '{}': {reason}", name.escape_debug())]
    InvalidInterface { name: String, reason: &'static str },
}

/// Field names carried by [`ConfigError::MissingRequired`].
pub mod field {
    pub const INTERFACES: &str = "interfaces";
}

impl ConfigError {
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
