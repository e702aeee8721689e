//! The merged command line and config file, checked once up front.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;

use crate::output::OutputFormat;

use super::cli::{Cli, FormatArg};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// What the binary resolves and how it prints it.
///
/// Only [`ValidatedConfig::from_raw`] and [`ValidatedConfig::load`] build one,
/// so every instance holds at least one usable interface name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Interfaces to resolve, in order, without duplicates (required)
    pub interfaces: Vec<String>,

    /// Output format
    pub format: OutputFormat,

    /// Debug-level logging
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ interfaces: [{}], format: {} }}",
            self.interfaces.join(", "),
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Merges the command line over an optional parsed config file.
    ///
    /// # Errors
    ///
    /// Fails when:
    /// - No interface is given by either source
    /// - An interface name is empty or contains a NUL byte
    /// - The output format name is unknown
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let interfaces = Self::resolve_interfaces(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            interfaces,
            format,
            verbose: cli.verbose,
        })
    }

    /// Reads `--config` if given, then merges as [`ValidatedConfig::from_raw`].
    ///
    /// # Errors
    ///
    /// Any read or parse failure of the file, or any merge failure.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = cli.config.as_deref().map(TomlConfig::load).transpose()?;
        Self::from_raw(cli, file.as_ref())
    }

    fn resolve_interfaces(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Vec<String>, ConfigError> {
        // CLI list replaces the TOML list entirely
        let source: &[String] = if !cli.interfaces.is_empty() {
            &cli.interfaces
        } else if let Some(toml) = toml {
            &toml.lookup.interfaces
        } else {
            &[]
        };

        if source.is_empty() {
            return Err(ConfigError::missing(
                field::INTERFACES,
                "Name interfaces on the command line or set lookup.interfaces in config file",
            ));
        }

        let mut interfaces: Vec<String> = Vec::with_capacity(source.len());
        for name in source {
            validate_interface(name)?;
            // Keep the first occurrence only
            if !interfaces.contains(name) {
                interfaces.push(name.clone());
            }
        }

        Ok(interfaces)
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        // --format, then output.format, then the built-in default
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        match toml.and_then(|t| t.output.format.as_deref()) {
            Some(value) => parse_format(value),
            None => Ok(defaults::FORMAT),
        }
    }
}

/// Writes the commented template used by `ifhwaddr init`.
///
/// # Errors
///
/// [`ConfigError::FileWrite`] if `path` cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, super::toml::default_config_template()).map_err(|source| {
        ConfigError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

// Same names as `--format`, ignoring case.
fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    FormatArg::from_str(s, true)
        .map(OutputFormat::from)
        .map_err(|_| ConfigError::InvalidFormat {
            value: s.to_string(),
        })
}

fn validate_interface(name: &str) -> Result<(), ConfigError> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name.contains('\0') {
        "name contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidInterface {
        name: name.to_string(),
        reason,
    })
}
