//! Shape of `ifhwaddr.toml`.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// A parsed config file. Every key is optional; missing ones fall through to
/// the command line or the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// `[lookup]`
    #[serde(default)]
    pub lookup: LookupSection,

    /// `[output]`
    #[serde(default)]
    pub output: OutputSection,
}

/// Which interfaces to resolve.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSection {
    /// Interface names to resolve, in order
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// How results are printed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "colon", "hyphen", "bare", or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::FileRead`] or [`ConfigError::TomlParse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// # Errors
    ///
    /// [`ConfigError::TomlParse`] on malformed input or unknown keys.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// The file written by `ifhwaddr init`, every key commented out.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ifhwaddr Configuration File

[lookup]
# Interface names to resolve, in order (required unless given on the command line)
# Note: interfaces named on the command line REPLACE this list entirely
# interfaces = ["eth0", "wlan0"]

[output]
# Output format (default: colon)
# Accepted values: "colon", "hyphen", "bare", "json"
# format = "colon"
"#
    .to_string()
}
