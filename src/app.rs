//! Process-level plumbing for the binary: exit codes, hints and logging.

use ifhwaddr::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    use std::process::ExitCode;

    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad arguments, unreadable config file, no interfaces.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// At least one interface could not be resolved (exit code 2).
    ///
    /// `ExitCode::from` is not `const`.
    pub fn lookup_failed() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Follows a configuration error on stderr with what to do about it.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::INTERFACES => {
            eprintln!("\nUsage: ifhwaddr <INTERFACE>... (or run 'ifhwaddr init' for a config template)");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'ifhwaddr init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Installs the global subscriber: INFO, or DEBUG with `--verbose`, unless
/// `RUST_LOG` says otherwise. Writes to stderr; stdout is for results.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
