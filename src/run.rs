//! The lookup loop behind the binary: one line per resolved interface.

use std::io::{self, Write};

use thiserror::Error;

use ifhwaddr::config::ValidatedConfig;
use ifhwaddr::network::HardwareAddressBackend;
use ifhwaddr::output::render;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// One or more interfaces could not be resolved.
    #[error("Failed to resolve {} of {total} interface(s): {}", failed.len(), failed.join(", "))]
    Lookup {
        /// Names of the interfaces that failed, in lookup order
        failed: Vec<String>,
        /// Number of interfaces attempted
        total: usize,
    },

    /// Writing a result to the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Resolves every interface of `config` with `backend`, writing results to `out`.
///
/// Every interface is attempted even after a failure; each failure is
/// logged with its cause.
///
/// # Errors
///
/// - [`RunError::Lookup`] if any interface failed to resolve
/// - [`RunError::Output`] if writing to `out` failed
pub fn execute<B, W>(config: &ValidatedConfig, backend: &B, out: &mut W) -> Result<(), RunError>
where
    B: HardwareAddressBackend + ?Sized,
    W: Write + ?Sized,
{
    let mut failed = Vec::new();

    for interface in &config.interfaces {
        match backend.lookup(interface) {
            Ok(address) => {
                writeln!(out, "{}", render(interface, address, config.format))
                    .map_err(RunError::Output)?;
            }
            Err(e) => {
                tracing::error!("{e}");
                failed.push(interface.clone());
            }
        }
    }

    out.flush().map_err(RunError::Output)?;

    if failed.is_empty() {
        Ok(())
    } else {
        Err(RunError::Lookup {
            failed,
            total: config.interfaces.len(),
        })
    }
}
