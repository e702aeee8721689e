//! Fallback for targets without a hardware address backend.

use crate::network::{HardwareAddress, HardwareAddressBackend, ResolveError};

/// Backend compiled on targets that have no lookup implementation.
///
/// Every call fails with [`ResolveError::UnsupportedPlatform`].
#[derive(Debug, Clone, Default)]
pub struct UnsupportedBackend {
    _private: (),
}

impl UnsupportedBackend {
    /// Creates the fallback backend.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl HardwareAddressBackend for UnsupportedBackend {
    fn lookup(&self, interface: &str) -> Result<HardwareAddress, ResolveError> {
        tracing::debug!("No hardware address backend for this target, cannot resolve '{interface}'");
        Err(ResolveError::UnsupportedPlatform {
            os: std::env::consts::OS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_lookup_reports_unsupported_platform() {
        let backend = UnsupportedBackend::new();

        let error = backend.lookup("eth0").unwrap_err();

        assert!(matches!(
            error,
            ResolveError::UnsupportedPlatform { os } if os == std::env::consts::OS
        ));
    }
}
