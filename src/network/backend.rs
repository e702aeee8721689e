//! Hardware address lookup trait and error types.

use super::HardwareAddress;
use std::io;
use thiserror::Error;

/// Error type for hardware address lookups.
///
/// Describes what went wrong without dictating recovery strategy.
/// Every variant is returned to the caller; nothing in this crate retries
/// or aborts the process.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The name does not fit the OS request record (`IFNAMSIZ` including terminator).
    #[error("Interface name '{interface}' is too long: at most {max} bytes allowed")]
    NameTooLong {
        /// The rejected interface name.
        interface: String,
        /// Maximum accepted name length in bytes, excluding the terminator.
        max: usize,
    },

    /// The name contains a NUL byte and cannot be passed to the OS.
    #[error("Interface name '{}' contains a NUL byte", interface.escape_debug())]
    InvalidName {
        /// The rejected interface name.
        interface: String,
    },

    /// The socket used to issue the control request could not be created.
    #[error("Failed to open control socket for '{interface}': {source}")]
    SocketCreation {
        /// The interface being looked up.
        interface: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The "get hardware address" control request failed.
    ///
    /// Typical causes are a non-existent device or insufficient permissions.
    #[error("{operation} failed for interface '{interface}': {source}")]
    ControlRequest {
        /// The interface being looked up.
        interface: String,
        /// Name of the control request that failed (e.g. `SIOCGIFHWADDR`).
        operation: &'static str,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The OS could not produce the interface address list.
    #[error("Failed to enumerate interface addresses while looking up '{interface}': {source}")]
    Enumeration {
        /// The interface being looked up.
        interface: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// No link-layer record matched the requested name.
    #[error("No link-layer address found for interface '{interface}'")]
    NotFound {
        /// The interface being looked up.
        interface: String,
    },

    /// The matching record does not carry a 6-byte address.
    #[error("Interface '{interface}' has a {length}-byte link-layer address, expected 6")]
    AddressLength {
        /// The interface being looked up.
        interface: String,
        /// Length of the address the OS reported.
        length: usize,
    },

    /// No backend exists for the target operating system.
    #[error("Hardware address lookup is not supported on {os}")]
    UnsupportedPlatform {
        /// The target operating system name.
        os: &'static str,
    },
}

impl ResolveError {
    /// Returns the interface name the failed lookup was for, if any.
    #[must_use]
    pub fn interface(&self) -> Option<&str> {
        match self {
            Self::NameTooLong { interface, .. }
            | Self::InvalidName { interface }
            | Self::SocketCreation { interface, .. }
            | Self::ControlRequest { interface, .. }
            | Self::Enumeration { interface, .. }
            | Self::NotFound { interface }
            | Self::AddressLength { interface, .. } => Some(interface),
            Self::UnsupportedPlatform { .. } => None,
        }
    }
}

/// Trait for resolving the hardware address of a named interface.
///
/// # Design
///
/// - Each OS family provides one implementation, chosen at build time
/// - Enables dependency injection for testing with mock implementations
/// - Implementations hold no state between calls; every OS handle is
///   acquired and released inside [`lookup`](Self::lookup)
///
/// # Example
///
/// ```ignore
/// use ifhwaddr::network::{HardwareAddress, HardwareAddressBackend, ResolveError};
///
/// struct FixedBackend(HardwareAddress);
///
/// impl HardwareAddressBackend for FixedBackend {
///     fn lookup(&self, _interface: &str) -> Result<HardwareAddress, ResolveError> {
///         Ok(self.0)
///     }
/// }
/// ```
pub trait HardwareAddressBackend: Send + Sync {
    /// Looks up the hardware address of `interface`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the name is rejected, the OS call fails,
    /// or no matching link-layer address exists. See the variants for which
    /// backend produces which error.
    fn lookup(&self, interface: &str) -> Result<HardwareAddress, ResolveError>;
}

impl<B: HardwareAddressBackend + ?Sized> HardwareAddressBackend for &B {
    fn lookup(&self, interface: &str) -> Result<HardwareAddress, ResolveError> {
        (**self).lookup(interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(HardwareAddress);

    impl HardwareAddressBackend for FixedBackend {
        fn lookup(&self, interface: &str) -> Result<HardwareAddress, ResolveError> {
            if interface == "eth0" {
                Ok(self.0)
            } else {
                Err(ResolveError::NotFound {
                    interface: interface.to_string(),
                })
            }
        }
    }

    fn lookup_via<B: HardwareAddressBackend>(
        backend: B,
        name: &str,
    ) -> Result<HardwareAddress, ResolveError> {
        backend.lookup(name)
    }

    #[test]
    fn backend_is_usable_through_a_reference() {
        let backend = FixedBackend(HardwareAddress::new([1, 2, 3, 4, 5, 6]));

        assert_eq!(
            lookup_via(&backend, "eth0").unwrap(),
            HardwareAddress::new([1, 2, 3, 4, 5, 6])
        );
        assert!(lookup_via(&backend, "eth1").is_err());
    }

    #[test]
    fn control_request_error_names_operation_interface_and_cause() {
        let error = ResolveError::ControlRequest {
            interface: "eth9".to_string(),
            operation: "SIOCGIFHWADDR",
            source: io::Error::new(io::ErrorKind::NotFound, "No such device"),
        };

        let message = error.to_string();
        assert!(message.contains("SIOCGIFHWADDR"));
        assert!(message.contains("eth9"));
        assert!(message.contains("No such device"));
    }

    #[test]
    fn not_found_error_names_interface() {
        let error = ResolveError::NotFound {
            interface: "en7".to_string(),
        };
        assert!(error.to_string().contains("en7"));
        assert_eq!(error.interface(), Some("en7"));
    }

    #[test]
    fn enumeration_error_keeps_source() {
        let error = ResolveError::Enumeration {
            interface: "en0".to_string(),
            source: io::Error::other("out of memory"),
        };
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.to_string().contains("out of memory"));
    }

    #[test]
    fn name_too_long_reports_limit() {
        let error = ResolveError::NameTooLong {
            interface: "a-very-long-interface-name".to_string(),
            max: 15,
        };
        assert!(error.to_string().contains("15"));
    }

    #[test]
    fn invalid_name_escapes_nul() {
        let error = ResolveError::InvalidName {
            interface: "eth\0x".to_string(),
        };
        assert!(error.to_string().contains("eth\\0x"));
    }

    #[test]
    fn unsupported_platform_has_no_interface() {
        let error = ResolveError::UnsupportedPlatform { os: "plan9" };
        assert!(error.to_string().contains("plan9"));
        assert_eq!(error.interface(), None);
    }
}
