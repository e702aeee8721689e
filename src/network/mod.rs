//! Hardware address lookup for named network interfaces.
//!
//! This module provides:
//! - The address value type ([`HardwareAddress`])
//! - The backend seam and its errors ([`HardwareAddressBackend`], [`ResolveError`])
//! - The OS-independent lookup algorithms ([`ioctl`], [`enumeration`])
//! - Platform-specific OS layers ([`platform`])
//! - The one-call entry point ([`resolve`])

mod address;
mod backend;
pub mod enumeration;
pub mod ioctl;
pub mod platform;

pub use address::{HARDWARE_ADDRESS_LEN, HardwareAddress};
pub use backend::{HardwareAddressBackend, ResolveError};

use platform::PlatformBackend;

/// Resolves the hardware address of `interface` with the backend for this OS.
///
/// Each call opens and releases its own OS handle; nothing is cached.
///
/// # Errors
///
/// Returns [`ResolveError`] if the interface does not exist, has no 6-byte
/// link-layer address, the OS call fails, or the platform is unsupported.
pub fn resolve(interface: &str) -> Result<HardwareAddress, ResolveError> {
    PlatformBackend::default().lookup(interface)
}
