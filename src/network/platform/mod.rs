//! Platform-specific hardware address backends.
//!
//! Exactly one backend is compiled per target and exported as
//! [`PlatformBackend`].
//!
//! # Platform Support
//!
//! - **Linux**: `SIOCGIFHWADDR` ioctl on an `AF_INET` datagram socket.
//! - **macOS, FreeBSD**: `getifaddrs` scan for an `AF_LINK` record.
//! - **Windows**: `GetAdaptersAddresses`, matched by adapter friendly name.
//! - **Anything else**: [`UnsupportedBackend`], failing every call.

#[cfg(target_os = "linux")]
mod linux;

#[cfg(any(target_os = "macos", target_os = "freebsd"))]
mod bsd;

#[cfg(windows)]
mod windows;

mod unsupported;

pub use unsupported::UnsupportedBackend;

#[cfg(target_os = "linux")]
pub use linux::LinuxSockets;

#[cfg(any(target_os = "macos", target_os = "freebsd"))]
pub use bsd::{IfAddrs, IfAddrsEnumerator};

#[cfg(windows)]
pub use windows::{AdapterEnumerator, AdapterTable};

/// The backend for the target operating system.
#[cfg(target_os = "linux")]
pub type PlatformBackend = super::ioctl::IoctlBackend<LinuxSockets>;

/// The backend for the target operating system.
#[cfg(any(target_os = "macos", target_os = "freebsd"))]
pub type PlatformBackend = super::enumeration::EnumerationBackend<IfAddrsEnumerator>;

/// The backend for the target operating system.
#[cfg(windows)]
pub type PlatformBackend = super::enumeration::EnumerationBackend<AdapterEnumerator>;

/// The backend for the target operating system.
#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "freebsd",
    windows
)))]
pub type PlatformBackend = UnsupportedBackend;
