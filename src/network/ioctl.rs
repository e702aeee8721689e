//! Hardware address lookup through a socket control request.
//!
//! The algorithm lives here and is OS-independent; the actual system calls
//! are behind [`SocketControl`], implemented for Linux in
//! [`platform`](super::platform) and by mocks in tests.

use std::io;

use super::{HARDWARE_ADDRESS_LEN, HardwareAddress, HardwareAddressBackend, ResolveError};

/// Size of the interface name field in the request record, terminator included.
pub const IFNAMSIZ: usize = 16;

/// Size of the address data carried in a generic `sockaddr`.
pub const ADDRESS_DATA_LEN: usize = 14;

/// Platform-neutral mirror of the `ifreq` record used for the request.
///
/// The name is stored NUL-padded in a fixed field; the OS fills in the
/// family tag and address data on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareAddressRequest {
    name: [u8; IFNAMSIZ],
    family: u16,
    data: [u8; ADDRESS_DATA_LEN],
}

impl HardwareAddressRequest {
    /// Builds a request for `interface`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NameTooLong`] if the name plus terminator exceeds [`IFNAMSIZ`]
    /// - [`ResolveError::InvalidName`] if the name contains a NUL byte
    pub fn new(interface: &str) -> Result<Self, ResolveError> {
        let bytes = interface.as_bytes();
        if bytes.len() >= IFNAMSIZ {
            return Err(ResolveError::NameTooLong {
                interface: interface.to_string(),
                max: IFNAMSIZ - 1,
            });
        }
        if bytes.contains(&0) {
            return Err(ResolveError::InvalidName {
                interface: interface.to_string(),
            });
        }

        let mut name = [0u8; IFNAMSIZ];
        name[..bytes.len()].copy_from_slice(bytes);

        Ok(Self {
            name,
            family: 0,
            data: [0u8; ADDRESS_DATA_LEN],
        })
    }

    /// The NUL-padded name field, as copied into the OS record.
    #[must_use]
    pub const fn name_field(&self) -> &[u8; IFNAMSIZ] {
        &self.name
    }

    /// The interface name without padding.
    #[must_use]
    pub fn name(&self) -> &[u8] {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(IFNAMSIZ);
        &self.name[..end]
    }

    /// Address family the OS tagged the result with (an `ARPHRD_*` value on Linux).
    #[must_use]
    pub const fn family(&self) -> u16 {
        self.family
    }

    /// Stores the OS-reported family and address data.
    ///
    /// Data beyond [`ADDRESS_DATA_LEN`] bytes is ignored; missing bytes stay zero.
    pub fn fill(&mut self, family: u16, data: &[u8]) {
        self.family = family;
        let len = data.len().min(ADDRESS_DATA_LEN);
        self.data[..len].copy_from_slice(&data[..len]);
    }

    /// The first six bytes of the address data.
    #[must_use]
    pub fn hardware_address(&self) -> HardwareAddress {
        let mut octets = [0u8; HARDWARE_ADDRESS_LEN];
        octets.copy_from_slice(&self.data[..HARDWARE_ADDRESS_LEN]);
        HardwareAddress::new(octets)
    }
}

/// OS operations the ioctl backend needs.
///
/// The socket is released when the `Socket` value is dropped.
pub trait SocketControl: Send + Sync {
    /// Owned socket handle, closed on drop.
    type Socket;

    /// Name of the control request, used in error messages.
    const OPERATION: &'static str;

    /// Opens a datagram socket used only as an instrument for the request.
    ///
    /// # Errors
    ///
    /// Returns the OS error if no socket could be created.
    fn open_socket(&self) -> io::Result<Self::Socket>;

    /// Issues the "get hardware address" request on `socket`.
    ///
    /// On success the implementation must have called
    /// [`HardwareAddressRequest::fill`] with the OS-reported address.
    ///
    /// # Errors
    ///
    /// Returns the OS error reported for the request.
    fn request_hardware_address(
        &self,
        socket: &Self::Socket,
        request: &mut HardwareAddressRequest,
    ) -> io::Result<()>;
}

/// [`HardwareAddressBackend`] that asks the kernel through a socket control request.
#[derive(Debug, Clone, Default)]
pub struct IoctlBackend<S> {
    sys: S,
}

impl<S: SocketControl> IoctlBackend<S> {
    /// Creates a backend on top of the given OS layer.
    #[must_use]
    pub const fn new(sys: S) -> Self {
        Self { sys }
    }
}

impl<S: SocketControl> HardwareAddressBackend for IoctlBackend<S> {
    fn lookup(&self, interface: &str) -> Result<HardwareAddress, ResolveError> {
        tracing::debug!("Resolving hardware address of '{interface}' via {}", S::OPERATION);

        let mut request = HardwareAddressRequest::new(interface)?;

        let socket = self
            .sys
            .open_socket()
            .map_err(|source| ResolveError::SocketCreation {
                interface: interface.to_string(),
                source,
            })?;

        let outcome = self.sys.request_hardware_address(&socket, &mut request);
        drop(socket);

        if let Err(source) = outcome {
            return Err(ResolveError::ControlRequest {
                interface: interface.to_string(),
                operation: S::OPERATION,
                source,
            });
        }

        let address = request.hardware_address();
        tracing::debug!(
            "Interface '{interface}' reports {address} (family {})",
            request.family()
        );
        Ok(address)
    }
}

#[cfg(test)]
#[path = "ioctl_tests.rs"]
mod tests;
