//! Hardware address lookup by scanning the interface address list.
//!
//! Used on BSD-derived systems (`getifaddrs`) and on Windows
//! (`GetAdaptersAddresses`). The scan itself is OS-independent; the list
//! comes from an [`AddressEnumerator`].

use std::io;

use super::{HardwareAddress, HardwareAddressBackend, ResolveError};

/// Address carried by one interface record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAddress<'a> {
    /// Link-layer (`AF_LINK`) address payload, exactly as long as the OS reports.
    Link(&'a [u8]),
    /// Any other address family, kept for logging.
    Other(i32),
}

/// One record of the interface address list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceEntry<'a> {
    /// Interface name bytes, without terminator.
    pub name: &'a [u8],
    /// The record's address, `None` when the OS left the pointer null.
    pub address: Option<EntryAddress<'a>>,
}

impl InterfaceEntry<'_> {
    /// Returns the link-layer payload if this record is a link-layer record for `name`.
    fn link_address_for(&self, name: &[u8]) -> Option<&[u8]> {
        match self.address {
            Some(EntryAddress::Link(bytes)) if self.name == name => Some(bytes),
            _ => None,
        }
    }
}

/// A live interface address list. Dropping it releases the OS resources.
pub trait InterfaceTable {
    /// Iterates the records in OS order.
    fn entries(&self) -> impl Iterator<Item = InterfaceEntry<'_>>;
}

/// OS operation the enumeration backend needs.
pub trait AddressEnumerator: Send + Sync {
    /// The list type handed out by [`enumerate`](Self::enumerate).
    type Table: InterfaceTable;

    /// Produces the current interface address list.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the list cannot be produced.
    fn enumerate(&self) -> io::Result<Self::Table>;
}

/// [`HardwareAddressBackend`] that scans the interface address list for a
/// link-layer record with the requested name.
///
/// The first matching record wins.
#[derive(Debug, Clone, Default)]
pub struct EnumerationBackend<E> {
    enumerator: E,
}

impl<E: AddressEnumerator> EnumerationBackend<E> {
    /// Creates a backend on top of the given OS layer.
    #[must_use]
    pub const fn new(enumerator: E) -> Self {
        Self { enumerator }
    }
}

impl<E: AddressEnumerator> HardwareAddressBackend for EnumerationBackend<E> {
    fn lookup(&self, interface: &str) -> Result<HardwareAddress, ResolveError> {
        tracing::debug!("Resolving hardware address of '{interface}' via interface enumeration");

        let table = self
            .enumerator
            .enumerate()
            .map_err(|source| ResolveError::Enumeration {
                interface: interface.to_string(),
                source,
            })?;

        let wanted = interface.as_bytes();
        let found = table.entries().find_map(|entry| {
            tracing::trace!(
                "Scanning record {} ({:?})",
                String::from_utf8_lossy(entry.name),
                entry.address
            );
            entry
                .link_address_for(wanted)
                .map(|bytes| HardwareAddress::from_slice(bytes).ok_or(bytes.len()))
        });
        drop(table);

        match found {
            Some(Ok(address)) => {
                tracing::debug!("Interface '{interface}' reports {address}");
                Ok(address)
            }
            Some(Err(length)) => Err(ResolveError::AddressLength {
                interface: interface.to_string(),
                length,
            }),
            None => Err(ResolveError::NotFound {
                interface: interface.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "enumeration_tests.rs"]
mod tests;
