//! Windows adapter list using `GetAdaptersAddresses`.

use std::io;

use crate::network::enumeration::{AddressEnumerator, EntryAddress, InterfaceEntry, InterfaceTable};
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST,
    GAA_FLAG_SKIP_UNICAST, GET_ADAPTERS_ADDRESSES_FLAGS, GetAdaptersAddresses,
    IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::Networking::WinSock::AF_UNSPEC;

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`AddressEnumerator`] using `GetAdaptersAddresses`.
///
/// Each adapter becomes one link-layer record named by its friendly name
/// (e.g. "Ethernet", "Wi-Fi").
///
/// # Example
///
/// ```no_run
/// use ifhwaddr::network::HardwareAddressBackend;
/// use ifhwaddr::network::enumeration::EnumerationBackend;
/// use ifhwaddr::network::platform::AdapterEnumerator;
///
/// let backend = EnumerationBackend::new(AdapterEnumerator::new());
/// let address = backend.lookup("Ethernet").expect("lookup failed");
/// println!("Ethernet {address}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdapterEnumerator {
    _private: (),
}

impl AdapterEnumerator {
    /// Creates the Windows OS layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressEnumerator for AdapterEnumerator {
    type Table = AdapterTable;

    fn enumerate(&self) -> io::Result<AdapterTable> {
        let raw_adapters = get_adapter_addresses()?;

        let mut adapters = Vec::new();
        // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for IP_ADAPTER_ADDRESSES_LH.
        #[allow(clippy::cast_ptr_alignment)]
        let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

        // SAFETY: We iterate through a linked list returned by GetAdaptersAddresses.
        // The list is valid as long as the buffer (`raw_adapters`) is alive.
        while !current.is_null() {
            let adapter = unsafe { &*current };

            if let Some(link) = parse_adapter(adapter) {
                adapters.push(link);
            }

            current = adapter.Next;
        }

        Ok(AdapterTable { adapters })
    }
}

/// Name and physical address of one adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AdapterLink {
    name: String,
    physical_address: Vec<u8>,
}

/// Snapshot of all adapters, copied out of the API buffer.
#[derive(Debug)]
pub struct AdapterTable {
    adapters: Vec<AdapterLink>,
}

impl InterfaceTable for AdapterTable {
    fn entries(&self) -> impl Iterator<Item = InterfaceEntry<'_>> {
        self.adapters.iter().map(|link| InterfaceEntry {
            name: link.name.as_bytes(),
            address: Some(EntryAddress::Link(&link.physical_address)),
        })
    }
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
fn get_adapter_addresses() -> io::Result<Vec<u8>> {
    // Only the adapter records themselves are needed, no address lists
    let flags = GAA_FLAG_SKIP_UNICAST
        | GAA_FLAG_SKIP_ANYCAST
        | GAA_FLAG_SKIP_MULTICAST
        | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_UNSPEC.0);

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, potentially retrying with a larger buffer.
///
/// # Coverage Note
///
/// This function is excluded from coverage because:
/// - Buffer overflow case requires a system with network adapter data exceeding 16KB
/// - Error paths require actual Windows API failures which cannot be mocked
#[cfg(not(tarpaulin_include))]
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> io::Result<()> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as above, but with correctly sized buffer
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(win32_error(result));
        }
    } else if result != NO_ERROR.0 {
        return Err(win32_error(result));
    }

    Ok(())
}

/// Wraps a Win32 error code as an [`io::Error`].
#[allow(clippy::cast_possible_wrap)]
fn win32_error(code: u32) -> io::Error {
    io::Error::from_raw_os_error(code as i32)
}

/// Extracts the friendly name and physical address of one adapter.
///
/// Returns `None` if the adapter name cannot be read.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<AdapterLink> {
    // SAFETY: FriendlyName is a valid NUL-terminated wide string while the buffer lives.
    let name = unsafe { adapter.FriendlyName.to_string().ok()? };

    let len = (adapter.PhysicalAddressLength as usize).min(adapter.PhysicalAddress.len());
    let physical_address = adapter.PhysicalAddress[..len].to_vec();

    Some(AdapterLink {
        name,
        physical_address,
    })
}
