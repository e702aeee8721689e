//! `getifaddrs` interface list for macOS and FreeBSD.

use std::ffi::CStr;
use std::io;
use std::mem;
use std::ptr;

use crate::network::enumeration::{AddressEnumerator, EntryAddress, InterfaceEntry, InterfaceTable};

/// BSD implementation of [`AddressEnumerator`] using `getifaddrs(3)`.
///
/// # Example
///
/// ```no_run
/// use ifhwaddr::network::HardwareAddressBackend;
/// use ifhwaddr::network::enumeration::EnumerationBackend;
/// use ifhwaddr::network::platform::IfAddrsEnumerator;
///
/// let backend = EnumerationBackend::new(IfAddrsEnumerator::new());
/// let address = backend.lookup("en0").expect("lookup failed");
/// println!("en0 {address}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IfAddrsEnumerator {
    _private: (),
}

impl IfAddrsEnumerator {
    /// Creates the BSD OS layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressEnumerator for IfAddrsEnumerator {
    type Table = IfAddrs;

    fn enumerate(&self) -> io::Result<IfAddrs> {
        let mut head: *mut libc::ifaddrs = ptr::null_mut();
        // SAFETY: `head` is a valid out-pointer; on success the list is owned by `IfAddrs`.
        if unsafe { libc::getifaddrs(&raw mut head) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(IfAddrs { head })
    }
}

/// The list returned by `getifaddrs`, freed with `freeifaddrs` on drop.
#[derive(Debug)]
pub struct IfAddrs {
    head: *mut libc::ifaddrs,
}

impl Drop for IfAddrs {
    fn drop(&mut self) {
        if !self.head.is_null() {
            // SAFETY: `head` came from a successful getifaddrs and is freed exactly once.
            unsafe { libc::freeifaddrs(self.head) };
        }
    }
}

impl InterfaceTable for IfAddrs {
    fn entries(&self) -> impl Iterator<Item = InterfaceEntry<'_>> {
        let mut cursor = self.head.cast_const();
        std::iter::from_fn(move || {
            // SAFETY: every node of the list stays valid while `self` is alive.
            let ifa = unsafe { cursor.as_ref()? };
            cursor = ifa.ifa_next.cast_const();
            Some(entry_from(ifa))
        })
    }
}

/// Converts one `ifaddrs` node into an [`InterfaceEntry`] borrowing from it.
fn entry_from(ifa: &libc::ifaddrs) -> InterfaceEntry<'_> {
    // SAFETY: getifaddrs always sets a NUL-terminated interface name.
    let name = unsafe { CStr::from_ptr(ifa.ifa_name) }.to_bytes();

    let address = if ifa.ifa_addr.is_null() {
        None
    } else {
        // SAFETY: non-null ifa_addr points to a sockaddr of at least the generic size.
        let family = i32::from(unsafe { (*ifa.ifa_addr).sa_family });
        if family == libc::AF_LINK {
            let sdl = ifa.ifa_addr.cast::<libc::sockaddr_dl>().cast_const();
            // SAFETY: AF_LINK records are sockaddr_dl structures owned by the list.
            Some(EntryAddress::Link(unsafe { link_layer_bytes(sdl) }))
        } else {
            Some(EntryAddress::Other(family))
        }
    };

    InterfaceEntry { name, address }
}

/// Returns the `LLADDR` payload of a `sockaddr_dl`: `sdl_alen` bytes after the
/// `sdl_nlen`-byte name inside `sdl_data`.
///
/// The slice is clamped to `sdl_len`, since the structure is variable-length.
///
/// # Safety
///
/// `sdl` must point to a valid `sockaddr_dl` that outlives `'a`.
unsafe fn link_layer_bytes<'a>(sdl: *const libc::sockaddr_dl) -> &'a [u8] {
    let data_offset = mem::offset_of!(libc::sockaddr_dl, sdl_data);
    // SAFETY: guaranteed by the caller.
    let (total, name_len, addr_len) = unsafe {
        (
            usize::from((*sdl).sdl_len),
            usize::from((*sdl).sdl_nlen),
            usize::from((*sdl).sdl_alen),
        )
    };

    let available = total.saturating_sub(data_offset).saturating_sub(name_len);
    let len = addr_len.min(available);

    // SAFETY: `data_offset + name_len + len <= sdl_len`, all inside the record.
    unsafe { std::slice::from_raw_parts(sdl.cast::<u8>().add(data_offset + name_len), len) }
}
