//! Linux system calls for the ioctl backend (`SIOCGIFHWADDR`).

use std::io;
use std::mem;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

use crate::network::ioctl::{ADDRESS_DATA_LEN, HardwareAddressRequest, IFNAMSIZ, SocketControl};

#[allow(clippy::unnecessary_cast)]
const _: () = assert!(libc::IFNAMSIZ as usize == IFNAMSIZ);

/// Linux implementation of [`SocketControl`] using an `AF_INET` datagram socket.
///
/// # Example
///
/// ```no_run
/// use ifhwaddr::network::HardwareAddressBackend;
/// use ifhwaddr::network::ioctl::IoctlBackend;
/// use ifhwaddr::network::platform::LinuxSockets;
///
/// let backend = IoctlBackend::new(LinuxSockets::new());
/// let address = backend.lookup("eth0").expect("lookup failed");
/// println!("eth0 {address}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinuxSockets {
    _private: (),
}

impl LinuxSockets {
    /// Creates the Linux OS layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl SocketControl for LinuxSockets {
    type Socket = OwnedFd;

    const OPERATION: &'static str = "SIOCGIFHWADDR";

    fn open_socket(&self) -> io::Result<OwnedFd> {
        // SAFETY: socket(2) has no memory-safety preconditions.
        let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM | libc::SOCK_CLOEXEC, 0) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: `fd` was just returned by socket(2) and is owned by nobody else.
        Ok(unsafe { OwnedFd::from_raw_fd(fd) })
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::unnecessary_cast)]
    fn request_hardware_address(
        &self,
        socket: &OwnedFd,
        request: &mut HardwareAddressRequest,
    ) -> io::Result<()> {
        // SAFETY: ifreq is plain old data; all-zero is a valid value.
        let mut ifr: libc::ifreq = unsafe { mem::zeroed() };
        for (dst, &src) in ifr.ifr_name.iter_mut().zip(request.name_field()) {
            *dst = src as libc::c_char;
        }

        // SAFETY: `ifr` is a valid, NUL-terminated ifreq that outlives the call,
        // and SIOCGIFHWADDR only writes within it.
        // The request parameter type differs between glibc and musl.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let rc = unsafe { libc::ioctl(socket.as_raw_fd(), libc::SIOCGIFHWADDR as _, &raw mut ifr) };
        if rc == -1 {
            return Err(io::Error::last_os_error());
        }

        // SAFETY: on success the kernel has written the hwaddr member of the union.
        let hwaddr = unsafe { ifr.ifr_ifru.ifru_hwaddr };
        let mut data = [0u8; ADDRESS_DATA_LEN];
        for (dst, &src) in data.iter_mut().zip(hwaddr.sa_data.iter()) {
            *dst = src as u8;
        }
        request.fill(hwaddr.sa_family, &data);
        Ok(())
    }
}
