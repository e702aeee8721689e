//! The hardware address value type.

use std::fmt::{self, Write as _};

use macaddr::MacAddr6;
use serde::{Serialize, Serializer};

/// Width in bytes of a link-layer (Ethernet) hardware address.
pub const HARDWARE_ADDRESS_LEN: usize = 6;

/// A 6-byte link-layer address as reported by the operating system.
///
/// Bytes are kept in the order the OS reported them; no reinterpretation
/// or endian conversion is ever applied.
///
/// Displays as lowercase colon-separated hex (`aa:bb:cc:dd:ee:ff`) and
/// serializes as that same string. [`MacAddr6`] is available through
/// [`HardwareAddress::mac`] for callers that want its own formatting.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HardwareAddress(MacAddr6);

impl HardwareAddress {
    /// Creates an address from its raw octets.
    #[must_use]
    pub const fn new(octets: [u8; HARDWARE_ADDRESS_LEN]) -> Self {
        let [a, b, c, d, e, f] = octets;
        Self(MacAddr6::new(a, b, c, d, e, f))
    }

    /// Creates an address from a slice that must be exactly 6 bytes long.
    ///
    /// Returns `None` for any other length.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; HARDWARE_ADDRESS_LEN]>::try_from(bytes).ok().map(Self::new)
    }

    /// Returns the raw octets.
    #[must_use]
    pub fn octets(self) -> [u8; HARDWARE_ADDRESS_LEN] {
        self.0.into_array()
    }

    #[must_use]
    pub const fn mac(self) -> MacAddr6 {
        self.0
    }

    /// Returns true if every octet is zero (as reported for loopback devices).
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_nil()
    }

    /// Formats the address with the given separator and letter case.
    ///
    /// `None` as separator yields the twelve hex digits back to back.
    #[must_use]
    pub fn to_string_with(self, separator: Option<char>, uppercase: bool) -> String {
        let mut out = String::with_capacity(HARDWARE_ADDRESS_LEN * 3);
        for (i, byte) in self.0.as_bytes().iter().enumerate() {
            if i > 0 {
                if let Some(sep) = separator {
                    out.push(sep);
                }
            }
            // Writing into a String cannot fail.
            let _ = if uppercase {
                write!(out, "{byte:02X}")
            } else {
                write!(out, "{byte:02x}")
            };
        }
        out
    }
}

impl Default for HardwareAddress {
    fn default() -> Self {
        Self(MacAddr6::nil())
    }
}

impl From<[u8; HARDWARE_ADDRESS_LEN]> for HardwareAddress {
    fn from(octets: [u8; HARDWARE_ADDRESS_LEN]) -> Self {
        Self::new(octets)
    }
}

impl From<HardwareAddress> for [u8; HARDWARE_ADDRESS_LEN] {
    fn from(address: HardwareAddress) -> Self {
        address.octets()
    }
}

impl From<MacAddr6> for HardwareAddress {
    fn from(mac: MacAddr6) -> Self {
        Self(mac)
    }
}

impl From<HardwareAddress> for MacAddr6 {
    fn from(address: HardwareAddress) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for HardwareAddress {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardwareAddress({self})")
    }
}

// MacAddr6 prints uppercase; the canonical form here is lowercase.
impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(Some(':'), false))
    }
}

impl Serialize for HardwareAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: HardwareAddress = HardwareAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);

    #[test]
    fn display_is_lowercase_colon_separated() {
        assert_eq!(SAMPLE.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn display_pads_single_digit_octets() {
        let addr = HardwareAddress::new([0x00, 0x01, 0x02, 0x0a, 0x10, 0xff]);
        assert_eq!(addr.to_string(), "00:01:02:0a:10:ff");
    }

    #[test]
    fn to_string_with_hyphen_uppercase() {
        assert_eq!(SAMPLE.to_string_with(Some('-'), true), "AA-BB-CC-DD-EE-FF");
    }

    #[test]
    fn to_string_with_no_separator() {
        assert_eq!(SAMPLE.to_string_with(None, false), "aabbccddeeff");
    }

    #[test]
    fn from_slice_accepts_exactly_six_bytes() {
        let addr = HardwareAddress::from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(addr, Some(HardwareAddress::new([1, 2, 3, 4, 5, 6])));
    }

    #[test]
    fn from_slice_rejects_other_lengths() {
        assert_eq!(HardwareAddress::from_slice(&[]), None);
        assert_eq!(HardwareAddress::from_slice(&[1, 2, 3, 4, 5]), None);
        assert_eq!(HardwareAddress::from_slice(&[0; 8]), None);
    }

    #[test]
    fn octets_preserve_reported_order() {
        assert_eq!(SAMPLE.octets(), [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(<[u8; 6]>::from(SAMPLE), SAMPLE.octets());
        assert_eq!(SAMPLE.as_ref(), &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn converts_to_and_from_mac_addr6() {
        let mac = MacAddr6::new(0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF);

        assert!(SAMPLE.mac() == mac);
        assert_eq!(HardwareAddress::from(mac), SAMPLE);
        assert_eq!(MacAddr6::from(SAMPLE).into_array(), SAMPLE.octets());
    }

    #[test]
    fn display_stays_lowercase_unlike_mac_addr6() {
        assert_eq!(SAMPLE.mac().to_string(), "AA:BB:CC:DD:EE:FF");
        assert_eq!(SAMPLE.to_string(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn debug_shows_the_address() {
        assert_eq!(format!("{SAMPLE:?}"), "HardwareAddress(aa:bb:cc:dd:ee:ff)");
    }

    #[test]
    fn is_zero_only_for_all_zero_octets() {
        assert!(HardwareAddress::default().is_zero());
        assert!(!SAMPLE.is_zero());
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&SAMPLE).unwrap();
        assert_eq!(json, "\"aa:bb:cc:dd:ee:ff\"");
    }
}
