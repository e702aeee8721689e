//! Rendering of lookup results for the command line.

use std::fmt;

use serde::Serialize;

use crate::network::HardwareAddress;

/// How each resolved address is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `eth0 aa:bb:cc:dd:ee:ff`
    Colon,
    /// `eth0 AA-BB-CC-DD-EE-FF`
    Hyphen,
    /// `aabbccddeeff`, address only
    Bare,
    /// `{"interface":"eth0","address":"aa:bb:cc:dd:ee:ff"}`
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colon => write!(f, "colon"),
            Self::Hyphen => write!(f, "hyphen"),
            Self::Bare => write!(f, "bare"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    interface: &'a str,
    address: HardwareAddress,
}

/// Renders one result as a single line (without trailing newline).
#[must_use]
pub fn render(interface: &str, address: HardwareAddress, format: OutputFormat) -> String {
    match format {
        OutputFormat::Colon => format!("{interface} {address}"),
        OutputFormat::Hyphen => format!("{interface} {}", address.to_string_with(Some('-'), true)),
        OutputFormat::Bare => address.to_string_with(None, false),
        OutputFormat::Json => {
            let line = JsonLine { interface, address };
            // A struct of a string and a Display-serialized value always serializes
            serde_json::to_string(&line).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: HardwareAddress = HardwareAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0x0F]);

    #[test]
    fn colon_format() {
        assert_eq!(
            render("eth0", ADDRESS, OutputFormat::Colon),
            "eth0 aa:bb:cc:dd:ee:0f"
        );
    }

    #[test]
    fn hyphen_format_is_uppercase() {
        assert_eq!(
            render("Ethernet", ADDRESS, OutputFormat::Hyphen),
            "Ethernet AA-BB-CC-DD-EE-0F"
        );
    }

    #[test]
    fn bare_format_omits_interface() {
        assert_eq!(render("eth0", ADDRESS, OutputFormat::Bare), "aabbccddee0f");
    }

    #[test]
    fn json_format_is_one_object() {
        let line = render("eth0", ADDRESS, OutputFormat::Json);

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["interface"], "eth0");
        assert_eq!(value["address"], "aa:bb:cc:dd:ee:0f");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn json_format_escapes_interface_name() {
        let line = render("we\"ird", ADDRESS, OutputFormat::Json);

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["interface"], "we\"ird");
    }

    #[test]
    fn format_display_matches_config_names() {
        assert_eq!(OutputFormat::Colon.to_string(), "colon");
        assert_eq!(OutputFormat::Hyphen.to_string(), "hyphen");
        assert_eq!(OutputFormat::Bare.to_string(), "bare");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
