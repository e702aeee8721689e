use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use ifhwaddr::network::{HardwareAddress, HardwareAddressBackend, ResolveError};
use ifhwaddr::output::OutputFormat;

use super::*;

/// Backend answering from a fixed table and recording the lookup order.
struct MockBackend {
    table: HashMap<&'static str, HardwareAddress>,
    calls: Mutex<Vec<String>>,
}

impl MockBackend {
    fn new(entries: &[(&'static str, [u8; 6])]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(name, octets)| (*name, HardwareAddress::new(*octets)))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HardwareAddressBackend for MockBackend {
    fn lookup(&self, interface: &str) -> Result<HardwareAddress, ResolveError> {
        self.calls.lock().unwrap().push(interface.to_string());
        self.table
            .get(interface)
            .copied()
            .ok_or_else(|| ResolveError::NotFound {
                interface: interface.to_string(),
            })
    }
}

/// Writer whose every write fails.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn config(interfaces: &[&str], format: OutputFormat) -> ValidatedConfig {
    ValidatedConfig {
        interfaces: interfaces.iter().map(ToString::to_string).collect(),
        format,
        verbose: false,
    }
}

fn host() -> MockBackend {
    MockBackend::new(&[
        ("eth0", [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]),
        ("wlan0", [0x02, 0x00, 0x00, 0x00, 0x00, 0x01]),
    ])
}

#[test]
fn writes_one_line_per_interface_in_order() {
    let backend = host();
    let mut out = Vec::new();

    execute(&config(&["wlan0", "eth0"], OutputFormat::Colon), &backend, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "wlan0 02:00:00:00:00:01\neth0 aa:bb:cc:dd:ee:ff\n"
    );
    assert_eq!(backend.calls(), vec!["wlan0", "eth0"]);
}

#[test]
fn uses_configured_format() {
    let backend = host();
    let mut out = Vec::new();

    execute(&config(&["eth0"], OutputFormat::Bare), &backend, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "aabbccddeeff\n");
}

#[test]
fn failure_does_not_stop_remaining_lookups() {
    let backend = host();
    let mut out = Vec::new();

    let error = execute(
        &config(&["missing0", "eth0"], OutputFormat::Colon),
        &backend,
        &mut out,
    )
    .unwrap_err();

    assert_eq!(backend.calls(), vec!["missing0", "eth0"]);
    assert_eq!(String::from_utf8(out).unwrap(), "eth0 aa:bb:cc:dd:ee:ff\n");
    match error {
        RunError::Lookup { failed, total } => {
            assert_eq!(failed, vec!["missing0"]);
            assert_eq!(total, 2);
        }
        RunError::Output(e) => panic!("unexpected output error: {e}"),
    }
}

#[test]
fn lookup_error_message_lists_failed_interfaces() {
    let error = RunError::Lookup {
        failed: vec!["eth9".to_string(), "eth10".to_string()],
        total: 3,
    };

    let message = error.to_string();

    assert!(message.contains("2 of 3"));
    assert!(message.contains("eth9, eth10"));
}

#[test]
fn write_failure_is_output_error() {
    let backend = host();

    let error = execute(&config(&["eth0"], OutputFormat::Json), &backend, &mut BrokenPipe)
        .unwrap_err();

    assert!(matches!(error, RunError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}
