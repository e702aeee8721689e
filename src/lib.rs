//! ifhwaddr: interface hardware address lookup
//!
//! A library for resolving the 6-byte link-layer (MAC) address of a
//! named network interface, with one backend per OS family selected
//! at build time.
//!
//! ```no_run
//! let address = ifhwaddr::resolve("eth0")?;
//! println!("eth0 is {address}");
//! # Ok::<(), ifhwaddr::network::ResolveError>(())
//! ```

pub mod config;
pub mod network;
pub mod output;

pub use network::{HardwareAddress, ResolveError, resolve};
