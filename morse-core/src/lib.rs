#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! # Morse Core
//!
//! Morse code beacon logic for embedded systems.
//! Encodes ASCII text into dot/dash symbols and flashes them on a single
//! on/off indicator with fixed millisecond timing.

pub mod types;
pub mod code_table;
pub mod encoder;
pub mod schedule;
pub mod signaler;
pub mod config;
pub mod hal;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;


pub use types::*;
pub use encoder::*;
pub use schedule::*;
pub use signaler::*;
pub use config::*;
pub use hal::{EmbeddedHalIndicator, HalError, Indicator};

/// Morse library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: an SOS beacon repeating every two seconds
pub fn default_config() -> BeaconConfig {
    BeaconConfig::default()
}
