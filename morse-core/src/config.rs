//! Beacon configuration

use core::fmt;

use crate::code_table;
use crate::signaler::encoded_duration_ms;

/// Longest allowed pause between repeats, in milliseconds
pub const MAX_REPEAT_PAUSE_MS: u32 = 60_000;

/// Configuration validation errors
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Message is empty
    EmptyMessage,
    /// Message has no letters, so it would never light the indicator
    NoLetters,
    /// Repeat pause above `MAX_REPEAT_PAUSE_MS`
    PauseTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyMessage => write!(f, "Message must not be empty"),
            ConfigError::NoLetters => write!(f, "Message must contain at least one letter"),
            ConfigError::PauseTooLong => {
                write!(f, "Repeat pause must be <= {}ms", MAX_REPEAT_PAUSE_MS)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Beacon configuration parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BeaconConfig {
    /// Text sent on every cycle
    pub message: &'static str,
    /// Dark pause between repeats in milliseconds
    pub repeat_pause_ms: u32,
    /// LED lit when its pin is low
    pub active_low: bool,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            message: "SOS",
            repeat_pause_ms: 2_000,
            active_low: false,
        }
    }
}

impl BeaconConfig {
    /// Create a new configuration with validation
    pub fn new(
        message: &'static str,
        repeat_pause_ms: u32,
        active_low: bool,
    ) -> Result<Self, ConfigError> {
        if message.is_empty() {
            return Err(ConfigError::EmptyMessage);
        }
        let has_letter = message
            .chars()
            .any(|c| code_table::pattern(c.to_ascii_uppercase()).is_some());
        if !has_letter {
            return Err(ConfigError::NoLetters);
        }
        if repeat_pause_ms > MAX_REPEAT_PAUSE_MS {
            return Err(ConfigError::PauseTooLong);
        }

        Ok(Self {
            message,
            repeat_pause_ms,
            active_low,
        })
    }

    /// Time one message takes to flash
    pub fn message_duration_ms(&self) -> u32 {
        encoded_duration_ms(self.message)
    }

    /// Time of one full beacon cycle, message plus pause
    pub fn cycle_ms(&self) -> u32 {
        self.message_duration_ms().saturating_add(self.repeat_pause_ms)
    }
}
