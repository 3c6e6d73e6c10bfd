//! Hardware Abstraction Layer for the beacon indicator

use core::fmt;
use embedded_hal::digital::OutputPin;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Trait for a single on/off indicator (LED, lamp, key line)
pub trait Indicator {
    type Error;

    /// Set indicator state (true = lit, false = dark)
    fn set_state(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Last commanded indicator state
    fn is_on(&self) -> bool;

    fn turn_on(&mut self) -> Result<(), Self::Error> {
        self.set_state(true)
    }

    fn turn_off(&mut self) -> Result<(), Self::Error> {
        self.set_state(false)
    }

    /// Toggle indicator state
    fn toggle(&mut self) -> Result<(), Self::Error> {
        let current = self.is_on();
        self.set_state(!current)
    }
}

impl<T: Indicator + ?Sized> Indicator for &mut T {
    type Error = T::Error;

    fn set_state(&mut self, on: bool) -> Result<(), Self::Error> {
        T::set_state(self, on)
    }

    fn is_on(&self) -> bool {
        T::is_on(self)
    }
}

/// Indicator on top of any embedded-hal output pin
///
/// `inverted` is for active-low wiring, where the LED is lit with the pin
/// driven low.
pub struct EmbeddedHalIndicator<P> {
    pin: P,
    inverted: bool,
    on: bool,
}

impl<P> EmbeddedHalIndicator<P>
where
    P: OutputPin,
{
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            pin,
            inverted,
            on: false,
        }
    }

    /// Active-high LED (lit when the pin is high)
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Active-low LED (lit when the pin is low)
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> Indicator for EmbeddedHalIndicator<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_state(&mut self, on: bool) -> Result<(), Self::Error> {
        let level = if self.inverted { !on } else { on };
        let result = if level {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| HalError::GpioError)?;
        self.on = on;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
