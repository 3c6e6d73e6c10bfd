//! Flashes encoded Morse on an indicator
//!
//! Blocking executors use `embedded_hal::delay::DelayNs`; with the `async`
//! feature the same step plan runs on `embedded_hal_async::delay::DelayNs`,
//! one await per hold.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use crate::encoder::Encoder;
use crate::hal::Indicator;
use crate::schedule::{total_hold_ms, FlashSteps, Step};

/// Flash an encoded symbol string, blocking until done
///
/// `'.'` and `'-'` light the indicator for 100 and 200 ms, `' '` darkens it
/// for 200 ms, and every symbol is followed by a 100 ms dark rest. The
/// indicator is driven low before the first symbol and after the last.
///
/// # Errors
///
/// Returns the indicator's error if a drive fails. The indicator is driven
/// low once more before returning.
pub fn flash<O, D>(symbols: &str, output: &mut O, delay: &mut D) -> Result<(), O::Error>
where
    O: Indicator + ?Sized,
    D: DelayNs + ?Sized,
{
    #[cfg(feature = "defmt")]
    defmt::debug!("💡 Flashing {=str}", symbols);
    run_steps(FlashSteps::new(symbols.chars()), output, delay)
}

/// Encode `message` and flash it, blocking until done
///
/// The encoder is streamed into the flash plan; pin and delay calls are the
/// same as `flash(&encode(message), ..)`.
pub fn encode_and_flash<O, D>(message: &str, output: &mut O, delay: &mut D) -> Result<(), O::Error>
where
    O: Indicator + ?Sized,
    D: DelayNs + ?Sized,
{
    #[cfg(feature = "defmt")]
    defmt::info!("📡 Sending {=str}", message);
    run_steps(FlashSteps::new(Encoder::new(message)), output, delay)
}

/// Time `encode_and_flash` blocks for, in milliseconds
pub fn encoded_duration_ms(message: &str) -> u32 {
    total_hold_ms(FlashSteps::new(Encoder::new(message)))
}

fn run_steps<I, O, D>(steps: FlashSteps<I>, output: &mut O, delay: &mut D) -> Result<(), O::Error>
where
    I: Iterator<Item = char>,
    O: Indicator + ?Sized,
    D: DelayNs + ?Sized,
{
    for step in steps {
        match step {
            Step::Drive(level) => drive(output, level)?,
            Step::Hold(ms) => delay.delay_ms(ms),
        }
    }
    Ok(())
}

fn drive<O>(output: &mut O, level: PinState) -> Result<(), O::Error>
where
    O: Indicator + ?Sized,
{
    let on = level == PinState::High;
    output.set_state(on).map_err(|err| {
        #[cfg(feature = "defmt")]
        defmt::warn!("⚠️ Indicator drive failed, forcing off");
        // Leave the indicator dark on the error path too.
        output.set_state(false).ok();
        err
    })
}

#[cfg(feature = "async")]
mod asynch {
    use embedded_hal_async::delay::DelayNs;

    use super::drive;
    use crate::encoder::Encoder;
    use crate::hal::Indicator;
    use crate::schedule::{FlashSteps, Step};

    /// Async `flash`: identical steps, awaiting each hold in order
    ///
    /// # Errors
    ///
    /// Same as [`flash`](super::flash).
    pub async fn flash_async<O, D>(
        symbols: &str,
        output: &mut O,
        delay: &mut D,
    ) -> Result<(), O::Error>
    where
        O: Indicator + ?Sized,
        D: DelayNs,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("💡 Flashing {=str}", symbols);
        run_steps_async(FlashSteps::new(symbols.chars()), output, delay).await
    }

    /// Async `encode_and_flash`
    ///
    /// # Errors
    ///
    /// Same as [`flash`](super::flash).
    pub async fn encode_and_flash_async<O, D>(
        message: &str,
        output: &mut O,
        delay: &mut D,
    ) -> Result<(), O::Error>
    where
        O: Indicator + ?Sized,
        D: DelayNs,
    {
        #[cfg(feature = "defmt")]
        defmt::info!("📡 Sending {=str}", message);
        run_steps_async(FlashSteps::new(Encoder::new(message)), output, delay).await
    }

    async fn run_steps_async<I, O, D>(
        steps: FlashSteps<I>,
        output: &mut O,
        delay: &mut D,
    ) -> Result<(), O::Error>
    where
        I: Iterator<Item = char>,
        O: Indicator + ?Sized,
        D: DelayNs,
    {
        for step in steps {
            match step {
                Step::Drive(level) => drive(output, level)?,
                Step::Hold(ms) => delay.delay_ms(ms).await,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "async")]
pub use asynch::{encode_and_flash_async, flash_async};
