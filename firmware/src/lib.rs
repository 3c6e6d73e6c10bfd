#![no_std]

//! Firmware library for the Morse LED beacon: board support, mock hardware
//! and embassy tasks

pub use embassy_executor::Spawner;
pub use static_cell::StaticCell;

pub use morse_core::*;

// Re-export hardware implementations
pub use crate::mock_hardware::*;
pub use crate::ch32v203_hardware::*;
pub use crate::tasks::*;

// Mock hardware module
pub mod mock_hardware {
    use morse_core::hal::{HalError, Indicator};

    /// Mock LED that only tracks and logs its state
    #[derive(Debug, Default)]
    pub struct MockLed {
        on: bool,
    }

    impl MockLed {
        pub fn new() -> Self {
            #[cfg(feature = "defmt")]
            defmt::info!("🧪 Using mock LED (for testing)");
            Self::default()
        }
    }

    impl Indicator for MockLed {
        type Error = HalError;

        fn set_state(&mut self, on: bool) -> Result<(), Self::Error> {
            #[cfg(feature = "defmt")]
            if on != self.on {
                defmt::trace!("💡 LED: {}", if on { "ON" } else { "OFF" });
            }
            self.on = on;
            Ok(())
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }
}

// Embassy tasks module
pub mod tasks {
    use embassy_time::{Delay, Timer};
    use morse_core::{encode_and_flash_async, BeaconConfig, Indicator};

    use crate::ch32v203_hardware::BeaconLed;
    use crate::mock_hardware::MockLed;

    /// Flash `config.message` forever, pausing between repeats
    pub async fn run_beacon<O>(led: &mut O, config: BeaconConfig) -> !
    where
        O: Indicator,
    {
        let mut delay = Delay;
        #[cfg(feature = "defmt")]
        defmt::info!(
            "📡 Beacon '{=str}': {} ms message, {} ms cycle",
            config.message,
            config.message_duration_ms(),
            config.cycle_ms()
        );

        loop {
            if encode_and_flash_async(config.message, led, &mut delay).await.is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("⚠️ Flash aborted, LED forced off");
            }
            Timer::after_millis(u64::from(config.repeat_pause_ms)).await;
        }
    }

    /// Beacon task on the board LED
    #[embassy_executor::task]
    pub async fn beacon_task(mut led: BeaconLed, config: BeaconConfig) {
        #[cfg(feature = "defmt")]
        defmt::info!("📤 Beacon task started");
        run_beacon(&mut led, config).await
    }

    /// Beacon task on the mock LED
    #[embassy_executor::task]
    pub async fn beacon_task_with_mock(led: &'static mut MockLed, config: BeaconConfig) {
        #[cfg(feature = "defmt")]
        defmt::info!("📤 Beacon task started (mock LED)");
        run_beacon(led, config).await
    }
}

// CH32V203 hardware module
pub mod ch32v203_hardware;

// Time driver for embassy
mod time_driver;
