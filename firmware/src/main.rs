#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt_rtt as _;

// RISC-V runtime
use riscv_rt as _;

// Panic handler
#[cfg(not(feature = "defmt"))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use morse_beacon_firmware::*;

#[cfg(feature = "mock-led")]
static MOCK_LED: StaticCell<MockLed> = StaticCell::new();

/// Main firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    #[cfg(feature = "defmt")]
    defmt::info!("🔧 Morse Beacon Firmware v{=str} Starting...", VERSION);

    init_systick(clock::HCLK_HZ);

    let config = match BeaconConfig::new("CQ CQ DE RUST", 3_000, false) {
        Ok(config) => config,
        Err(_err) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("⚙️ Invalid beacon config ({}), using default", _err);
            default_config()
        }
    };

    #[cfg(not(feature = "mock-led"))]
    {
        let led = init_led(config.active_low);
        spawner.must_spawn(beacon_task(led, config));
    }

    #[cfg(feature = "mock-led")]
    {
        let led = MOCK_LED.init(MockLed::new());
        spawner.must_spawn(beacon_task_with_mock(led, config));
    }

    #[cfg(feature = "defmt")]
    defmt::info!("✨ Beacon firmware ready!");

    // Main supervision loop
    loop {
        Timer::after(Duration::from_secs(1)).await;
        #[cfg(feature = "defmt")]
        defmt::trace!("💓 Heartbeat");
    }
}

/// Interrupt dispatch
///
/// riscv-rt only names the standard RISC-V interrupt causes; PFIC
/// interrupts such as SysTick arrive here with their IRQ number in `mcause`.
#[no_mangle]
#[allow(non_snake_case)]
extern "C" fn DefaultHandler() {
    let cause = riscv::register::mcause::read();
    if cause.is_interrupt() && cause.code() == usize::from(SYSTICK_IRQ) {
        on_systick();
    }
}
