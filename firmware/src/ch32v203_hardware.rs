//! CH32V203 Hardware Implementation
//!
//! 64KB Flash / 20KB RAM. Register-level LED output and SysTick setup.

use core::convert::Infallible;
use core::ptr::{read_volatile, write_volatile};

use embedded_hal::digital::{ErrorType, OutputPin};
use morse_core::EmbeddedHalIndicator;

use crate::time_driver;

/// Beacon indicator on the board LED
pub type BeaconLed = EmbeddedHalIndicator<LedPin>;

mod regs {
    pub const RCC_APB2PCENR: *mut u32 = 0x4002_1018 as *mut u32;
    pub const RCC_APB2PCENR_IOPAEN: u32 = 1 << 2;

    pub const GPIOA_CFGLR: *mut u32 = 0x4001_0800 as *mut u32;
    pub const GPIOA_BSHR: *mut u32 = 0x4001_0810 as *mut u32;

    pub const STK_CTLR: *mut u32 = 0xE000_F000 as *mut u32;
    pub const STK_SR: *mut u32 = 0xE000_F004 as *mut u32;
    pub const STK_CMPLR: *mut u32 = 0xE000_F010 as *mut u32;
    pub const STK_CMPHR: *mut u32 = 0xE000_F014 as *mut u32;

    // STE | STIE | STCLK (HCLK) | STRE (reload on compare)
    pub const STK_CTLR_RUN: u32 = 0b1111;

    /// PFIC interrupt enable set registers, 32 IRQs each
    pub const PFIC_IENR_BASE: usize = 0xE000_E100;
}

/// PFIC interrupt number of the SysTick counter
pub const SYSTICK_IRQ: u8 = 12;

/// Address and bit of the PFIC enable-set register for `irq`
pub const fn pfic_enable_bit(irq: u8) -> (usize, u32) {
    let word = (irq / 32) as usize;
    (regs::PFIC_IENR_BASE + word * 4, 1 << (irq % 32))
}

// SysTick must land in IENR1 bit 12
const _: () = {
    let (addr, bit) = pfic_enable_bit(SYSTICK_IRQ);
    assert!(addr == 0xE000_E100);
    assert!(bit == 1 << 12);
};

// Highest IRQ on the CH32V203 lands in the fourth enable register
const _: () = {
    let (addr, bit) = pfic_enable_bit(103);
    assert!(addr == 0xE000_E10C);
    assert!(bit == 1 << 7);
};

/// Push-pull output on a GPIOA pin (PA0..=PA7)
pub struct LedPin {
    mask: u32,
}

impl LedPin {
    /// Configure `pin` as a 50 MHz push-pull output, initially low
    ///
    /// # Safety
    ///
    /// The caller must own `pin` exclusively; nothing else may configure
    /// or write it while the returned `LedPin` exists.
    pub unsafe fn new(pin: u8) -> Self {
        debug_assert!(pin < 8, "CFGLR only covers PA0..=PA7");
        let shift = u32::from(pin) * 4;

        // SAFETY: fixed, always-mapped CH32V203 RCC/GPIOA registers; the
        // read-modify-writes only touch this pin's bits.
        unsafe {
            let enr = read_volatile(regs::RCC_APB2PCENR);
            write_volatile(regs::RCC_APB2PCENR, enr | regs::RCC_APB2PCENR_IOPAEN);

            let cfg = read_volatile(regs::GPIOA_CFGLR) & !(0xF << shift);
            // MODE = 0b11 (50 MHz output), CNF = 0b00 (push-pull)
            write_volatile(regs::GPIOA_CFGLR, cfg | (0b0011 << shift));
        }

        let mut led = Self { mask: 1 << pin };
        led.write(false);
        led
    }

    fn write(&mut self, high: bool) {
        // BSHR low half sets, high half resets
        let bits = if high { self.mask } else { self.mask << 16 };
        // SAFETY: BSHR writes are atomic and only affect the bits written.
        unsafe { write_volatile(regs::GPIOA_BSHR, bits) };
    }
}

impl ErrorType for LedPin {
    type Error = Infallible;
}

impl OutputPin for LedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

/// Start SysTick at `time_driver::TICK_HZ` and unmask its interrupt
///
/// Global interrupts are enabled on return; the trap handler must route
/// `SYSTICK_IRQ` to [`on_systick`].
pub fn init_systick(hclk_hz: u32) {
    let compare = hclk_hz / time_driver::TICK_HZ;
    // SAFETY: SysTick is owned by the time driver and configured once at boot.
    unsafe {
        write_volatile(regs::STK_CTLR, 0);
        write_volatile(regs::STK_SR, 0);
        write_volatile(regs::STK_CMPLR, compare.saturating_sub(1));
        write_volatile(regs::STK_CMPHR, 0);
        write_volatile(regs::STK_CTLR, regs::STK_CTLR_RUN);

        // IENR is write-one-to-set; zero bits leave other IRQs alone.
        let (ienr, bit) = pfic_enable_bit(SYSTICK_IRQ);
        write_volatile(ienr as *mut u32, bit);

        riscv::register::mstatus::set_mie();
    }

    #[cfg(feature = "defmt")]
    defmt::info!("⏱️ SysTick running at {} Hz", time_driver::TICK_HZ);
}

/// SysTick interrupt body: acknowledge and advance embassy time
pub fn on_systick() {
    // SAFETY: clearing CNTIF from its own interrupt handler.
    unsafe { write_volatile(regs::STK_SR, 0) };
    time_driver::tick();
}

/// Bring up the board LED as the beacon indicator
pub fn init_led(active_low: bool) -> BeaconLed {
    // SAFETY: called once from `main`; PA2 is reserved for the LED.
    let pin = unsafe { LedPin::new(pins::LED_PIN) };

    #[cfg(feature = "defmt")]
    defmt::info!("🔌 LED on PA{} ({})", pins::LED_PIN, if active_low { "active-low" } else { "active-high" });

    EmbeddedHalIndicator::new(pin, active_low)
}

/// CH32V203 pin configuration constants
pub mod pins {
    /// Beacon LED output pin
    pub const LED_PIN: u8 = 2; // PA2
}

/// CH32V203 clock configuration
pub mod clock {
    /// Core clock after reset (HSI)
    pub const HCLK_HZ: u32 = 8_000_000;
}
