//! SysTick backed embassy time driver for CH32V203

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time_driver::{AlarmHandle, Driver};
use portable_atomic::{AtomicBool, AtomicU64, Ordering};

/// SysTick interrupt rate; must match the embassy-time `tick-hz-*` feature
pub const TICK_HZ: u32 = 1_000;

struct Alarm {
    timestamp: Cell<u64>,
    callback: Cell<Option<(fn(*mut ()), *mut ())>>,
}

// Only touched inside critical sections on a single hart.
unsafe impl Send for Alarm {}

/// Tick counter with a single alarm, enough for the generic timer queue
pub struct SysTickDriver {
    ticks: AtomicU64,
    alarm_taken: AtomicBool,
    alarm: Mutex<Alarm>,
}

impl SysTickDriver {
    const fn new() -> Self {
        Self {
            ticks: AtomicU64::new(0),
            alarm_taken: AtomicBool::new(false),
            alarm: Mutex::new(Alarm {
                timestamp: Cell::new(u64::MAX),
                callback: Cell::new(None),
            }),
        }
    }

    /// Advance time by one tick and fire the alarm when due
    fn on_tick(&self) {
        let now = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;

        let due = critical_section::with(|cs| {
            let alarm = self.alarm.borrow(cs);
            if alarm.timestamp.get() <= now {
                alarm.timestamp.set(u64::MAX);
                alarm.callback.get()
            } else {
                None
            }
        });

        if let Some((callback, ctx)) = due {
            callback(ctx);
        }
    }
}

impl Driver for SysTickDriver {
    fn now(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    unsafe fn allocate_alarm(&self) -> Option<AlarmHandle> {
        if self.alarm_taken.swap(true, Ordering::AcqRel) {
            None
        } else {
            // SAFETY: id 0 is the only alarm and is handed out once.
            Some(unsafe { AlarmHandle::new(0) })
        }
    }

    fn set_alarm_callback(&self, _alarm: AlarmHandle, callback: fn(*mut ()), ctx: *mut ()) {
        critical_section::with(|cs| {
            self.alarm.borrow(cs).callback.set(Some((callback, ctx)));
        });
    }

    fn set_alarm(&self, _alarm: AlarmHandle, timestamp: u64) -> bool {
        critical_section::with(|cs| {
            if timestamp <= self.now() {
                // Already due; the queue handles it without an alarm.
                return false;
            }
            self.alarm.borrow(cs).timestamp.set(timestamp);
            true
        })
    }
}

embassy_time_driver::time_driver_impl!(static DRIVER: SysTickDriver = SysTickDriver::new());

/// Called from the SysTick interrupt
pub(crate) fn tick() {
    DRIVER.on_tick();
}

// Critical section implementation for single-core RISC-V
critical_section::set_impl!(SingleHartCriticalSection);

struct SingleHartCriticalSection;

unsafe impl critical_section::Impl for SingleHartCriticalSection {
    unsafe fn acquire() -> u8 {
        let was_enabled = riscv::register::mstatus::read().mie();
        // SAFETY: restored by `release` with the saved state.
        unsafe { riscv::interrupt::disable() };
        u8::from(was_enabled)
    }

    unsafe fn release(was_enabled: u8) {
        if was_enabled != 0 {
            // SAFETY: interrupts were enabled when the section began.
            unsafe { riscv::interrupt::enable() };
        }
    }
}
