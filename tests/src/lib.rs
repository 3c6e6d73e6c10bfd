//! Host-side helpers for Morse beacon tests and the simulator

use std::time::Duration;

use morse_core::code_table::CODE_TABLE;
use morse_core::schedule::REST_OFF_MS;
use morse_core::test_utils::virtual_time::{Event, Timeline};

#[cfg(test)]
mod signaler_tests;
#[cfg(test)]
mod pin_mock_tests;
#[cfg(test)]
mod property_tests;

/// Recover the letters of an encoded message
///
/// Only meaningful for letter-only input: empty and unknown tokens are
/// dropped.
pub fn decode_letters(encoded: &str) -> String {
    encoded
        .split(' ')
        .filter_map(|token| CODE_TABLE.iter().position(|pattern| *pattern == token))
        .filter_map(|index| char::from_u32('A' as u32 + index as u32))
        .collect()
}

/// Async delay on the tokio clock
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

impl embedded_hal_async::delay::DelayNs for TokioDelay {
    async fn delay_ns(&mut self, ns: u32) {
        tokio::time::sleep(Duration::from_nanos(u64::from(ns))).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        tokio::time::sleep(Duration::from_millis(u64::from(ms))).await;
    }
}

/// Render a timeline as one character per rest unit: `#` lit, `_` dark
pub fn render_timeline(timeline: &Timeline) -> String {
    let mut out = String::new();
    let mut lit = false;
    for event in timeline.events() {
        match event {
            Event::Drive { on, .. } => lit = on,
            Event::Hold { ns, .. } => {
                let units = ns / (u64::from(REST_OFF_MS) * 1_000_000);
                let c = if lit { '#' } else { '_' };
                out.extend(std::iter::repeat(c).take(units as usize));
            }
        }
    }
    out
}
