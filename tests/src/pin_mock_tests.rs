//! Exact pin transactions through `EmbeddedHalIndicator`

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
use morse_core::{encode_and_flash, flash, EmbeddedHalIndicator};

fn transactions(states: &[State]) -> Vec<PinTransaction> {
    states.iter().map(|state| PinTransaction::set(*state)).collect()
}

#[test]
fn test_empty_flash_only_resets() {
    let expectations = transactions(&[State::Low, State::Low]);
    let mut pin = PinMock::new(&expectations);
    let mut led = EmbeddedHalIndicator::active_high(pin.clone());

    flash("", &mut led, &mut NoopDelay::new()).unwrap();
    pin.done();
}

#[test]
fn test_dot_pin_sequence() {
    let expectations = transactions(&[State::Low, State::High, State::Low, State::Low]);
    let mut pin = PinMock::new(&expectations);
    let mut led = EmbeddedHalIndicator::active_high(pin.clone());

    flash(".", &mut led, &mut NoopDelay::new()).unwrap();
    pin.done();
}

#[test]
fn test_gap_is_redundant_low() {
    // Reset, gap LOW, rest LOW, final LOW
    let expectations = transactions(&[State::Low, State::Low, State::Low, State::Low]);
    let mut pin = PinMock::new(&expectations);
    let mut led = EmbeddedHalIndicator::active_high(pin.clone());

    flash(" ", &mut led, &mut NoopDelay::new()).unwrap();
    pin.done();
}

#[test]
fn test_letter_a_pin_sequence() {
    let expectations = transactions(&[
        State::Low,  // reset
        State::High, // dot
        State::Low,  // rest
        State::High, // dash
        State::Low,  // rest
        State::Low,  // gap
        State::Low,  // rest
        State::Low,  // final
    ]);
    let mut pin = PinMock::new(&expectations);
    let mut led = EmbeddedHalIndicator::active_high(pin.clone());

    encode_and_flash("a", &mut led, &mut NoopDelay::new()).unwrap();
    pin.done();
}

#[test]
fn test_active_low_led_inverts_every_write() {
    let expectations = transactions(&[State::High, State::Low, State::High, State::High]);
    let mut pin = PinMock::new(&expectations);
    let mut led = EmbeddedHalIndicator::active_low(pin.clone());

    flash("-", &mut led, &mut NoopDelay::new()).unwrap();
    pin.done();
}
