//! Flash timing against the virtual clock

use morse_core::test_utils::output_capture::MockIndicator;
use morse_core::test_utils::virtual_time::{MockDelay, Timeline};
use morse_core::{
    encode_and_flash, encode_to_string, encoded_duration_ms, flash, flash_duration_ms, Indicator,
};
use rstest::rstest;

use crate::render_timeline;

fn flash_on_timeline(symbols: &str) -> Timeline {
    let timeline = Timeline::new();
    let mut led = MockIndicator::new(&timeline);
    let mut delay = MockDelay::new(&timeline);
    flash(symbols, &mut led, &mut delay).unwrap();
    assert!(!led.is_on());
    timeline
}

#[rstest]
#[case("", 0, 0)]
#[case(".", 100, 100)]
#[case("-", 200, 100)]
#[case(" ", 0, 300)]
#[case("x", 0, 100)]
#[case("...", 300, 300)]
#[case(".- ", 300, 500)]
fn test_flash_high_and_low_time(#[case] symbols: &str, #[case] high_ms: u64, #[case] low_ms: u64) {
    let timeline = flash_on_timeline(symbols);
    assert_eq!(timeline.high_time_ms(), high_ms);
    assert_eq!(timeline.low_time_ms(), low_ms);
    assert_eq!(timeline.elapsed_ms(), u64::from(flash_duration_ms(symbols)));
}

#[test]
fn test_flash_always_starts_and_ends_dark() {
    for symbols in ["", ".", "-", " ", ".- -... "] {
        let drives = flash_on_timeline(symbols).drives();
        assert_eq!(drives.first(), Some(&false), "{:?}", symbols);
        assert_eq!(drives.last(), Some(&false), "{:?}", symbols);
    }
}

#[test]
fn test_gap_never_lights() {
    let timeline = flash_on_timeline("   ");
    assert!(timeline.drives().iter().all(|on| !on));
    assert_eq!(timeline.low_time_ms(), 900);
}

#[test]
fn test_letters_within_character_are_rest_separated() {
    // "A" = dot, rest, dash, rest, gap, rest
    assert_eq!(render_timeline(&flash_on_timeline(".- ")), "#_##____");
}

#[test]
fn test_sos_timeline() {
    let timeline = Timeline::new();
    let mut led = MockIndicator::new(&timeline);
    let mut delay = MockDelay::new(&timeline);
    encode_and_flash("SOS", &mut led, &mut delay).unwrap();

    assert_eq!(timeline.pulses_ms(), vec![100, 100, 100, 200, 200, 200, 100, 100, 100]);
    assert_eq!(timeline.elapsed_ms(), u64::from(encoded_duration_ms("SOS")));
    assert_eq!(timeline.elapsed_ms(), 3_000);
}

#[test]
fn test_encode_and_flash_equals_flash_of_encode() {
    let message = "Rust, on an LED!";

    let streamed = Timeline::new();
    let mut led = MockIndicator::new(&streamed);
    let mut delay = MockDelay::new(&streamed);
    encode_and_flash(message, &mut led, &mut delay).unwrap();

    let buffered = flash_on_timeline(&encode_to_string(message));
    assert_eq!(streamed.events(), buffered.events());
}
