//! Property tests for encoding and flash timing

use morse_core::test_utils::output_capture::MockIndicator;
use morse_core::test_utils::virtual_time::{MockDelay, Timeline};
use morse_core::{encode_and_flash, encode_to_string, encoded_duration_ms, encoded_len};
use proptest::prelude::*;

use crate::decode_letters;

fn flash_message(message: &str) -> Timeline {
    let timeline = Timeline::new();
    let mut led = MockIndicator::new(&timeline);
    let mut delay = MockDelay::new(&timeline);
    encode_and_flash(message, &mut led, &mut delay).unwrap();
    timeline
}

proptest! {
    #[test]
    fn encoded_len_matches_output(message in any::<String>()) {
        prop_assert_eq!(encoded_len(&message), encode_to_string(&message).len());
    }

    #[test]
    fn output_uses_only_morse_symbols(message in any::<String>()) {
        let encoded = encode_to_string(&message);
        prop_assert!(encoded.chars().all(|c| matches!(c, '.' | '-' | ' ')));
    }

    #[test]
    fn one_separator_per_printable_char(message in any::<String>()) {
        let printable = message.chars().filter(|c| *c >= ' ').count();
        prop_assert_eq!(encode_to_string(&message).matches(' ').count(), printable);
    }

    #[test]
    fn control_chars_do_not_change_encoding(message in "[A-Za-z0-9 .,\\x00-\\x1f]{0,40}") {
        let stripped: String = message.chars().filter(|c| *c >= ' ').collect();
        prop_assert_eq!(encode_to_string(&message), encode_to_string(&stripped));
    }

    #[test]
    fn letters_round_trip(message in "[A-Za-z]{0,40}") {
        let encoded = encode_to_string(&message);
        prop_assert_eq!(decode_letters(&encoded), message.to_ascii_uppercase());
    }

    #[test]
    fn lit_time_follows_symbols(message in "[A-Za-z .?\\n]{0,24}") {
        let encoded = encode_to_string(&message);
        let dots = encoded.matches('.').count() as u64;
        let dashes = encoded.matches('-').count() as u64;

        let timeline = flash_message(&message);
        prop_assert_eq!(timeline.high_time_ms(), 100 * dots + 200 * dashes);
        prop_assert_eq!(timeline.elapsed_ms(), u64::from(encoded_duration_ms(&message)));
        prop_assert_eq!(timeline.drives().last().copied(), Some(false));
    }
}
