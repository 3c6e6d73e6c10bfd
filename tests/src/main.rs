// Host simulator: prints what the beacon LED would do for a message

use morse_core::test_utils::output_capture::MockIndicator;
use morse_core::test_utils::virtual_time::{MockDelay, Timeline};
use morse_core::{encode_and_flash, encode_to_string, HalError};
use morse_tests::render_timeline;

fn main() -> Result<(), HalError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let message = if args.is_empty() {
        "SOS".to_string()
    } else {
        args.join(" ")
    };

    println!("📡 Morse Beacon Simulator v{}", morse_core::VERSION);
    println!("  Message: {:?}", message);
    println!("  Encoded: {:?}", encode_to_string(&message));

    let timeline = Timeline::new();
    let mut led = MockIndicator::new(&timeline);
    let mut delay = MockDelay::new(&timeline);
    encode_and_flash(&message, &mut led, &mut delay)?;

    println!(
        "  Duration: {}ms ({}ms lit, {}ms dark)",
        timeline.elapsed_ms(),
        timeline.high_time_ms(),
        timeline.low_time_ms()
    );
    println!("  LED (1 char = 100ms, # = on):");
    for line in render_timeline(&timeline).as_bytes().chunks(60) {
        println!("    {}", String::from_utf8_lossy(line));
    }

    Ok(())
}
