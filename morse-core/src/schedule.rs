//! Flash timing plan
//!
//! Expands a stream of encoded characters into the exact ordered list of
//! pin drives and holds the signaler performs. Kept free of hardware so the
//! blocking and async signalers share one source of truth.

use core::slice;
use embedded_hal::digital::PinState;

use crate::types::Symbol;

/// Indicator on-time for a dot, in milliseconds
pub const DOT_ON_MS: u32 = 100;
/// Indicator on-time for a dash, in milliseconds
pub const DASH_ON_MS: u32 = 200;
/// Dark time for a gap symbol, before the rest, in milliseconds
pub const GAP_OFF_MS: u32 = 200;
/// Dark rest after every symbol, in milliseconds
pub const REST_OFF_MS: u32 = 100;

/// One operation of a flash sequence
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Step {
    /// Drive the indicator (High = lit)
    Drive(PinState),
    /// Block for the given number of milliseconds
    Hold(u32),
}

impl Step {
    /// Milliseconds this step blocks for
    pub const fn hold_ms(&self) -> u32 {
        match self {
            Step::Drive(_) => 0,
            Step::Hold(ms) => *ms,
        }
    }
}

const ON: Step = Step::Drive(PinState::High);
const OFF: Step = Step::Drive(PinState::Low);

static DOT_STEPS: [Step; 4] = [ON, Step::Hold(DOT_ON_MS), OFF, Step::Hold(REST_OFF_MS)];
static DASH_STEPS: [Step; 4] = [ON, Step::Hold(DASH_ON_MS), OFF, Step::Hold(REST_OFF_MS)];
// The rest is applied after the gap's own hold, so a gap is 300 ms dark.
static GAP_STEPS: [Step; 4] = [OFF, Step::Hold(GAP_OFF_MS), OFF, Step::Hold(REST_OFF_MS)];
static REST_STEPS: [Step; 2] = [OFF, Step::Hold(REST_OFF_MS)];
const NO_STEPS: &[Step] = &[];

/// Steps for a single encoded character
///
/// Unrecognised characters still get the trailing rest.
pub fn steps_for(c: char) -> &'static [Step] {
    match Symbol::from_char(c) {
        Some(Symbol::Dot) => &DOT_STEPS,
        Some(Symbol::Dash) => &DASH_STEPS,
        Some(Symbol::Gap) => &GAP_STEPS,
        None => &REST_STEPS,
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Phase {
    Reset,
    Symbols,
    Done,
}

/// Iterator over the steps that flash a symbol stream
///
/// Always starts and ends with a LOW drive. Neither reset holds, so an
/// empty stream yields exactly two steps.
#[derive(Clone, Debug)]
pub struct FlashSteps<I> {
    symbols: I,
    pending: slice::Iter<'static, Step>,
    phase: Phase,
}

impl<I> FlashSteps<I>
where
    I: Iterator<Item = char>,
{
    pub fn new<S>(symbols: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            symbols: symbols.into_iter(),
            pending: NO_STEPS.iter(),
            phase: Phase::Reset,
        }
    }
}

impl<I> Iterator for FlashSteps<I>
where
    I: Iterator<Item = char>,
{
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(step) = self.pending.next() {
            return Some(*step);
        }

        match self.phase {
            Phase::Reset => {
                self.phase = Phase::Symbols;
                Some(OFF)
            }
            Phase::Symbols => match self.symbols.next() {
                Some(c) => {
                    self.pending = steps_for(c).iter();
                    self.pending.next().copied()
                }
                None => {
                    self.phase = Phase::Done;
                    Some(OFF)
                }
            },
            Phase::Done => None,
        }
    }
}

/// Total blocking time of a step sequence, in milliseconds
pub fn total_hold_ms<I>(steps: I) -> u32
where
    I: IntoIterator<Item = Step>,
{
    steps
        .into_iter()
        .fold(0u32, |total, step| total.saturating_add(step.hold_ms()))
}

/// Time `flash` blocks for on an already encoded symbol string
pub fn flash_duration_ms(symbols: &str) -> u32 {
    total_hold_ms(FlashSteps::new(symbols.chars()))
}
