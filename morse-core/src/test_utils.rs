//! Test utilities for flash timing

pub mod virtual_time {
    //! Virtual time simulation for deterministic testing

    use std::cell::RefCell;
    use std::rc::Rc;

    const NANOS_PER_MILLI: u64 = 1_000_000;

    /// Recorded indicator or delay activity
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum Event {
        /// Indicator driven at `at_ns`
        Drive { at_ns: u64, on: bool },
        /// Blocking delay of `ns` starting at `at_ns`
        Hold { at_ns: u64, ns: u64 },
    }

    /// Shared virtual clock and event log
    ///
    /// Clones share the same log, so an indicator and a delay built from
    /// one timeline record into a single ordered history.
    #[derive(Clone, Debug, Default)]
    pub struct Timeline {
        inner: Rc<RefCell<TimelineInner>>,
    }

    #[derive(Debug, Default)]
    struct TimelineInner {
        now_ns: u64,
        events: Vec<Event>,
    }

    impl Timeline {
        pub fn new() -> Self {
            Self::default()
        }

        /// Current virtual time
        pub fn now_ns(&self) -> u64 {
            self.inner.borrow().now_ns
        }

        /// Record an indicator drive at the current time
        pub fn record_drive(&self, on: bool) {
            let mut inner = self.inner.borrow_mut();
            let at_ns = inner.now_ns;
            inner.events.push(Event::Drive { at_ns, on });
        }

        /// Advance virtual time, recording the hold
        pub fn advance_ns(&self, ns: u64) {
            let mut inner = self.inner.borrow_mut();
            let at_ns = inner.now_ns;
            inner.events.push(Event::Hold { at_ns, ns });
            inner.now_ns += ns;
        }

        pub fn events(&self) -> Vec<Event> {
            self.inner.borrow().events.clone()
        }

        /// Drive levels in order (true = lit)
        pub fn drives(&self) -> Vec<bool> {
            self.inner
                .borrow()
                .events
                .iter()
                .filter_map(|event| match event {
                    Event::Drive { on, .. } => Some(*on),
                    Event::Hold { .. } => None,
                })
                .collect()
        }

        pub fn hold_count(&self) -> usize {
            self.inner
                .borrow()
                .events
                .iter()
                .filter(|event| matches!(event, Event::Hold { .. }))
                .count()
        }

        pub fn elapsed_ms(&self) -> u64 {
            self.now_ns() / NANOS_PER_MILLI
        }

        /// Total time spent lit
        pub fn high_time_ms(&self) -> u64 {
            self.pulses_ms().iter().sum()
        }

        /// Total time spent dark after the first event
        pub fn low_time_ms(&self) -> u64 {
            self.elapsed_ms() - self.high_time_ms()
        }

        /// Length of every lit period, in order
        pub fn pulses_ms(&self) -> Vec<u64> {
            let inner = self.inner.borrow();
            let mut pulses = Vec::new();
            let mut lit: Option<u64> = None;

            for event in &inner.events {
                match (*event, lit) {
                    (Event::Drive { on: true, .. }, None) => lit = Some(0),
                    (Event::Drive { on: false, .. }, Some(ns)) => {
                        pulses.push(ns / NANOS_PER_MILLI);
                        lit = None;
                    }
                    (Event::Hold { ns, .. }, Some(total)) => lit = Some(total + ns),
                    _ => {}
                }
            }
            if let Some(ns) = lit {
                pulses.push(ns / NANOS_PER_MILLI);
            }
            pulses
        }

        /// Clear the log and rewind the clock
        pub fn clear(&self) {
            let mut inner = self.inner.borrow_mut();
            inner.now_ns = 0;
            inner.events.clear();
        }
    }

    /// Delay that advances a `Timeline` instead of sleeping
    #[derive(Clone, Debug)]
    pub struct MockDelay {
        timeline: Timeline,
    }

    impl MockDelay {
        pub fn new(timeline: &Timeline) -> Self {
            Self {
                timeline: timeline.clone(),
            }
        }
    }

    impl embedded_hal::delay::DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.timeline.advance_ns(u64::from(ns));
        }

        fn delay_us(&mut self, us: u32) {
            self.timeline.advance_ns(u64::from(us) * 1_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.timeline.advance_ns(u64::from(ms) * NANOS_PER_MILLI);
        }
    }

    #[cfg(feature = "async")]
    impl embedded_hal_async::delay::DelayNs for MockDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.timeline.advance_ns(u64::from(ns));
        }

        async fn delay_us(&mut self, us: u32) {
            self.timeline.advance_ns(u64::from(us) * 1_000);
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.timeline.advance_ns(u64::from(ms) * NANOS_PER_MILLI);
        }
    }
}

pub mod output_capture {
    //! Indicator capture for testing

    use super::virtual_time::Timeline;
    use crate::hal::{HalError, Indicator};

    /// Indicator that records every drive into a `Timeline`
    #[derive(Clone, Debug)]
    pub struct MockIndicator {
        timeline: Timeline,
        on: bool,
        drives: usize,
        fail_on: Option<usize>,
    }

    impl MockIndicator {
        pub fn new(timeline: &Timeline) -> Self {
            Self {
                timeline: timeline.clone(),
                on: false,
                drives: 0,
                fail_on: None,
            }
        }

        /// Indicator whose `index`-th drive (0-based) fails once
        pub fn failing_on(timeline: &Timeline, index: usize) -> Self {
            Self {
                fail_on: Some(index),
                ..Self::new(timeline)
            }
        }

        /// Number of drive attempts, failed ones included
        pub fn drive_attempts(&self) -> usize {
            self.drives
        }
    }

    impl Indicator for MockIndicator {
        type Error = HalError;

        fn set_state(&mut self, on: bool) -> Result<(), Self::Error> {
            let index = self.drives;
            self.drives += 1;
            if self.fail_on == Some(index) {
                return Err(HalError::GpioError);
            }
            self.timeline.record_drive(on);
            self.on = on;
            Ok(())
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }
}
