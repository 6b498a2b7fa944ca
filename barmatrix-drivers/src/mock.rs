//! Recording fakes for the hardware capabilities
//!
//! Every fake appends to one shared log so tests can check the relative
//! order of calls across peripherals (select line vs. timer vs. SPI).

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use barmatrix_hal::{AnalogSampler, CountdownTimer, OutputPin, SerialTransceiver};

/// One recorded hardware call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    PinHigh,
    PinLow,
    TimerReload(u16),
    TimerStart,
    TimerStop,
    TimerClear,
    SpiEnable,
    SpiDisable,
    SpiWrite(u8),
    AdcStart,
    AdcRead,
    AdcClearEoc,
    AdcClearStrt,
    AdcRestart,
}

pub type Log = Rc<RefCell<Vec<Op>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn ops(log: &Log) -> Vec<Op> {
    log.borrow().clone()
}

fn record(log: &Log, op: Op) {
    log.borrow_mut().push(op);
}

/// Output pin with a readable latch
pub struct FakePin {
    log: Log,
    high: bool,
}

impl FakePin {
    pub fn new(log: &Log, high: bool) -> Self {
        Self {
            log: Rc::clone(log),
            high,
        }
    }
}

impl OutputPin for FakePin {
    fn set_high(&mut self) {
        self.high = true;
        record(&self.log, Op::PinHigh);
    }

    fn set_low(&mut self) {
        self.high = false;
        record(&self.log, Op::PinLow);
    }

    fn is_set_high(&mut self) -> bool {
        self.high
    }
}

/// Timer whose update flag rises after a fixed number of polls
pub struct FakeTimer {
    log: Log,
    polls_needed: u32,
    polls: Cell<u32>,
    running: bool,
}

impl FakeTimer {
    pub fn new(log: &Log, polls_needed: u32) -> Self {
        Self {
            log: Rc::clone(log),
            polls_needed,
            polls: Cell::new(0),
            running: false,
        }
    }
}

impl CountdownTimer for FakeTimer {
    fn set_reload(&mut self, ticks: u16) {
        record(&self.log, Op::TimerReload(ticks));
    }

    fn start(&mut self) {
        self.running = true;
        self.polls.set(0);
        record(&self.log, Op::TimerStart);
    }

    fn stop(&mut self) {
        self.running = false;
        record(&self.log, Op::TimerStop);
    }

    fn is_elapsed(&self) -> bool {
        if !self.running {
            return false;
        }
        self.polls.set(self.polls.get() + 1);
        self.polls.get() >= self.polls_needed
    }

    fn clear_elapsed(&mut self) {
        self.polls.set(0);
        record(&self.log, Op::TimerClear);
    }
}

/// SPI transmitter that is slow to drain
///
/// Panics if a byte is written without a preceding TX-empty poll, or
/// while disabled, or if it is disabled with the last byte still
/// shifting out.
pub struct FakeSpi {
    log: Log,
    busy_polls: u32,
    busy_left: Cell<u32>,
    busy_checks: Cell<u32>,
    tx_seen_empty: Cell<bool>,
    written: bool,
    enabled: bool,
}

impl FakeSpi {
    pub fn new(log: &Log, busy_polls: u32) -> Self {
        Self {
            log: Rc::clone(log),
            busy_polls,
            busy_left: Cell::new(0),
            busy_checks: Cell::new(0),
            tx_seen_empty: Cell::new(false),
            written: false,
            enabled: false,
        }
    }

    /// Number of BSY polls so far
    pub fn busy_checks(&self) -> u32 {
        self.busy_checks.get()
    }
}

impl SerialTransceiver for FakeSpi {
    fn enable(&mut self) {
        self.enabled = true;
        self.written = false;
        record(&self.log, Op::SpiEnable);
    }

    fn disable(&mut self) {
        if self.written {
            assert!(self.tx_seen_empty.get(), "disabled without TXE poll after last write");
            assert_eq!(self.busy_left.get(), 0, "disabled while still shifting");
        }
        self.enabled = false;
        self.written = false;
        record(&self.log, Op::SpiDisable);
    }

    fn is_tx_empty(&self) -> bool {
        self.tx_seen_empty.set(true);
        true
    }

    fn is_busy(&self) -> bool {
        self.busy_checks.set(self.busy_checks.get() + 1);
        let left = self.busy_left.get();
        if left > 0 {
            self.busy_left.set(left - 1);
            true
        } else {
            false
        }
    }

    fn write_byte(&mut self, byte: u8) {
        assert!(self.enabled, "write while disabled");
        assert!(self.tx_seen_empty.replace(false), "write without TXE poll");
        self.busy_left.set(self.busy_polls);
        self.written = true;
        record(&self.log, Op::SpiWrite(byte));
    }
}

/// Scanning ADC that steps through eight inputs on its own
///
/// Each start converts the next input in the sequence. A conversion
/// still pending when the next start arrives finishes late, leaving its
/// end-of-conversion flag and result behind, as the hardware does.
pub struct FakeAdc {
    log: Log,
    /// Sample per input, repeated if shorter than the sequence
    samples: Vec<u16>,
    /// `None` models a converter that never finishes
    polls_needed: Option<u32>,
    /// Input whose first conversion never finishes
    stall_once: Option<usize>,
    position: usize,
    /// Input being converted and polls left before it finishes
    pending: Cell<Option<(usize, Option<u32>)>>,
    eoc: Cell<bool>,
    result: Cell<usize>,
}

impl FakeAdc {
    pub fn new(log: &Log, samples: &[u16], polls_needed: Option<u32>) -> Self {
        Self {
            log: Rc::clone(log),
            samples: samples.to_vec(),
            polls_needed,
            stall_once: None,
            position: 0,
            pending: Cell::new(None),
            eoc: Cell::new(false),
            result: Cell::new(0),
        }
    }

    /// Make the first conversion of `input` hang
    pub fn stall_once(mut self, input: usize) -> Self {
        self.stall_once = Some(input);
        self
    }

    fn finish(&self, input: usize) {
        self.pending.set(None);
        self.eoc.set(true);
        self.result.set(input);
    }
}

impl AnalogSampler for FakeAdc {
    fn start(&mut self) {
        record(&self.log, Op::AdcStart);
        if let Some((input, _)) = self.pending.get() {
            self.finish(input);
        }
        let input = self.position;
        let needed = if self.stall_once == Some(input) {
            self.stall_once = None;
            None
        } else {
            self.polls_needed
        };
        self.pending.set(Some((input, needed)));
        self.position = (input + 1) % 8;
    }

    fn is_conversion_complete(&self) -> bool {
        if self.eoc.get() {
            return true;
        }
        match self.pending.get() {
            Some((input, Some(left))) if left <= 1 => {
                self.finish(input);
                true
            }
            Some((input, Some(left))) => {
                self.pending.set(Some((input, Some(left - 1))));
                false
            }
            _ => false,
        }
    }

    fn read(&mut self) -> u16 {
        record(&self.log, Op::AdcRead);
        self.samples[self.result.get() % self.samples.len()]
    }

    fn clear_conversion_complete(&mut self) {
        self.eoc.set(false);
        record(&self.log, Op::AdcClearEoc);
    }

    fn clear_scan_started(&mut self) {
        record(&self.log, Op::AdcClearStrt);
    }

    fn restart_scan(&mut self) {
        self.pending.set(None);
        self.eoc.set(false);
        self.position = 0;
        record(&self.log, Op::AdcRestart);
    }
}
