//! Busy-wait delay on a countdown timer
//!
//! The timer counts in fixed units (0.1 ms on the reference board). Only
//! one delay can be outstanding at a time, which `&mut self` enforces;
//! the controller owns the single instance and lends it to whichever
//! stage needs to wait.

use barmatrix_hal::CountdownTimer;
use barmatrix_protocol::DELAY_UNIT_US;

/// Blocking delay
pub struct Delay<T> {
    timer: T,
}

impl<T: CountdownTimer> Delay<T> {
    /// Take ownership of a timer, leaving it stopped with its flag clear
    pub fn new(mut timer: T) -> Self {
        timer.stop();
        timer.clear_elapsed();
        Self { timer }
    }

    /// Wait for `units` timer ticks
    ///
    /// Loads the count, starts the timer, clears any stale elapsed flag and
    /// spins until the flag rises. Zero returns at once.
    pub fn delay_units(&mut self, units: u16) {
        if units == 0 {
            return;
        }
        self.timer.set_reload(units);
        self.timer.start();
        self.timer.clear_elapsed();
        while !self.timer.is_elapsed() {
            core::hint::spin_loop();
        }
    }

    /// Wait at least `us` microseconds
    ///
    /// Rounded up to whole units; long waits are split into several
    /// timer runs.
    pub fn delay_micros(&mut self, us: u32) {
        let mut units = us.div_ceil(DELAY_UNIT_US);
        while units > 0 {
            let chunk = units.min(u16::MAX as u32) as u16;
            self.delay_units(chunk);
            units -= chunk as u32;
        }
    }

    /// Release the timer
    pub fn free(self) -> T {
        self.timer
    }
}

impl<T: CountdownTimer> embedded_hal::delay::DelayNs for Delay<T> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_micros(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_micros(us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_log, ops, FakeTimer, Op};
    use embedded_hal::delay::DelayNs;

    #[test]
    fn test_new_stops_and_clears() {
        let log = new_log();
        let _delay = Delay::new(FakeTimer::new(&log, 1));
        assert_eq!(ops(&log), [Op::TimerStop, Op::TimerClear]);
    }

    #[test]
    fn test_delay_sequence() {
        let log = new_log();
        let mut delay = Delay::new(FakeTimer::new(&log, 3));
        log.borrow_mut().clear();

        delay.delay_units(5);
        assert_eq!(
            ops(&log),
            [Op::TimerReload(5), Op::TimerStart, Op::TimerClear]
        );
    }

    #[test]
    fn test_zero_delay_skips_timer() {
        let log = new_log();
        let mut delay = Delay::new(FakeTimer::new(&log, 1));
        log.borrow_mut().clear();

        delay.delay_units(0);
        delay.delay_micros(0);
        assert!(ops(&log).is_empty());
    }

    #[test]
    fn test_micros_round_up() {
        let log = new_log();
        let mut delay = Delay::new(FakeTimer::new(&log, 1));
        log.borrow_mut().clear();

        delay.delay_micros(150);
        assert_eq!(ops(&log)[0], Op::TimerReload(2));
    }

    #[test]
    fn test_long_delay_is_chunked() {
        let log = new_log();
        let mut delay = Delay::new(FakeTimer::new(&log, 1));
        log.borrow_mut().clear();

        // 70_000 units does not fit one 16-bit reload
        delay.delay_micros(7_000_000);
        let reloads: Vec<u16> = ops(&log)
            .into_iter()
            .filter_map(|op| match op {
                Op::TimerReload(n) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(reloads, [u16::MAX, (70_000 - u16::MAX as u32) as u16]);
    }

    #[test]
    fn test_embedded_hal_delay() {
        let log = new_log();
        let mut delay = Delay::new(FakeTimer::new(&log, 1));
        log.borrow_mut().clear();

        delay.delay_ms(1);
        assert_eq!(ops(&log)[0], Op::TimerReload(10));
    }
}
