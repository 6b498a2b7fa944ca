//! Tick flag shared between the tick interrupt and the main loop
//!
//! Single producer (the tick) and single consumer (the main loop). The
//! producer only ever moves the flag out of `Idle`; the consumer only ever
//! moves it out of `RenderDue` and `Rendering`. Each side therefore owns
//! the transitions it makes, and a compare-exchange is enough to keep a
//! tick that lands mid-cycle from doing anything.

use portable_atomic::{AtomicU8, Ordering};

use super::machine::{RenderEvent, RenderState};

/// What happened to a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Flag moved to `RenderDue`
    Scheduled,
    /// A cycle was already pending or running; nothing recorded
    Dropped,
}

/// Atomic render-state flag
///
/// Usable from a `static`.
#[derive(Debug)]
pub struct TickFlag {
    state: AtomicU8,
}

impl Default for TickFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl TickFlag {
    /// Create an idle flag
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(RenderState::Idle as u8),
        }
    }

    /// Current state
    pub fn state(&self) -> RenderState {
        RenderState::from_raw(self.state.load(Ordering::Acquire))
    }

    /// Apply an event; returns true if the state changed
    fn apply(&self, event: RenderEvent) -> bool {
        let current = self.state();
        let next = current.transition(event);
        if next == current {
            return false;
        }
        self.state
            .compare_exchange(current as u8, next as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Record a tick (interrupt side)
    ///
    /// Never blocks.
    pub fn on_tick(&self) -> TickOutcome {
        if self.apply(RenderEvent::Tick) {
            TickOutcome::Scheduled
        } else {
            TickOutcome::Dropped
        }
    }

    /// Claim a pending cycle (main-loop side)
    ///
    /// Returns true if a cycle was due and is now `Rendering`.
    pub fn try_begin(&self) -> bool {
        self.apply(RenderEvent::CycleStarted)
    }

    /// Mark the running cycle complete (main-loop side)
    pub fn finish(&self) {
        self.apply(RenderEvent::CycleFinished);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let flag = TickFlag::new();
        assert_eq!(flag.state(), RenderState::Idle);
        assert!(!flag.try_begin());
    }

    #[test]
    fn test_tick_schedules_once() {
        let flag = TickFlag::new();
        assert_eq!(flag.on_tick(), TickOutcome::Scheduled);
        assert_eq!(flag.state(), RenderState::RenderDue);

        // at most one outstanding request
        assert_eq!(flag.on_tick(), TickOutcome::Dropped);
        assert_eq!(flag.state(), RenderState::RenderDue);
    }

    #[test]
    fn test_tick_dropped_while_rendering() {
        let flag = TickFlag::new();
        flag.on_tick();
        assert!(flag.try_begin());
        assert_eq!(flag.state(), RenderState::Rendering);

        assert_eq!(flag.on_tick(), TickOutcome::Dropped);
        assert_eq!(flag.state(), RenderState::Rendering);

        flag.finish();
        assert_eq!(flag.state(), RenderState::Idle);

        // the dropped tick left nothing behind
        assert!(!flag.try_begin());
    }

    #[test]
    fn test_finish_without_begin_is_ignored() {
        let flag = TickFlag::new();
        flag.on_tick();
        flag.finish();
        assert_eq!(flag.state(), RenderState::RenderDue);
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let flag = Arc::new(TickFlag::new());
        let ticker = {
            let flag = Arc::clone(&flag);
            thread::spawn(move || {
                let mut scheduled = 0;
                for _ in 0..1000 {
                    if flag.on_tick() == TickOutcome::Scheduled {
                        scheduled += 1;
                    }
                }
                scheduled
            })
        };

        let mut cycles = 0;
        while !ticker.is_finished() || flag.state() != RenderState::Idle {
            if flag.try_begin() {
                cycles += 1;
                flag.finish();
            }
        }
        let scheduled = ticker.join().unwrap();
        // every scheduled tick produced exactly one cycle
        assert_eq!(cycles, scheduled);
    }
}
