//! Liveness indicator and tick handling
//!
//! The heartbeat toggles on every tick whether or not a render cycle is
//! scheduled, so a stuck main loop still shows a blinking LED while a
//! dead tick source shows a steady one.

use barmatrix_core::{TickFlag, TickOutcome};
use barmatrix_hal::OutputPin;

/// Heartbeat LED
pub struct Heartbeat<P> {
    pin: P,
}

impl<P: OutputPin> Heartbeat<P> {
    /// Take the LED pin and switch it off
    pub fn new(mut pin: P) -> Self {
        pin.set_low();
        Self { pin }
    }

    /// Flip the LED
    pub fn beat(&mut self) {
        self.pin.toggle();
    }

    /// Whether the LED is currently lit
    pub fn is_on(&mut self) -> bool {
        self.pin.is_set_high()
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

/// Work done on each periodic tick
///
/// Lives in the tick interrupt. Borrows the flag it shares with the main
/// loop; on hardware that flag is a `static`.
pub struct TickHandler<'a, P> {
    heartbeat: Heartbeat<P>,
    flag: &'a TickFlag,
}

impl<'a, P: OutputPin> TickHandler<'a, P> {
    /// Pair the heartbeat LED with the flag the main loop waits on
    pub fn new(heartbeat: Heartbeat<P>, flag: &'a TickFlag) -> Self {
        Self { heartbeat, flag }
    }

    /// Handle one tick
    ///
    /// Toggles the heartbeat, then schedules a render cycle if none is
    /// pending or running.
    pub fn on_tick(&mut self) -> TickOutcome {
        self.heartbeat.beat();
        let outcome = self.flag.on_tick();
        #[cfg(feature = "defmt")]
        if outcome == TickOutcome::Dropped {
            defmt::trace!("tick dropped, state {}", self.flag.state());
        }
        outcome
    }

    /// The heartbeat LED, for tests and diagnostics
    pub fn heartbeat(&mut self) -> &mut Heartbeat<P> {
        &mut self.heartbeat
    }
}
