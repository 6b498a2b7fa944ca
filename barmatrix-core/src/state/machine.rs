//! State machine definition

/// Render scheduling states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RenderState {
    /// Nothing pending; the next tick requests a cycle
    Idle = 0,
    /// A tick requested a cycle the main loop has not picked up yet
    RenderDue = 1,
    /// The main loop is running a cycle
    Rendering = 2,
}

/// Events that drive the render state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderEvent {
    /// Periodic tick
    Tick,
    /// Main loop picked up the request
    CycleStarted,
    /// Sample, classify, render and transmit all done
    CycleFinished,
}

impl RenderState {
    /// Process an event and return the next state
    ///
    /// Any event that does not apply leaves the state unchanged; in
    /// particular a tick outside `Idle` is dropped without a trace.
    pub fn transition(self, event: RenderEvent) -> Self {
        use RenderEvent::*;
        use RenderState::*;

        match (self, event) {
            (Idle, Tick) => RenderDue,
            (RenderDue, CycleStarted) => Rendering,
            (Rendering, CycleFinished) => Idle,
            _ => self,
        }
    }

    /// Decode the stored representation
    pub(crate) const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => RenderState::RenderDue,
            2 => RenderState::Rendering,
            _ => RenderState::Idle,
        }
    }
}
