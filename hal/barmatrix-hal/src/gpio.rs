//! GPIO pin abstractions
//!
//! Provides the output capability used for the heartbeat LED and the
//! bus-select line.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently driven high
    ///
    /// Reads back the output latch, not the pad. Takes `&mut self` to match
    /// `embedded-hal` 1.0, where reading a port may touch shared registers.
    fn is_set_high(&mut self) -> bool;

    /// Toggle the pin state
    ///
    /// Derived from the output latch so that toggling works on ports that
    /// have no dedicated toggle register.
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven low
    fn is_set_low(&mut self) -> bool {
        !self.is_set_high()
    }
}

/// Adapter for any infallible `embedded-hal` stateful output pin
///
/// Chip HALs that already implement `embedded-hal` 1.0 (embassy, most
/// PAC-based HALs) can be used without a hand-written wrapper.
pub struct StatefulPin<P>(pub P);

impl<P> StatefulPin<P> {
    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> OutputPin for StatefulPin<P>
where
    P: embedded_hal::digital::StatefulOutputPin<Error = core::convert::Infallible>,
{
    fn set_high(&mut self) {
        embedded_hal::digital::OutputPin::set_high(&mut self.0).unwrap_or_else(|e| match e {});
    }

    fn set_low(&mut self) {
        embedded_hal::digital::OutputPin::set_low(&mut self.0).unwrap_or_else(|e| match e {});
    }

    fn is_set_high(&mut self) -> bool {
        embedded_hal::digital::StatefulOutputPin::is_set_high(&mut self.0).unwrap_or_else(|e| match e {})
    }

    fn toggle(&mut self) {
        embedded_hal::digital::StatefulOutputPin::toggle(&mut self.0).unwrap_or_else(|e| match e {});
    }
}
