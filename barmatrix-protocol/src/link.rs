//! Physical link settings and bus framing
//!
//! The matrix driver samples on the rising edge with the clock idling low
//! and expects the most significant bit first. It needs the select line
//! to settle for half a millisecond on either side of a burst.

use barmatrix_hal::spi::{BaudPrescaler, BitOrder, Mode, SpiConfig};

/// SPI settings for the matrix link
pub const LINK_CONFIG: SpiConfig = SpiConfig {
    prescaler: BaudPrescaler::Div256,
    mode: Mode::Mode0,
    bit_order: BitOrder::MsbFirst,
};

/// Length of one delay unit in microseconds
pub const DELAY_UNIT_US: u32 = 100;

/// Select-to-first-clock setup time, in delay units (0.5 ms)
pub const BUS_SETUP_UNITS: u16 = 5;

/// Last-clock-to-deselect hold time, in delay units (0.5 ms)
pub const BUS_HOLD_UNITS: u16 = 5;

/// Ownership of the matrix bus, as seen on the select line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusState {
    /// Select asserted; the controller is clocking a frame
    Owned,
    /// Select released; the matrix latches what it received
    Released,
}

impl BusState {
    /// Pin level for this state (the select line is active low)
    pub const fn is_high(self) -> bool {
        matches!(self, BusState::Released)
    }

    /// Interpret a pin level
    pub const fn from_level(high: bool) -> Self {
        if high {
            BusState::Released
        } else {
            BusState::Owned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_active_low() {
        assert!(!BusState::Owned.is_high());
        assert!(BusState::Released.is_high());
        assert_eq!(BusState::from_level(false), BusState::Owned);
        assert_eq!(BusState::from_level(true), BusState::Released);
    }

    #[test]
    fn test_link_rate_at_reference_clock() {
        // Reference board runs the bus at 24 MHz
        assert_eq!(LINK_CONFIG.bit_rate(24_000_000), 93_750);
        assert_eq!(LINK_CONFIG.bit_order, BitOrder::MsbFirst);
    }

    #[test]
    fn test_framing_delays_are_half_a_millisecond() {
        assert_eq!(BUS_SETUP_UNITS as u32 * DELAY_UNIT_US, 500);
        assert_eq!(BUS_HOLD_UNITS as u32 * DELAY_UNIT_US, 500);
    }
}
