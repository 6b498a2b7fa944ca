//! Matrix frame transmitter
//!
//! Sends one frame as a single select-framed burst:
//!
//! 1. Select low (bus owned), wait the setup time
//! 2. Enable the SPI master
//! 3. For each byte: wait for TX empty, write
//! 4. Wait for TX empty, then for not busy (last byte fully shifted out)
//! 5. Disable the SPI master, wait the hold time
//! 6. Select high (bus released)
//!
//! A burst always runs to completion. If it is cut short (reset, power
//! loss) the matrix shows a partial frame until the next full one.

use barmatrix_core::FrameBuffer;
use barmatrix_hal::{CountdownTimer, OutputPin, SerialTransceiver};
use barmatrix_protocol::{BusState, BUS_HOLD_UNITS, BUS_SETUP_UNITS, FRAME_LEN};

use crate::delay::Delay;

/// Frame transmitter over SPI with a GPIO select line
pub struct Transmitter<S, P> {
    spi: S,
    select: P,
}

impl<S: SerialTransceiver, P: OutputPin> Transmitter<S, P> {
    /// Take the SPI master and the select pin, leaving the bus released
    pub fn new(mut spi: S, select: P) -> Self {
        spi.disable();
        let mut transmitter = Self { spi, select };
        transmitter.set_bus(BusState::Released);
        transmitter
    }

    /// Send a rendered frame
    pub fn send_frame<T: CountdownTimer>(&mut self, frame: &FrameBuffer, delay: &mut Delay<T>) {
        self.send(&frame.to_bytes(), delay);
    }

    /// Send 64 raw bytes, row-major
    pub fn send<T: CountdownTimer>(&mut self, bytes: &[u8; FRAME_LEN], delay: &mut Delay<T>) {
        self.set_bus(BusState::Owned);
        delay.delay_units(BUS_SETUP_UNITS);

        self.spi.enable();
        for &byte in bytes {
            self.wait_tx_empty();
            self.spi.write_byte(byte);
        }
        self.wait_tx_empty();
        while self.spi.is_busy() {
            core::hint::spin_loop();
        }
        self.spi.disable();

        delay.delay_units(BUS_HOLD_UNITS);
        self.set_bus(BusState::Released);
    }

    fn wait_tx_empty(&self) {
        while !self.spi.is_tx_empty() {
            core::hint::spin_loop();
        }
    }

    fn set_bus(&mut self, state: BusState) {
        self.select.set_state(state.is_high());
    }

    /// Bus state as read back from the select line
    pub fn bus_state(&mut self) -> BusState {
        BusState::from_level(self.select.is_set_high())
    }

    /// Release the SPI master and select pin
    pub fn free(self) -> (S, P) {
        (self.spi, self.select)
    }
}
