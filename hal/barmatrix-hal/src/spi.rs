//! SPI transmitter abstractions
//!
//! The matrix link is driven at the flag level: the caller polls the
//! transmit-buffer-empty and busy flags itself, so the framing sequence
//! (and every wait in it) stays visible in the driver instead of being
//! hidden inside a bulk `write`.

/// Master-mode serial transmitter
///
/// Implementations map these calls one-to-one onto the peripheral's
/// enable bit, status flags and data register. None of them block.
pub trait SerialTransceiver {
    /// Enable the peripheral in master mode (and its slave-select output)
    fn enable(&mut self);

    /// Disable the peripheral
    fn disable(&mut self);

    /// Transmit buffer empty: a new byte may be written
    fn is_tx_empty(&self) -> bool;

    /// Shift register still clocking bits out
    fn is_busy(&self) -> bool;

    /// Write one byte to the data register
    ///
    /// Only valid while [`is_tx_empty`](Self::is_tx_empty) reports true.
    fn write_byte(&mut self, byte: u8);
}

/// SPI link configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Bit clock divider applied to the peripheral clock
    pub prescaler: BaudPrescaler,
    /// Clock polarity and phase
    pub mode: Mode,
    /// Order in which the bits of each byte are shifted out
    pub bit_order: BitOrder,
}

impl SpiConfig {
    /// Bit clock in Hz for a given peripheral clock
    pub const fn bit_rate(&self, pclk_hz: u32) -> u32 {
        pclk_hz / self.prescaler.divisor()
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            prescaler: BaudPrescaler::Div8,
            mode: Mode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

/// Baud rate prescaler (peripheral clock divider)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BaudPrescaler {
    Div2,
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
    Div256,
}

impl BaudPrescaler {
    /// Divisor applied to the peripheral clock
    pub const fn divisor(self) -> u32 {
        match self {
            BaudPrescaler::Div2 => 2,
            BaudPrescaler::Div4 => 4,
            BaudPrescaler::Div8 => 8,
            BaudPrescaler::Div16 => 16,
            BaudPrescaler::Div32 => 32,
            BaudPrescaler::Div64 => 64,
            BaudPrescaler::Div128 => 128,
            BaudPrescaler::Div256 => 256,
        }
    }

    /// Value of the 3-bit `BR` field in the control register
    pub const fn br_bits(self) -> u8 {
        match self {
            BaudPrescaler::Div2 => 0b000,
            BaudPrescaler::Div4 => 0b001,
            BaudPrescaler::Div8 => 0b010,
            BaudPrescaler::Div16 => 0b011,
            BaudPrescaler::Div32 => 0b100,
            BaudPrescaler::Div64 => 0b101,
            BaudPrescaler::Div128 => 0b110,
            BaudPrescaler::Div256 => 0b111,
        }
    }
}

/// Bit order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}
