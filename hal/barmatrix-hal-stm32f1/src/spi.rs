//! SPI1 as a transmit-only master
//!
//! embassy-stm32 routes SCK/MOSI and enables the clock; the link
//! settings are then written straight into CR1 so the prescaler is
//! exactly the one requested instead of the nearest frequency match.

use barmatrix_hal::spi::{BitOrder, Phase, Polarity, SpiConfig};
use barmatrix_hal::SerialTransceiver;
use embassy_stm32::mode::Blocking;
use embassy_stm32::pac;
use embassy_stm32::pac::spi::vals::{Br, Cpha, Cpol, Lsbfirst};
use embassy_stm32::peripherals::SPI1;
use embassy_stm32::spi::{self, MosiPin, SckPin, Spi};
use embassy_stm32::Peri;

/// Transmit-only SPI master
pub struct SpiMaster<'d> {
    _spi: Spi<'d, Blocking>,
}

impl<'d> SpiMaster<'d> {
    /// Route the pins and apply `config`, leaving the peripheral disabled
    pub fn new(
        peri: Peri<'d, SPI1>,
        sck: Peri<'d, impl SckPin<SPI1>>,
        mosi: Peri<'d, impl MosiPin<SPI1>>,
        config: &SpiConfig,
    ) -> Self {
        let spi = Spi::new_blocking_txonly(peri, sck, mosi, spi::Config::default());

        let (polarity, phase): (Polarity, Phase) = config.mode.into();
        let regs = pac::SPI1;
        regs.cr1().modify(|w| w.set_spe(false));
        regs.cr1().modify(|w| {
            w.set_br(Br::from_bits(config.prescaler.br_bits()));
            w.set_cpol(match polarity {
                Polarity::IdleLow => Cpol::IDLE_LOW,
                Polarity::IdleHigh => Cpol::IDLE_HIGH,
            });
            w.set_cpha(match phase {
                Phase::CaptureOnFirstTransition => Cpha::FIRST_EDGE,
                Phase::CaptureOnSecondTransition => Cpha::SECOND_EDGE,
            });
            w.set_lsbfirst(match config.bit_order {
                BitOrder::MsbFirst => Lsbfirst::MSBFIRST,
                BitOrder::LsbFirst => Lsbfirst::LSBFIRST,
            });
        });

        Self { _spi: spi }
    }
}

impl SerialTransceiver for SpiMaster<'_> {
    fn enable(&mut self) {
        pac::SPI1.cr1().modify(|w| w.set_spe(true));
    }

    fn disable(&mut self) {
        pac::SPI1.cr1().modify(|w| w.set_spe(false));
    }

    fn is_tx_empty(&self) -> bool {
        pac::SPI1.sr().read().txe()
    }

    fn is_busy(&self) -> bool {
        pac::SPI1.sr().read().bsy()
    }

    fn write_byte(&mut self, byte: u8) {
        pac::SPI1.dr().write(|w| w.set_dr(byte as u16));
    }
}
