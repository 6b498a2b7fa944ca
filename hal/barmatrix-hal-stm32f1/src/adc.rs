//! ADC1 as an eight-input stepping scanner
//!
//! The regular sequence holds the eight board inputs in order. Scan mode
//! with discontinuous groups of one means each start converts exactly
//! the next input, wrapping after the eighth.

use barmatrix_hal::AnalogSampler;
use embassy_stm32::pac;
use embassy_stm32::pac::adc::vals::SampleTime;
use embassy_stm32::pac::gpio::vals::{CnfIn, Mode};
use embassy_stm32::peripherals::ADC1;
use embassy_stm32::{rcc, Peri};

use crate::pins::{Port, ANALOG_INPUTS};

/// ADC clock cycles to wait after power-up before calibrating
const POWER_UP_CYCLES: u32 = 1_000;

/// Scanning ADC driver
pub struct ScanAdc<'d> {
    _adc: Peri<'d, ADC1>,
}

impl<'d> ScanAdc<'d> {
    /// Power up, calibrate and load the scan sequence
    ///
    /// Also switches every input pad to analog mode.
    pub fn new(adc: Peri<'d, ADC1>) -> Self {
        rcc::enable_and_reset::<ADC1>();

        for input in &ANALOG_INPUTS {
            let port = match input.port {
                Port::A => pac::GPIOA,
                Port::B => pac::GPIOB,
                Port::C => pac::GPIOC,
            };
            let n = input.pin as usize;
            port.cr(n / 8).modify(|w| {
                w.set_mode(n % 8, Mode::INPUT);
                w.set_cnf_in(n % 8, CnfIn::ANALOG);
            });
        }

        let regs = pac::ADC1;
        regs.cr2().modify(|w| w.set_adon(true));
        cortex_m::asm::delay(POWER_UP_CYCLES);

        regs.cr2().modify(|w| w.set_rstcal(true));
        while regs.cr2().read().rstcal() {}
        regs.cr2().modify(|w| w.set_cal(true));
        while regs.cr2().read().cal() {}

        regs.cr1().modify(|w| {
            w.set_scan(true);
            w.set_discen(true);
            w.set_discnum(0);
        });

        for (slot, input) in ANALOG_INPUTS.iter().enumerate() {
            let ch = input.adc_channel as usize;
            if ch < 10 {
                regs.smpr2().modify(|w| w.set_smp(ch, SampleTime::CYCLES1_5));
            } else {
                regs.smpr1().modify(|w| w.set_smp(ch - 10, SampleTime::CYCLES1_5));
            }
            match slot {
                0..=5 => regs.sqr3().modify(|w| w.set_sq(slot, input.adc_channel)),
                _ => regs.sqr2().modify(|w| w.set_sq(slot - 6, input.adc_channel)),
            }
        }
        regs.sqr1().modify(|w| w.set_l((ANALOG_INPUTS.len() - 1) as u8));

        Self { _adc: adc }
    }
}

impl AnalogSampler for ScanAdc<'_> {
    fn start(&mut self) {
        // rewriting ADON while set starts a conversion
        pac::ADC1.cr2().modify(|w| w.set_adon(true));
    }

    fn is_conversion_complete(&self) -> bool {
        pac::ADC1.sr().read().eoc()
    }

    fn read(&mut self) -> u16 {
        pac::ADC1.dr().read().data()
    }

    fn clear_conversion_complete(&mut self) {
        pac::ADC1.sr().modify(|w| w.set_eoc(false));
    }

    fn clear_scan_started(&mut self) {
        pac::ADC1.sr().modify(|w| w.set_strt(false));
    }

    fn restart_scan(&mut self) {
        let regs = pac::ADC1;
        // powering down aborts the conversion and resets the sequencer
        regs.cr2().modify(|w| w.set_adon(false));
        regs.sqr1().modify(|w| w.set_l((ANALOG_INPUTS.len() - 1) as u8));
        regs.sr().modify(|w| {
            w.set_eoc(false);
            w.set_strt(false);
        });
        regs.cr2().modify(|w| w.set_adon(true));
        cortex_m::asm::delay(POWER_UP_CYCLES);
    }
}
