//! TIM6 as a one-pulse countdown
//!
//! The prescaler is fixed at construction so one count is one delay unit
//! (0.1 ms). One-pulse mode stops the counter at the reload value, which
//! also raises the update flag the delay driver polls.

use barmatrix_hal::CountdownTimer;
use embassy_stm32::pac;
use embassy_stm32::peripherals::TIM6;
use embassy_stm32::time::Hertz;
use embassy_stm32::{rcc, Peri};

/// Count rate: one tick per 0.1 ms
pub const TICK_HZ: u32 = 10_000;

/// Prescaler register value for a given timer input clock
pub const fn prescaler_for(timer_clock: Hertz) -> u16 {
    let div = timer_clock.0 / TICK_HZ;
    if div == 0 {
        0
    } else if div > 1 << 16 {
        u16::MAX
    } else {
        (div - 1) as u16
    }
}

/// Basic timer used for busy-wait delays
pub struct SleepTimer<'d> {
    _tim: Peri<'d, TIM6>,
}

impl<'d> SleepTimer<'d> {
    /// Enable TIM6 in one-pulse mode counting at [`TICK_HZ`]
    pub fn new(tim: Peri<'d, TIM6>, timer_clock: Hertz) -> Self {
        rcc::enable_and_reset::<TIM6>();

        let regs = pac::TIM6;
        regs.cr1().modify(|w| {
            w.set_cen(false);
            w.set_opm(true);
            w.set_urs(pac::timer::vals::Urs::COUNTER_ONLY);
        });
        regs.psc().write_value(prescaler_for(timer_clock));
        // load the prescaler now rather than at the first overflow
        regs.egr().write(|w| w.set_ug(true));
        regs.sr().modify(|w| w.set_uif(false));

        Self { _tim: tim }
    }
}

impl CountdownTimer for SleepTimer<'_> {
    fn set_reload(&mut self, ticks: u16) {
        pac::TIM6.arr().modify(|w| w.set_arr(ticks));
    }

    fn start(&mut self) {
        pac::TIM6.cr1().modify(|w| w.set_cen(true));
    }

    fn stop(&mut self) {
        pac::TIM6.cr1().modify(|w| w.set_cen(false));
    }

    fn is_elapsed(&self) -> bool {
        pac::TIM6.sr().read().uif()
    }

    fn clear_elapsed(&mut self) {
        pac::TIM6.sr().modify(|w| w.set_uif(false));
    }
}
