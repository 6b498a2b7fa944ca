//! STM32VLDISCOVERY board constants
//!
//! The 8 MHz crystal (HSE) is multiplied by 3 in the PLL to give the
//! F100's 24 MHz maximum. AHB, APB1 and APB2 run undivided, so the core,
//! TIM6 and SPI1 all see 24 MHz; the matrix link then clocks at
//! 24 MHz / 256 = 93.75 kHz.

use embassy_stm32::rcc::{
    AHBPrescaler, APBPrescaler, Hse, HseMode, Pll, PllMul, PllPreDiv, PllSource, Sysclk,
};
use embassy_stm32::time::Hertz;
use embassy_stm32::Config;

/// Crystal on the board
pub const HSE: Hertz = Hertz(8_000_000);

/// Core clock feeding SysTick
pub const SYSCLK: Hertz = Hertz(24_000_000);

/// TIM6 input clock (APB1 prescaler is 1, so no doubling)
pub const TIM6_CLOCK: Hertz = SYSCLK;

/// SPI1 input clock (APB2)
pub const SPI1_CLOCK: Hertz = SYSCLK;

/// Clock tree for `embassy_stm32::init`
pub fn clock_config() -> Config {
    let mut config = Config::default();
    config.rcc.hse = Some(Hse {
        freq: HSE,
        mode: HseMode::Oscillator,
    });
    config.rcc.pll = Some(Pll {
        src: PllSource::HSE,
        prediv: PllPreDiv::DIV1,
        mul: PllMul::MUL3,
    });
    config.rcc.sys = Sysclk::PLL1_P;
    config.rcc.ahb_pre = AHBPrescaler::DIV1;
    config.rcc.apb1_pre = APBPrescaler::DIV1;
    config.rcc.apb2_pre = APBPrescaler::DIV1;
    config
}

/// SysTick reload value for a tick rate
pub const fn systick_reload(tick_hz: u32) -> u32 {
    SYSCLK.0 / tick_hz - 1
}
