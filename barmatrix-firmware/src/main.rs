//! Barmatrix - Analog Bar-Graph Controller Firmware
//!
//! Samples eight analog inputs on an STM32VLDISCOVERY and shows each one
//! as a vertical bar on an external 8x8 LED matrix driven over SPI.
//!
//! SysTick toggles the blue LED and schedules a render cycle; the main
//! loop runs each due cycle (sample, classify, render, transmit) to
//! completion.

#![no_std]
#![no_main]

use barmatrix_core::ControllerConfig;
use barmatrix_drivers::{Controller, Heartbeat, TickHandler};
use barmatrix_hal::StatefulPin;
use barmatrix_hal_stm32f1::{ScanAdc, SleepTimer, SpiMaster};
use barmatrix_protocol::LINK_CONFIG;
use cortex_m_rt::entry;
use defmt::*;
use embassy_stm32::gpio::{Level, Output, Speed};
use {defmt_rtt as _, panic_probe as _};

mod board;
mod config;
mod tick;

#[entry]
fn main() -> ! {
    info!("Barmatrix firmware starting...");

    let p = embassy_stm32::init(board::clock_config());
    let Some(core) = cortex_m::Peripherals::take() else {
        defmt::panic!("core peripherals already taken");
    };
    info!("Peripherals initialized");

    // The green LED is unused; hold it off
    let _status = Output::new(p.PC9, Level::Low, Speed::Low);
    let heartbeat = Heartbeat::new(StatefulPin(Output::new(p.PC8, Level::Low, Speed::Low)));

    // Matrix select is driven by hand, released (high) until the first frame
    let select = StatefulPin(Output::new(p.PA4, Level::High, Speed::VeryHigh));
    let spi = SpiMaster::new(p.SPI1, p.PA5, p.PA7, &LINK_CONFIG);
    info!(
        "SPI1 up at {} Hz",
        LINK_CONFIG.bit_rate(board::SPI1_CLOCK.0)
    );

    let timer = SleepTimer::new(p.TIM6, board::TIM6_CLOCK);
    let adc = ScanAdc::new(p.ADC1);
    info!("ADC calibrated, scanning 8 inputs");

    let config = config::controller_config();
    let mut controller = Controller::new(adc, spi, select, timer);
    match controller.apply_config(&config) {
        Ok(()) => {
            for entry in &config.channels {
                info!("Input {} -> column {}", entry.input, entry.column);
            }
        }
        Err(e) => warn!("Channel table rejected, all inputs dark: {}", e),
    }
    report_unused_inputs(&config);

    tick::start(
        TickHandler::new(heartbeat, &tick::TICK),
        core.SYST,
        config.tick_hz as u32,
    );
    info!("Tick running at {} Hz", config.tick_hz);

    controller.run(&tick::TICK)
}

/// Log inputs the channel table leaves dark
fn report_unused_inputs(config: &ControllerConfig) {
    for input in 0..barmatrix_core::NUM_CHANNELS as u8 {
        if config.find_channel(input).is_none() {
            trace!("Input {} not configured", input);
        }
    }
}
