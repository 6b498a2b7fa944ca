//! STM32F1-specific HAL for the Barmatrix firmware
//!
//! Implements the `barmatrix-hal` capabilities on an STM32F100RB
//! (STM32VLDISCOVERY board):
//!
//! - `ScanAdc` - ADC1 stepping through eight regular inputs
//! - `SpiMaster` - SPI1 as a transmit-only master
//! - `SleepTimer` - TIM6 in one-pulse mode
//!
//! GPIO outputs come straight from `embassy-stm32` through
//! [`barmatrix_hal::StatefulPin`].
//!
//! embassy-stm32 enables peripheral clocks and routes pins; the flag-level
//! work (start, poll, clear) goes through its register layer so every
//! wait stays an explicit busy-poll.

#![no_std]

pub mod adc;
pub mod pins;
pub mod spi;
pub mod timer;

pub use adc::ScanAdc;
pub use spi::SpiMaster;
pub use timer::SleepTimer;

// Re-export the traits implemented here
pub use barmatrix_hal::{AnalogSampler, CountdownTimer, SerialTransceiver};
