//! Barmatrix Hardware Abstraction Layer
//!
//! This crate defines the capabilities the bar-graph controller consumes
//! from its board. Everything above this crate (drivers, render pipeline)
//! is written against these traits, so the same logic runs against real
//! registers on the target and against recording fakes on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  barmatrix-drivers (pipeline, drivers)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  barmatrix-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ barmatrix-hal-│       │  host fakes   │
//! │    stm32f1    │       │   (tests)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (heartbeat LED, bus select)
//! - [`spi::SerialTransceiver`] - Flag-level SPI master transmitter
//! - [`adc::AnalogSampler`] - Flag-level scanning ADC
//! - [`timer::CountdownTimer`] - One-shot countdown timer

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod spi;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use adc::AnalogSampler;
pub use gpio::{OutputPin, StatefulPin};
pub use spi::SerialTransceiver;
pub use timer::CountdownTimer;
