//! Blocking drivers and the render pipeline
//!
//! This crate drives the capabilities defined in `barmatrix-hal`:
//!
//! - Busy-wait delay on a countdown timer
//! - Eight-input analog scan
//! - Matrix frame transmitter (bus select, SPI burst)
//! - Heartbeat output and tick handling
//! - The controller that chains them into a render cycle
//!
//! Every wait is a busy-poll on a hardware flag. None of them time out
//! by default; a peripheral that never raises its flag stalls the loop.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod controller;
pub mod delay;
pub mod heartbeat;
pub mod sampler;
pub mod transmitter;

#[cfg(test)]
mod mock;

pub use controller::Controller;
pub use delay::Delay;
pub use heartbeat::{Heartbeat, TickHandler};
pub use sampler::{SampleError, Sampler};
pub use transmitter::Transmitter;
