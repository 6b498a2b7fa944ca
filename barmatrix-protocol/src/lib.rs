//! LED Matrix Link Protocol
//!
//! This crate defines the one-way SPI link between the controller (bus
//! master) and the 8×8 LED matrix driver board. The matrix driver is a
//! fixed external device, so everything here is bit-exact.
//!
//! # Protocol Overview
//!
//! A frame is one burst of exactly 64 bytes, one per pixel, row-major:
//! ```text
//!  NSS  ‾‾‾‾\__________________________________________/‾‾‾‾
//!            │ 0.5 ms │ px(0,0) px(0,1) … px(7,7) │ 0.5 ms │
//! ```
//!
//! - Bus select (NSS) is active low and held for the whole burst
//! - Bytes are shifted MSB first at the peripheral clock ÷ 256, mode 0
//! - Each byte is a [`Color`] code; row 0 is the bottom of every bar
//!
//! There is no header, length or checksum: the select line frames the
//! burst and the receiver counts bytes.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod frame;
pub mod link;

pub use color::Color;
pub use frame::{decode, encode, pixel_index, FrameError, Grid, FRAME_LEN, GRID_SIZE};
pub use link::{BusState, BUS_HOLD_UNITS, BUS_SETUP_UNITS, DELAY_UNIT_US, LINK_CONFIG};
