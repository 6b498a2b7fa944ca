//! Board-agnostic core logic for the bar-graph controller
//!
//! This crate contains all application logic that does not touch
//! hardware:
//!
//! - Channels and threshold classification
//! - Frame rendering with row banding
//! - Render scheduling state (tick flag)
//! - Configuration types and validation
//! - The render context shared by the pipeline stages

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod channel;
pub mod config;
pub mod context;
pub mod render;
pub mod state;

pub use channel::{Channel, Column, Level, Thresholds, LEVELS_PER_CHANNEL, NUM_CHANNELS};
pub use config::{ChannelConfig, ConfigError, ControllerConfig};
pub use context::RenderContext;
pub use render::{Band, FrameBuffer};
pub use state::{RenderEvent, RenderState, TickFlag, TickOutcome};
