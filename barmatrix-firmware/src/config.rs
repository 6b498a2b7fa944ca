//! Channel table compiled in from channels.toml
//!
//! Validated by the build script, so applying it cannot fail unless the
//! core rules change underneath it.

use barmatrix_core::{ChannelConfig, ControllerConfig};

include!(concat!(env!("OUT_DIR"), "/channels.rs"));

/// The compiled-in table as a controller configuration
pub fn controller_config() -> ControllerConfig {
    let mut config = ControllerConfig {
        tick_hz: TICK_HZ,
        ..ControllerConfig::default()
    };
    for entry in CHANNELS {
        // at most eight entries: a longer table fails to deserialize in build.rs
        if config.channels.push(entry).is_err() {
            break;
        }
    }
    config
}
