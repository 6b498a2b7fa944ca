//! Configuration type definitions
//!
//! These types describe which inputs are shown, where, and at what
//! thresholds. Channels are configured once before the tick starts.

use heapless::Vec;

use crate::channel::{Column, Thresholds, LEVELS_PER_CHANNEL, NUM_CHANNELS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default tick rate in Hz (one render cycle per tick at most)
pub const DEFAULT_TICK_HZ: u16 = 60;

/// Configuration errors
///
/// A rejected configuration never changes controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Threshold at `index` is lower than the one before it
    DecreasingThreshold { index: u8 },
    /// Display column is not on the matrix
    ColumnOutOfRange(u8),
    /// Input number has no corresponding channel
    InputOutOfRange(u8),
    /// Same input configured twice
    DuplicateInput(u8),
    /// Tick rate must be non-zero
    ZeroTickRate,
}

/// Configuration of a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelConfig {
    /// Analog input (position in the scan sequence, 0-7)
    pub input: u8,
    /// Matrix column the bar is drawn in (0-7)
    pub column: u8,
    /// Upper bound of each bar step, non-decreasing
    pub levels: [u16; LEVELS_PER_CHANNEL],
}

impl ChannelConfig {
    /// Check this entry on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input as usize >= NUM_CHANNELS {
            return Err(ConfigError::InputOutOfRange(self.input));
        }
        Column::new(self.column).ok_or(ConfigError::ColumnOutOfRange(self.column))?;
        Thresholds::new(self.levels)?;
        Ok(())
    }
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Tick rate in Hz
    pub tick_hz: u16,
    /// Configured channels; inputs not listed stay dark
    pub channels: Vec<ChannelConfig, NUM_CHANNELS>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            channels: Vec::new(),
        }
    }
}

impl ControllerConfig {
    /// Validate the whole configuration
    ///
    /// Two channels sharing a column is allowed: the later one is drawn
    /// over the earlier one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        let mut seen = [false; NUM_CHANNELS];
        for channel in &self.channels {
            channel.validate()?;
            let slot = &mut seen[channel.input as usize];
            if *slot {
                return Err(ConfigError::DuplicateInput(channel.input));
            }
            *slot = true;
        }
        Ok(())
    }

    /// Find the entry for an input
    pub fn find_channel(&self, input: u8) -> Option<&ChannelConfig> {
        self.channels.iter().find(|c| c.input == input)
    }
}
