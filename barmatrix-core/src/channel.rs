//! Channels and threshold classification
//!
//! A channel turns one analog input into a bar height. Its threshold table
//! holds the upper bound of each bar step: a sample at or below `T[i]`
//! lights `i` rows, a sample above every threshold lights all eight.

use barmatrix_protocol::GRID_SIZE;

use crate::config::{ChannelConfig, ConfigError};

/// Number of channels (analog inputs) the controller scans
pub const NUM_CHANNELS: usize = 8;

/// Thresholds per channel; one per matrix row
pub const LEVELS_PER_CHANNEL: usize = GRID_SIZE;

/// Matrix column a channel is drawn in (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Column(u8);

impl Column {
    /// Validate a column number
    pub const fn new(column: u8) -> Option<Self> {
        if (column as usize) < GRID_SIZE {
            Some(Self(column))
        } else {
            None
        }
    }

    /// Column number
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Column number as an index
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bar height: number of lit rows (0-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Level(u8);

impl Level {
    /// Empty bar
    pub const EMPTY: Self = Self(0);

    /// Full bar
    pub const FULL: Self = Self(LEVELS_PER_CHANNEL as u8);

    /// Validate a bar height
    pub const fn new(level: u8) -> Option<Self> {
        if level as usize <= LEVELS_PER_CHANNEL {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Number of lit rows
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of lit rows as a count
    pub const fn rows(self) -> usize {
        self.0 as usize
    }
}

/// Non-decreasing threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds([u16; LEVELS_PER_CHANNEL]);

impl Thresholds {
    /// All-zero table (the reset state)
    pub const ZERO: Self = Self([0; LEVELS_PER_CHANNEL]);

    /// Validate a threshold table
    ///
    /// Equal neighbours are allowed; a step down is not.
    pub fn new(levels: [u16; LEVELS_PER_CHANNEL]) -> Result<Self, ConfigError> {
        for index in 1..LEVELS_PER_CHANNEL {
            if levels[index] < levels[index - 1] {
                return Err(ConfigError::DecreasingThreshold { index: index as u8 });
            }
        }
        Ok(Self(levels))
    }

    /// Raw threshold values
    pub fn as_array(&self) -> &[u16; LEVELS_PER_CHANNEL] {
        &self.0
    }

    /// Classify a sample into a bar height
    ///
    /// First threshold at or above the sample; ties land on that index.
    pub fn classify(&self, sample: u16) -> Level {
        let index = self
            .0
            .iter()
            .position(|&threshold| threshold >= sample)
            .unwrap_or(LEVELS_PER_CHANNEL);
        Level(index as u8)
    }
}

/// One analog input and how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    thresholds: Thresholds,
    level: Level,
    /// `None` until configured; such channels are not drawn
    column: Option<Column>,
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}

impl Channel {
    /// Create an unconfigured channel
    pub const fn new() -> Self {
        Self {
            thresholds: Thresholds::ZERO,
            level: Level::EMPTY,
            column: None,
        }
    }

    /// Configure the channel
    ///
    /// On success the bar restarts empty. On error nothing changes, so a
    /// caller that ignores the result gets silent rejection.
    pub fn configure(
        &mut self,
        column: u8,
        levels: [u16; LEVELS_PER_CHANNEL],
    ) -> Result<(), ConfigError> {
        let column = Column::new(column).ok_or(ConfigError::ColumnOutOfRange(column))?;
        let thresholds = Thresholds::new(levels)?;

        self.thresholds = thresholds;
        self.column = Some(column);
        self.level = Level::EMPTY;
        Ok(())
    }

    /// Configure the channel from a config entry
    pub fn apply(&mut self, config: &ChannelConfig) -> Result<(), ConfigError> {
        self.configure(config.column, config.levels)
    }

    /// Return to the unconfigured state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Check if the channel has a display column
    pub fn is_configured(&self) -> bool {
        self.column.is_some()
    }

    /// Classify a new sample into this channel's level
    ///
    /// Unconfigured channels are left untouched and return `None`.
    pub fn update(&mut self, sample: u16) -> Option<Level> {
        self.column?;
        self.level = self.thresholds.classify(sample);
        Some(self.level)
    }

    /// Current bar height
    pub fn level(&self) -> Level {
        self.level
    }

    /// Display column, if configured
    pub fn column(&self) -> Option<Column> {
        self.column
    }

    /// Threshold table
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }
}
