//! Frame rendering
//!
//! Every cycle the frame is cleared and every configured channel is drawn
//! as a bar rising from row 0. Nothing carries over between cycles.

use barmatrix_protocol::{encode, Color, Grid, FRAME_LEN, GRID_SIZE};

use crate::channel::Channel;

/// First row of the mid band
const MID_BAND_START: usize = 3;

/// First row of the high band
const HIGH_BAND_START: usize = 6;

/// Color band of a bar row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// Rows 0-2
    Low,
    /// Rows 3-5
    Mid,
    /// Rows 6-7
    High,
}

impl Band {
    /// Band of a row
    pub fn for_row(row: usize) -> Self {
        if row >= HIGH_BAND_START {
            Band::High
        } else if row >= MID_BAND_START {
            Band::Mid
        } else {
            Band::Low
        }
    }

    /// Pixel color the matrix driver expects for this band
    ///
    /// Bars start red at the bottom, turn orange, and finish green.
    pub const fn color(self) -> Color {
        match self {
            Band::Low => Color::Red,
            Band::Mid => Color::Orange,
            Band::High => Color::Green,
        }
    }

    /// Band a lit pixel belongs to
    pub fn from_color(color: Color) -> Option<Self> {
        match color {
            Color::Red => Some(Band::Low),
            Color::Orange => Some(Band::Mid),
            Color::Green => Some(Band::High),
            Color::Blank => None,
        }
    }
}

/// 8×8 frame, indexed `[row][column]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    grid: Grid,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            grid: [[Color::Blank; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Blank every pixel
    pub fn clear(&mut self) {
        self.grid = [[Color::Blank; GRID_SIZE]; GRID_SIZE];
    }

    /// Draw one channel's bar over the current contents
    ///
    /// Unconfigured channels draw nothing.
    pub fn draw_channel(&mut self, channel: &Channel) {
        let Some(column) = channel.column() else {
            return;
        };
        for row in 0..channel.level().rows() {
            self.grid[row][column.index()] = Band::for_row(row).color();
        }
    }

    /// Clear and redraw from a set of channels
    ///
    /// Channels are drawn in order, so a later channel on the same column
    /// overwrites an earlier one.
    pub fn render<'a, I>(&mut self, channels: I)
    where
        I: IntoIterator<Item = &'a Channel>,
    {
        self.clear();
        for channel in channels {
            self.draw_channel(channel);
        }
    }

    /// Pixel color, if the coordinates are on the grid
    pub fn get(&self, row: usize, column: usize) -> Option<Color> {
        self.grid.get(row)?.get(column).copied()
    }

    /// One column, bottom row first
    pub fn column(&self, column: usize) -> [Color; GRID_SIZE] {
        let mut cells = [Color::Blank; GRID_SIZE];
        if column < GRID_SIZE {
            for (row, cell) in cells.iter_mut().enumerate() {
                *cell = self.grid[row][column];
            }
        }
        cells
    }

    /// Underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Frame in wire order
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        encode(&self.grid)
    }

    /// Check if nothing is lit
    pub fn is_blank(&self) -> bool {
        self.grid.iter().flatten().all(|c| !c.is_lit())
    }
}
