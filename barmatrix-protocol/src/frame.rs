//! Frame layout for the matrix link.
//!
//! Frame format:
//! - 64 bytes, no header or trailer
//! - byte `row * 8 + column` carries the color of that pixel
//! - row 0 is the bottom row of the matrix

use crate::color::Color;

/// Rows and columns of the matrix
pub const GRID_SIZE: usize = 8;

/// Bytes per frame
pub const FRAME_LEN: usize = GRID_SIZE * GRID_SIZE;

/// Pixel grid, indexed `[row][column]`
pub type Grid = [[Color; GRID_SIZE]; GRID_SIZE];

/// Errors that can occur while decoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Frame is not exactly [`FRAME_LEN`] bytes
    InvalidLength(usize),
    /// Byte at `index` is not a known color code
    InvalidColor { index: usize, code: u8 },
}

/// Wire offset of a pixel
///
/// Returns `None` if either coordinate is outside the grid.
pub fn pixel_index(row: usize, column: usize) -> Option<usize> {
    if row < GRID_SIZE && column < GRID_SIZE {
        Some(row * GRID_SIZE + column)
    } else {
        None
    }
}

/// Serialize a grid into wire order
pub fn encode(grid: &Grid) -> [u8; FRAME_LEN] {
    let mut bytes = [0u8; FRAME_LEN];
    for (row, cells) in grid.iter().enumerate() {
        for (column, color) in cells.iter().enumerate() {
            bytes[row * GRID_SIZE + column] = color.code();
        }
    }
    bytes
}

/// Parse a received burst back into a grid
pub fn decode(bytes: &[u8]) -> Result<Grid, FrameError> {
    if bytes.len() != FRAME_LEN {
        return Err(FrameError::InvalidLength(bytes.len()));
    }

    let mut grid = [[Color::Blank; GRID_SIZE]; GRID_SIZE];
    for (index, &code) in bytes.iter().enumerate() {
        let color = Color::try_from(code).map_err(|code| FrameError::InvalidColor { index, code })?;
        grid[index / GRID_SIZE][index % GRID_SIZE] = color;
    }
    Ok(grid)
}
