//! Pixel color codes understood by the matrix driver

/// Color of a single matrix pixel
///
/// The discriminants are the bytes sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    /// Pixel off
    #[default]
    Blank = 0x00,
    /// Green LED
    Green = 0x01,
    /// Red LED
    Red = 0x02,
    /// Red and green together
    Orange = 0x03,
}

impl Color {
    /// Every color, in code order
    pub const ALL: [Color; 4] = [Color::Blank, Color::Green, Color::Red, Color::Orange];

    /// Wire code for this color
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Check if the pixel is lit
    pub fn is_lit(self) -> bool {
        self != Color::Blank
    }
}

impl TryFrom<u8> for Color {
    type Error = u8;

    /// Parse a wire code, returning the offending byte if unknown
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Color::Blank),
            0x01 => Ok(Color::Green),
            0x02 => Ok(Color::Red),
            0x03 => Ok(Color::Orange),
            other => Err(other),
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> u8 {
        color.code()
    }
}
