//! Packed 32-bit pixel color and the fixed engine palette.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// A pixel value as stored in the frame buffer (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u32);

impl Color {
    /// Cleared pixel.
    pub const ZERO: Self = Self(0x0000_0000);
    /// Horizontal and vertical line primitives.
    pub const LINE: Self = Self(0x00FF_FFFF);
    /// Filled part of a progress bar.
    pub const PROGRESS_FILLED: Self = Self(0x00FF_00FF);
    /// Unfilled track of a progress bar.
    pub const PROGRESS_TRACK: Self = Self(0x00CC_CCCC);
    /// Glyph block for characters with an odd code point.
    pub const GLYPH_ODD: Self = Self(0xFFFF_FFFF);
    /// Glyph block for characters with an even code point.
    pub const GLYPH_EVEN: Self = Self(0xFF00_0000);

    /// Pack 8-bit channels into `0x00RRGGBB`.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Raw packed value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Color {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Rgb888> for Color {
    fn from(c: Rgb888) -> Self {
        Self::from_rgb(c.r(), c.g(), c.b())
    }
}

impl From<Color> for Rgb888 {
    /// Drops the top byte.
    fn from(c: Color) -> Self {
        Rgb888::new((c.0 >> 16) as u8, (c.0 >> 8) as u8, c.0 as u8)
    }
}
