//! Placeholder block-glyph rasterizer.
//!
//! Every character renders as a solid 5×7 block whose color is chosen by the
//! low bit of its code point. There is no font table; callers that need
//! legible text should draw through `embedded-graphics` on
//! [`DisplaySession::buffer_mut()`](crate::DisplaySession::buffer_mut).

use crate::buffer::PixelBuffer;
use crate::color::Color;

/// Glyph block width in pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph block height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal cursor advance per character (block width plus 1 px gap).
pub const GLYPH_ADVANCE: u32 = 6;

/// Color of the block drawn for `c`.
pub fn glyph_color(c: char) -> Color {
    if u32::from(c) & 1 == 1 {
        Color::GLYPH_ODD
    } else {
        Color::GLYPH_EVEN
    }
}

/// Fill the glyph block for `c` with its top-left corner at `(x, y)`.
///
/// Pixels outside the active region are skipped. Returns the number of
/// pixels actually written.
pub fn rasterize(buffer: &mut PixelBuffer, x: u32, y: u32, c: char) -> usize {
    let color = glyph_color(c);
    let mut written = 0;
    for ry in 0..GLYPH_HEIGHT {
        for rx in 0..GLYPH_WIDTH {
            if buffer.set(x + rx, y + ry, color) {
                written += 1;
            }
        }
    }
    written
}
