//! Active-region bounds checking and buffer index math.
//!
//! Coordinates are taken as `u32` so that `origin + offset` computed from
//! 16-bit drawing arguments can never wrap back onto the panel.

/// The currently configured drawing area, `width × height` pixels starting
/// at the top-left corner of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActiveRegion {
    /// Active width in pixels.
    pub width: u16,
    /// Active height in pixels.
    pub height: u16,
}

impl ActiveRegion {
    /// Create a region of the given size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Returns `true` iff `x < width && y < height`.
    #[inline]
    pub fn is_valid(&self, x: u32, y: u32) -> bool {
        x < u32::from(self.width) && y < u32::from(self.height)
    }

    /// Flat buffer index `y * width + x`, or `None` outside the region.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> Option<usize> {
        if self.is_valid(x, y) {
            Some(y as usize * usize::from(self.width) + x as usize)
        } else {
            None
        }
    }

    /// Number of pixels in the region.
    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns `true` if this region fits inside `capacity`.
    pub fn fits_within(&self, capacity: &ActiveRegion) -> bool {
        self.width <= capacity.width && self.height <= capacity.height
    }
}
