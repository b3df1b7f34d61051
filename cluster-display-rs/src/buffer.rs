//! Flat pixel storage with a fixed capacity and a movable active region.
//!
//! [`PixelBuffer`] is allocated once at the panel's maximum resolution.
//! All addressing goes through the *active* region, so `y * width + x`
//! always uses the active width and anything outside it is skipped.

use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb888,
    Pixel,
};

use crate::bounds::ActiveRegion;
use crate::color::Color;
use crate::error::DisplayError;

/// Software frame buffer backing one physical panel.
pub struct PixelBuffer {
    data: Vec<u32>,
    capacity: ActiveRegion,
    region: ActiveRegion,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer for a `max_width × max_height` panel.
    ///
    /// The active region starts at the full capacity.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::HardwareFault`] if the allocation fails.
    pub fn try_new(max_width: u16, max_height: u16) -> Result<Self, DisplayError> {
        let capacity = ActiveRegion::new(max_width, max_height);
        let len = capacity.pixel_count();

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| DisplayError::HardwareFault)?;
        data.resize(len, Color::ZERO.raw());

        Ok(Self {
            data,
            capacity,
            region: capacity,
        })
    }

    /// Maximum supported resolution.
    pub fn capacity(&self) -> ActiveRegion {
        self.capacity
    }

    /// Currently active resolution.
    pub fn region(&self) -> ActiveRegion {
        self.region
    }

    /// Change the active region. Pixel data is left as is.
    pub(crate) fn set_region(&mut self, region: ActiveRegion) -> Result<(), DisplayError> {
        if region.width == 0 || region.height == 0 || !region.fits_within(&self.capacity) {
            return Err(DisplayError::InvalidParameter);
        }
        self.region = region;
        Ok(())
    }

    /// Read a pixel inside the active region.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.region.index(x, y).map(|i| Color(self.data[i]))
    }

    /// Write a pixel if it lies inside the active region.
    ///
    /// Returns `false` (and writes nothing) when the pixel is clipped.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.region.index(x, y) {
            Some(i) => {
                self.data[i] = color.raw();
                true
            }
            None => false,
        }
    }

    /// Overwrite every active pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let n = self.region.pixel_count();
        self.data[..n].fill(color.raw());
    }

    /// The active pixels in row-major order.
    pub fn active_pixels(&self) -> &[u32] {
        &self.data[..self.region.pixel_count()]
    }
}

impl OriginDimensions for PixelBuffer {
    fn size(&self) -> Size {
        Size::new(u32::from(self.region.width), u32::from(self.region.height))
    }
}

impl DrawTarget for PixelBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set(x, y, color.into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[test]
    fn new_buffer_is_zeroed() {
        let buf = PixelBuffer::try_new(16, 8).unwrap();
        assert_eq!(buf.active_pixels().len(), 128);
        assert!(buf.active_pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut buf = PixelBuffer::try_new(16, 8).unwrap();
        assert!(buf.set(3, 2, Color(0xABCD)));
        assert_eq!(buf.get(3, 2), Some(Color(0xABCD)));
        assert_eq!(buf.active_pixels()[2 * 16 + 3], 0xABCD);
    }

    #[test]
    fn set_outside_region_is_clipped() {
        let mut buf = PixelBuffer::try_new(16, 8).unwrap();
        assert!(!buf.set(16, 0, Color::LINE));
        assert!(!buf.set(0, 8, Color::LINE));
        assert!(buf.active_pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn shrunk_region_uses_active_width_for_indexing() {
        let mut buf = PixelBuffer::try_new(16, 8).unwrap();
        buf.set_region(ActiveRegion::new(4, 4)).unwrap();
        assert!(buf.set(1, 1, Color::LINE));
        assert_eq!(buf.active_pixels().len(), 16);
        assert_eq!(buf.active_pixels()[5], Color::LINE.raw());
        // Capacity still covers (10, 1), but the active region does not.
        assert!(!buf.set(10, 1, Color::LINE));
        assert_eq!(buf.get(10, 1), None);
    }

    #[test]
    fn set_region_rejects_zero_and_oversize() {
        let mut buf = PixelBuffer::try_new(16, 8).unwrap();
        assert_eq!(
            buf.set_region(ActiveRegion::new(0, 4)),
            Err(DisplayError::InvalidParameter)
        );
        assert_eq!(
            buf.set_region(ActiveRegion::new(17, 4)),
            Err(DisplayError::InvalidParameter)
        );
        assert_eq!(buf.region(), ActiveRegion::new(16, 8));
    }

    #[test]
    fn fill_covers_only_the_active_region() {
        let mut buf = PixelBuffer::try_new(4, 4).unwrap();
        buf.set_region(ActiveRegion::new(2, 2)).unwrap();
        buf.fill(Color::LINE);
        assert!(buf.active_pixels().iter().all(|&p| p == Color::LINE.raw()));
        assert!(buf.data[4..].iter().all(|&p| p == 0));
    }

    #[test]
    fn embedded_graphics_drawing_is_clipped() {
        let mut buf = PixelBuffer::try_new(8, 8).unwrap();
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::RED))
            .draw(&mut buf)
            .unwrap();

        let red = Color::from_rgb(0xFF, 0, 0);
        assert_eq!(buf.get(0, 0), Some(red));
        assert_eq!(buf.get(1, 1), Some(red));
        assert_eq!(buf.get(2, 2), Some(Color::ZERO));
        let painted = buf.active_pixels().iter().filter(|&&p| p != 0).count();
        assert_eq!(painted, 4);
    }

    #[test]
    fn origin_dimensions_follow_active_region() {
        let mut buf = PixelBuffer::try_new(8, 8).unwrap();
        buf.set_region(ActiveRegion::new(5, 3)).unwrap();
        assert_eq!(buf.size(), Size::new(5, 3));
    }
}
