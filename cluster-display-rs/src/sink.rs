//! Hardware boundary of the display engine.
//!
//! A [`HardwareSink`] stands in for the physical transport (SPI, parallel
//! RGB, ...) below the frame buffer. The session calls
//! [`hw_init()`](HardwareSink::hw_init) and
//! [`hw_deinit()`](HardwareSink::hw_deinit) exactly once per lifecycle
//! transition and hands every flushed frame to
//! [`present()`](HardwareSink::present).

/// Failure reported by a [`HardwareSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// The device rejected the request or the bus failed.
    Fault,
    /// The device did not answer in time.
    Timeout,
}

/// Read-only view of the active frame handed to the sink on flush.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    /// Active pixels in row-major order (`width * height` entries).
    pub pixels: &'a [u32],
    /// Active width in pixels.
    pub width: u16,
    /// Active height in pixels.
    pub height: u16,
}

impl<'a> Frame<'a> {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u16, y: u16) -> Option<u32> {
        if x < self.width && y < self.height {
            self.pixels
                .get(usize::from(y) * usize::from(self.width) + usize::from(x))
                .copied()
        } else {
            None
        }
    }

    /// The first four pixels of the frame, zero-padded for tiny panels.
    pub fn top_left(&self) -> [u32; 4] {
        let mut out = [0u32; 4];
        for (dst, src) in out.iter_mut().zip(self.pixels.iter()) {
            *dst = *src;
        }
        out
    }
}

/// Physical display transfer capability injected into a
/// [`DisplaySession`](crate::DisplaySession).
pub trait HardwareSink {
    /// Bring up the panel and its transport.
    fn hw_init(&mut self) -> Result<(), SinkError>;

    /// Shut down the panel and its transport.
    fn hw_deinit(&mut self) -> Result<(), SinkError>;

    /// Receive a committed frame. Must not assume the slice outlives the call.
    fn present(&mut self, _frame: Frame<'_>) {}
}

/// Sink that accepts every request and discards frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl HardwareSink for NullSink {
    fn hw_init(&mut self) -> Result<(), SinkError> {
        Ok(())
    }

    fn hw_deinit(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<T: HardwareSink + ?Sized> HardwareSink for &mut T {
    fn hw_init(&mut self) -> Result<(), SinkError> {
        (**self).hw_init()
    }

    fn hw_deinit(&mut self) -> Result<(), SinkError> {
        (**self).hw_deinit()
    }

    fn present(&mut self, frame: Frame<'_>) {
        (**self).present(frame)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_pixel_is_bounds_checked() {
        let pixels = [1, 2, 3, 4, 5, 6];
        let frame = Frame { pixels: &pixels, width: 3, height: 2 };
        assert_eq!(frame.pixel(0, 0), Some(1));
        assert_eq!(frame.pixel(2, 1), Some(6));
        assert_eq!(frame.pixel(3, 0), None);
        assert_eq!(frame.pixel(0, 2), None);
    }

    #[test]
    fn top_left_pads_short_frames() {
        let pixels = [7, 8];
        let frame = Frame { pixels: &pixels, width: 2, height: 1 };
        assert_eq!(frame.top_left(), [7, 8, 0, 0]);
    }

    #[test]
    fn null_sink_always_succeeds() {
        let mut sink = NullSink;
        assert_eq!(sink.hw_init(), Ok(()));
        assert_eq!(sink.hw_deinit(), Ok(()));
    }

    #[test]
    fn mutable_reference_forwards_calls() {
        fn drive<S: HardwareSink>(mut sink: S) {
            sink.hw_init().unwrap();
            sink.present(Frame { pixels: &[9], width: 1, height: 1 });
        }

        let mut inner = recording::RecordingSink::default();
        drive(&mut inner);
        assert_eq!(inner.init_calls, 1);
        assert_eq!(inner.presents, 1);
        assert_eq!(inner.last_top_left, [9, 0, 0, 0]);
    }
}
