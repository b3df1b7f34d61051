//! Display session: lifecycle state machine and drawing primitives.
//!
//! [`DisplaySession`] owns the frame buffer for one panel and gates every
//! drawing call on the session being ready.
//!
//! # Lifecycle
//!
//! 1. [`DisplaySession::new()`]: constructs the session without touching
//!    the hardware sink.
//! 2. [`DisplaySession::init()`]: allocates the buffer, brings up the sink
//!    and clears the panel.
//! 3. Draw with the primitives below. Region primitives flush on their own;
//!    [`draw_pixel()`](DisplaySession::draw_pixel) does not.
//! 4. [`DisplaySession::deinit()`]: shuts the sink down and frees the
//!    buffer. `init()` may be called again afterwards.
//!
//! # Clipping
//!
//! A single-pixel write outside the active region is rejected with
//! [`DisplayError::InvalidParameter`]. Lines, rectangles, text and blits
//! silently skip the pixels that fall outside and draw what fits.
//!
//! # Concurrency
//!
//! Every mutating call takes `&mut self`. Hosts that share a session
//! between tasks must put the whole session behind one mutex, so drawing
//! can never overlap `deinit()`.

use core::fmt::Write;

use heapless::String;

use crate::bounds::ActiveRegion;
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::config::DisplayConfig;
use crate::error::{diag, DisplayError};
use crate::glyph::{self, GLYPH_ADVANCE};
use crate::sink::{Frame, HardwareSink};

/// Software display controller for one panel.
///
/// # Example
///
/// ```
/// use cluster_display_rs::{DisplayConfig, DisplaySession, NullSink};
///
/// let mut display = DisplaySession::new(NullSink, DisplayConfig::default());
/// display.init().unwrap();
/// display.draw_text(10, 10, "READY").unwrap();
/// display.draw_rectangle_fill(10, 30, 200, 20, 75).unwrap();
/// display.deinit().unwrap();
/// ```
pub struct DisplaySession<S> {
    sink: S,
    config: DisplayConfig,
    /// `Some` exactly while the session is ready.
    buffer: Option<PixelBuffer>,
    brightness: u8,
    /// Last diagnostic code, see [`diag`].
    error_code: u32,
}

impl<S> DisplaySession<S>
where
    S: HardwareSink,
{
    /// Construct an uninitialised session.
    ///
    /// No sink traffic is generated and no buffer is allocated. You **must**
    /// call [`init()`](Self::init) before drawing.
    pub fn new(sink: S, config: DisplayConfig) -> Self {
        Self {
            sink,
            config,
            buffer: None,
            brightness: 0,
            error_code: diag::NONE,
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Bring the session to the ready state.
    ///
    /// Allocates a zeroed buffer at the configured maximum resolution,
    /// calls [`HardwareSink::hw_init()`], resets brightness to the
    /// configured default and clears the panel (one flush).
    ///
    /// Calling `init()` on a ready session is a no-op.
    ///
    /// # Errors
    ///
    /// * [`DisplayError::InvalidParameter`]: the config has a zero-sized
    ///   panel or a default brightness above 100. The sink is not called.
    /// * [`DisplayError::HardwareFault`]: allocation failed (diagnostic
    ///   `0x02`) or the sink failed to initialise (diagnostic `0x03`).
    /// * [`DisplayError::Timeout`]: the sink timed out (diagnostic `0x03`).
    ///
    /// On error the session stays uninitialised and holds no buffer.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        if self.buffer.is_some() {
            return Ok(());
        }
        if !self.config.is_valid() {
            return Err(DisplayError::InvalidParameter);
        }

        let buffer = match PixelBuffer::try_new(self.config.max_width, self.config.max_height) {
            Ok(buffer) => buffer,
            Err(e) => {
                self.error_code = diag::ALLOC_FAILED;
                #[cfg(feature = "defmt")]
                defmt::error!("display buffer allocation failed");
                return Err(e);
            }
        };

        if let Err(e) = self.sink.hw_init() {
            // The freshly allocated buffer is dropped here.
            self.error_code = diag::HW_INIT_FAILED;
            #[cfg(feature = "defmt")]
            defmt::error!("display hw init failed: {}", e);
            return Err(e.into());
        }

        self.brightness = self.config.default_brightness;
        self.buffer = Some(buffer);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "display ready: {}x{}",
            self.config.max_width,
            self.config.max_height
        );

        self.clear()
    }

    /// Return the session to the uninitialised state.
    ///
    /// Calls [`HardwareSink::hw_deinit()`] and frees the buffer. Calling
    /// `deinit()` on an uninitialised session is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::HardwareFault`] or [`DisplayError::Timeout`]
    /// if the sink fails to shut down. The session then stays ready and
    /// keeps its buffer contents.
    pub fn deinit(&mut self) -> Result<(), DisplayError> {
        if self.buffer.is_none() {
            return Ok(());
        }

        if let Err(e) = self.sink.hw_deinit() {
            self.error_code = diag::HW_DEINIT_FAILED;
            #[cfg(feature = "defmt")]
            defmt::error!("display hw deinit failed: {}", e);
            return Err(e.into());
        }

        self.buffer = None;

        #[cfg(feature = "defmt")]
        defmt::info!("display shut down");

        Ok(())
    }

    /// Set the panel brightness (0–100). Metadata only; pixels are unchanged.
    ///
    /// # Errors
    ///
    /// [`DisplayError::HardwareFault`] if not ready,
    /// [`DisplayError::InvalidParameter`] if `level > 100`.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
        self.ready_buffer()?;
        if level > 100 {
            #[cfg(feature = "defmt")]
            defmt::warn!("brightness {} rejected", level);
            return Err(DisplayError::InvalidParameter);
        }
        self.brightness = level;
        Ok(())
    }

    /// Change the active resolution within the buffer capacity, then clear.
    ///
    /// # Errors
    ///
    /// [`DisplayError::HardwareFault`] if not ready,
    /// [`DisplayError::InvalidParameter`] if either dimension is zero or
    /// exceeds the configured maximum.
    pub fn set_resolution(&mut self, width: u16, height: u16) -> Result<(), DisplayError> {
        let buffer = self.ready_buffer()?;
        if let Err(e) = buffer.set_region(ActiveRegion::new(width, height)) {
            #[cfg(feature = "defmt")]
            defmt::warn!("resolution {}x{} rejected", width, height);
            return Err(e);
        }
        self.clear()
    }

    // ── Drawing primitives ───────────────────────────────────────────

    /// Overwrite every active pixel with [`Color::ZERO`], then flush.
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.ready_buffer()?.fill(Color::ZERO);
        self.flush()
    }

    /// Write one pixel. Does **not** flush.
    ///
    /// # Errors
    ///
    /// [`DisplayError::HardwareFault`] if not ready,
    /// [`DisplayError::InvalidParameter`] if `(x, y)` is outside the active
    /// region. Nothing is written on error.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), DisplayError> {
        let buffer = self.ready_buffer()?;
        if buffer.set(u32::from(x), u32::from(y), color) {
            Ok(())
        } else {
            Err(DisplayError::InvalidParameter)
        }
    }

    /// Draw `length` pixels of [`Color::LINE`] rightwards from `(x, y)`,
    /// clipped to the active region, then flush.
    pub fn draw_hline(&mut self, x: u16, y: u16, length: u16) -> Result<(), DisplayError> {
        let buffer = self.ready_buffer()?;
        let (x, y) = (u32::from(x), u32::from(y));
        for i in 0..u32::from(length) {
            buffer.set(x + i, y, Color::LINE);
        }
        self.flush()
    }

    /// Draw `length` pixels of [`Color::LINE`] downwards from `(x, y)`,
    /// clipped to the active region, then flush.
    pub fn draw_vline(&mut self, x: u16, y: u16, length: u16) -> Result<(), DisplayError> {
        let buffer = self.ready_buffer()?;
        let (x, y) = (u32::from(x), u32::from(y));
        for i in 0..u32::from(length) {
            buffer.set(x, y + i, Color::LINE);
        }
        self.flush()
    }

    /// Draw a `w × h` progress bar at `(x, y)`, then flush.
    ///
    /// `percent` is clamped to 100. The leftmost
    /// `floor(w * percent / 100)` columns use [`Color::PROGRESS_FILLED`],
    /// the rest [`Color::PROGRESS_TRACK`]. Cells outside the active region
    /// are skipped.
    ///
    /// # Errors
    ///
    /// [`DisplayError::HardwareFault`] if not ready,
    /// [`DisplayError::InvalidParameter`] if `w == 0 || h == 0`.
    pub fn draw_rectangle_fill(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        percent: u8,
    ) -> Result<(), DisplayError> {
        let buffer = self.ready_buffer()?;
        if w == 0 || h == 0 {
            return Err(DisplayError::InvalidParameter);
        }

        let percent = u32::from(percent.min(100));
        let filled = u32::from(w) * percent / 100;
        let (x, y) = (u32::from(x), u32::from(y));

        for ry in 0..u32::from(h) {
            for rx in 0..u32::from(w) {
                let color = if rx < filled {
                    Color::PROGRESS_FILLED
                } else {
                    Color::PROGRESS_TRACK
                };
                buffer.set(x + rx, y + ry, color);
            }
        }
        self.flush()
    }

    /// Draw `text` as block glyphs starting at `(x, y)`, then flush.
    ///
    /// The cursor advances 6 px per character. Drawing stops once the
    /// cursor reaches the active width; the glyph straddling the edge is
    /// clipped. Text never wraps.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str) -> Result<(), DisplayError> {
        let buffer = self.ready_buffer()?;
        let width = u32::from(buffer.region().width);
        let y = u32::from(y);
        let mut cursor = u32::from(x);

        for c in text.chars() {
            glyph::rasterize(buffer, cursor, y, c);
            cursor += GLYPH_ADVANCE;
            if cursor >= width {
                break;
            }
        }
        self.flush()
    }

    /// Draw `value` in decimal via [`draw_text()`](Self::draw_text).
    pub fn draw_number(&mut self, x: u16, y: u16, value: i32) -> Result<(), DisplayError> {
        let mut digits: String<12> = String::new();
        // i32::MIN is 11 bytes, so this cannot overflow.
        let _ = write!(digits, "{}", value);
        self.draw_text(x, y, digits.as_str())
    }

    /// Copy a `src_w × src_h` block of packed pixels (row-major) to
    /// `(dst_x, dst_y)`, clipped to the active region, then flush.
    ///
    /// # Errors
    ///
    /// [`DisplayError::HardwareFault`] if not ready,
    /// [`DisplayError::InvalidParameter`] if `src` holds fewer than
    /// `src_w * src_h` pixels.
    pub fn blit(
        &mut self,
        src: &[u32],
        src_w: u16,
        src_h: u16,
        dst_x: u16,
        dst_y: u16,
    ) -> Result<(), DisplayError> {
        let buffer = self.ready_buffer()?;
        let stride = usize::from(src_w);
        if src.len() < stride * usize::from(src_h) {
            return Err(DisplayError::InvalidParameter);
        }

        let (dst_x, dst_y) = (u32::from(dst_x), u32::from(dst_y));
        for yy in 0..src_h {
            let row = usize::from(yy) * stride;
            for xx in 0..src_w {
                let color = Color(src[row + usize::from(xx)]);
                buffer.set(dst_x + u32::from(xx), dst_y + u32::from(yy), color);
            }
        }
        self.flush()
    }

    /// Smoke test: draw a cross through the centre of the active region.
    pub fn self_test(&mut self) -> Result<(), DisplayError> {
        let region = self.ready_buffer()?.region();
        self.draw_hline(0, region.height / 2, region.width)?;
        self.draw_vline(region.width / 2, 0, region.height)
    }

    // ── Commit ───────────────────────────────────────────────────────

    /// Hand the active frame to the hardware sink. Never modifies pixels.
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        let buffer = self.buffer.as_ref().ok_or(DisplayError::HardwareFault)?;
        let region = buffer.region();

        #[cfg(feature = "defmt")]
        defmt::trace!("flush {}x{}", region.width, region.height);

        self.sink.present(Frame {
            pixels: buffer.active_pixels(),
            width: region.width,
            height: region.height,
        });
        Ok(())
    }

    /// Simulated page flip. Single-buffered, so this is a [`flush()`](Self::flush).
    pub fn swap_buffers(&mut self) -> Result<(), DisplayError> {
        self.flush()
    }

    // ── State queries ────────────────────────────────────────────────

    /// Check whether the session is between a successful `init()` and `deinit()`.
    pub fn is_ready(&self) -> bool {
        self.buffer.is_some()
    }

    /// Active width, or 0 when not ready.
    pub fn width(&self) -> u16 {
        self.buffer.as_ref().map_or(0, |b| b.region().width)
    }

    /// Active height, or 0 when not ready.
    pub fn height(&self) -> u16 {
        self.buffer.as_ref().map_or(0, |b| b.region().height)
    }

    /// Brightness set by the last `init()` or `set_brightness()`.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Last diagnostic code recorded by a failed lifecycle transition.
    pub fn error_code(&self) -> u32 {
        self.error_code
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Read back one active pixel. `None` when not ready or out of range.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        self.buffer
            .as_ref()
            .and_then(|b| b.get(u32::from(x), u32::from(y)))
    }

    /// Read-only view of the active frame, `None` when not ready.
    pub fn frame(&self) -> Option<Frame<'_>> {
        self.buffer.as_ref().map(|b| {
            let region = b.region();
            Frame {
                pixels: b.active_pixels(),
                width: region.width,
                height: region.height,
            }
        })
    }

    /// Mutable access to the buffer for `embedded-graphics` drawing.
    ///
    /// Returns `None` if the session is not ready. Nothing is flushed; call
    /// [`flush()`](Self::flush) when done.
    pub fn buffer_mut(&mut self) -> Option<&mut PixelBuffer> {
        self.buffer.as_mut()
    }

    /// The injected hardware sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the injected hardware sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the session and return its sink. The buffer is dropped
    /// without calling `hw_deinit()`.
    pub fn release(self) -> S {
        self.sink
    }

    fn ready_buffer(&mut self) -> Result<&mut PixelBuffer, DisplayError> {
        self.buffer.as_mut().ok_or(DisplayError::HardwareFault)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
