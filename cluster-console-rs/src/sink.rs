//! Logging hardware sink for the host simulation.

use cluster_display_rs::{Frame, HardwareSink, SinkError};
use log::{debug, info};

/// Stands in for the panel transport: logs lifecycle calls and the first
/// four pixels of every presented frame.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    frames: usize,
}

impl ConsoleSink {
    /// Number of frames presented so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl HardwareSink for ConsoleSink {
    fn hw_init(&mut self) -> Result<(), SinkError> {
        info!("panel: hw init");
        Ok(())
    }

    fn hw_deinit(&mut self) -> Result<(), SinkError> {
        info!("panel: hw deinit");
        Ok(())
    }

    fn present(&mut self, frame: Frame<'_>) {
        self.frames += 1;
        let [a, b, c, d] = frame.top_left();
        debug!(
            "flush #{} ({}x{}): top-left pixels: {:08X} {:08X} {:08X} {:08X}",
            self.frames, frame.width, frame.height, a, b, c, d
        );
    }
}
