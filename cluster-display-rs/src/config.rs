//! Panel geometry and session defaults.

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for a [`DisplaySession`](crate::DisplaySession).
///
/// All panel geometry lives here. [`DisplayConfig::default()`] reproduces
/// the reference panel (800×480, brightness 80, progress command bar at
/// (10, 10) sized 200×20).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Maximum panel width in pixels; the buffer is sized to this. Default: 800.
    pub max_width: u16,
    /// Maximum panel height in pixels; the buffer is sized to this. Default: 480.
    pub max_height: u16,
    /// Brightness applied on every `init()`. Must be ≤ 100. Default: 80.
    pub default_brightness: u8,

    // ── Text command front end ───────────────────────────────────────
    /// Origin for `text <string>` commands. Default: (0, 0).
    pub text_origin: (u16, u16),
    /// Origin for `progress <percent>` commands. Default: (10, 10).
    pub progress_origin: (u16, u16),
    /// Size (w, h) for `progress <percent>` commands. Default: (200, 20).
    pub progress_size: (u16, u16),
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_height: 480,
            default_brightness: 80,
            text_origin: (0, 0),
            progress_origin: (10, 10),
            progress_size: (200, 20),
        }
    }
}

impl DisplayConfig {
    /// Config for a panel of the given size, other fields at their defaults.
    pub fn with_panel(max_width: u16, max_height: u16) -> Self {
        Self {
            max_width,
            max_height,
            ..Self::default()
        }
    }

    /// Returns `true` if the panel geometry and brightness are usable.
    pub fn is_valid(&self) -> bool {
        self.max_width > 0 && self.max_height > 0 && self.default_brightness <= 100
    }
}
