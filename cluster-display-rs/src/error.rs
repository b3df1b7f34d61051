//! Error types and diagnostics for the display engine.

use core::fmt;

use crate::sink::SinkError;

/// Errors returned by [`DisplaySession`](crate::DisplaySession) operations.
///
/// Every failure is reported at the call site; none of them poison the
/// session. A failed call leaves the pixel buffer exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// A caller-supplied argument was rejected: zero-size region,
    /// brightness above 100, out-of-range single-pixel coordinate, short
    /// blit source, or an unknown text command.
    InvalidParameter,
    /// The session is not ready, or the hardware sink or buffer allocation
    /// failed during a lifecycle transition.
    HardwareFault,
    /// The hardware sink timed out during a lifecycle transition.
    Timeout,
}

impl DisplayError {
    /// Stable, log-friendly name of the error.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayError::HardwareFault => "HW_ERROR",
            DisplayError::Timeout => "TIMEOUT",
            DisplayError::InvalidParameter => "INVALID_PARAM",
        }
    }

    /// Numeric status code as reported on the controller's status register.
    ///
    /// `0` is reserved for success (see [`status_code()`]).
    pub fn code(&self) -> u8 {
        match self {
            DisplayError::HardwareFault => 1,
            DisplayError::Timeout => 2,
            DisplayError::InvalidParameter => 3,
        }
    }
}

impl From<SinkError> for DisplayError {
    fn from(e: SinkError) -> Self {
        match e {
            SinkError::Fault => DisplayError::HardwareFault,
            SinkError::Timeout => DisplayError::Timeout,
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log-friendly name of an operation's outcome, `"OK"` on success.
pub fn status_str<T>(result: &Result<T, DisplayError>) -> &'static str {
    match result {
        Ok(_) => "OK",
        Err(e) => e.as_str(),
    }
}

/// Numeric status code of an operation's outcome, `0` on success.
pub fn status_code<T>(result: &Result<T, DisplayError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => e.code(),
    }
}

/// Diagnostic codes recorded by a session when a lifecycle transition fails.
///
/// Read back with [`DisplaySession::error_code()`](crate::DisplaySession::error_code).
pub mod diag {
    /// No failure recorded.
    pub const NONE: u32 = 0x00;
    /// The pixel buffer could not be allocated.
    pub const ALLOC_FAILED: u32 = 0x02;
    /// The hardware sink rejected initialisation.
    pub const HW_INIT_FAILED: u32 = 0x03;
    /// The hardware sink rejected de-initialisation.
    pub const HW_DEINIT_FAILED: u32 = 0x04;
}
