//! Software framebuffer and drawing engine for an instrument-cluster display.
//!
//! This crate provides [`DisplaySession`], which owns the pixel buffer for a
//! single panel, tracks its init/deinit lifecycle and exposes the drawing
//! primitives (pixel, lines, progress bar, block text, numbers, blit). The
//! physical transfer underneath [`DisplaySession::flush()`] is an injected
//! [`HardwareSink`].
//!
//! # Quick Start
//!
//! ```
//! use cluster_display_rs::{DisplayConfig, DisplaySession, NullSink};
//!
//! let mut display = DisplaySession::new(NullSink, DisplayConfig::default());
//! display.init().unwrap();
//!
//! display.draw_number(20, 20, 88).unwrap();
//! display.draw_rectangle_fill(10, 40, 200, 20, 33).unwrap();
//! cluster_display_rs::command::execute(&mut display, "text HELLO").unwrap();
//!
//! display.deinit().unwrap();
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`] and `defmt::Format`
//!   implementations on public types.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod buffer;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod session;
pub mod sink;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use bounds::ActiveRegion;
pub use buffer::PixelBuffer;
pub use color::Color;
pub use command::Command;
pub use config::DisplayConfig;
pub use error::{status_code, status_str, DisplayError};
pub use layout::{render_cluster, ClusterChanges, ClusterLayout, ClusterState};
pub use session::DisplaySession;
pub use sink::{Frame, HardwareSink, NullSink, SinkError};
