// src/platform/mod.rs

//! Terminal I/O behind a single [`Platform`] trait.
//!
//! The animation core never touches the terminal directly; it sees one
//! interface exposing the terminal size, a way to write a frame, and a
//! blocking wait for the user's step trigger. The concrete implementation is
//! selected once at startup for the host platform. Tests use
//! [`mock::MockPlatform`] to script dimensions and record frames.

#[cfg(unix)]
pub mod console;
pub mod mock;

use anyhow::Result;

/// Terminal size in character cells, snapshotted at startup.
///
/// The size is queried exactly once; resizes during the run are not handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalDims {
    pub rows: usize,
    pub cols: usize,
}

/// A trait that defines the interface for a platform implementation.
///
/// This abstracts over how the host terminal is sized, drawn to, and waited
/// on, so the animation loop runs unchanged against the real console or a
/// test mock.
pub trait Platform {
    /// Returns the terminal dimensions snapshotted when the platform was
    /// created.
    fn dimensions(&self) -> TerminalDims;

    /// Writes one complete frame to the display and flushes it.
    fn render(&mut self, frame: &str) -> Result<()>;

    /// Blocks indefinitely until the user presses a line-terminating key.
    ///
    /// No input value is consumed beyond the trigger itself and there is no
    /// timeout or cancellation.
    fn wait_for_step(&mut self) -> Result<()>;

    /// Performs any necessary cleanup before the platform is dropped.
    fn cleanup(&mut self) -> Result<()>;
}

/// Creates the concrete platform for the host.
#[cfg(unix)]
pub fn default_platform() -> Result<Box<dyn Platform>> {
    Ok(Box::new(console::ConsolePlatform::new()?))
}
