// src/platform/console.rs

//! [`Platform`] implementation for a Unix console.
//!
//! Queries the terminal size with `ioctl(TIOCGWINSZ)`, writes frames as ANSI
//! escape sequences to stdout, and blocks on stdin for the step trigger. The
//! terminal is put into raw mode (echo and line buffering off) for the
//! duration of the run, with the original attributes restored and the cursor
//! shown again on cleanup.

use crate::platform::{Platform, TerminalDims};

use anyhow::{Context, Result};
use libc::{winsize, STDIN_FILENO, TIOCGWINSZ};
use std::io::{self, stdin, stdout, Read, Write};
use std::mem;
use std::os::unix::io::RawFd;
use termios::{tcsetattr, Termios, ECHO, ICANON, TCSANOW, VMIN, VTIME};

use log::{debug, error, info, warn};

// --- ANSI Escape Code Constants ---
const CURSOR_HIDE: &str = "\x1b[?25l";
const CURSOR_SHOW: &str = "\x1b[?25h";

// Fallback dimensions when a successful ioctl reports a zero-sized window,
// which can happen on some ptys.
const DEFAULT_WIDTH_CELLS: u16 = 80;
const DEFAULT_HEIGHT_CELLS: u16 = 24;

/// A [`Platform`] backed by the controlling Unix terminal.
pub struct ConsolePlatform {
    /// Stores the original terminal attributes to restore them on cleanup.
    original_termios: Option<Termios>,
    /// Terminal size snapshotted at construction.
    dims: TerminalDims,
}

impl ConsolePlatform {
    /// Creates a new `ConsolePlatform`.
    ///
    /// This attempts to:
    /// 1. Query the terminal size in character cells.
    /// 2. Set the terminal to raw mode (disabling echo and line buffering).
    /// 3. Hide the console's native cursor for the duration of the run.
    ///
    /// A failed size query is fatal: without dimensions there is nothing to
    /// size the grid from. If setting raw mode fails, a warning is logged and
    /// the run proceeds with line-buffered input.
    pub fn new() -> Result<Self> {
        info!("Creating new ConsolePlatform.");

        let (cols, rows) = get_terminal_size_cells(STDIN_FILENO)
            .context("ConsolePlatform: cannot determine terminal dimensions")?;
        info!("ConsolePlatform: terminal size: {}x{} cells.", cols, rows);

        let original_termios = match Termios::from_fd(STDIN_FILENO) {
            Ok(ts) => Some(ts),
            Err(e) => {
                warn!(
                    "ConsolePlatform: Failed to get initial termios: {}. Proceeding without raw mode.",
                    e
                );
                None
            }
        };

        if let Some(ref ots) = original_termios {
            let mut raw_termios = *ots;
            // Disable echo and canonical mode (line buffering); keep signal
            // generation so Ctrl-C still interrupts the toy.
            raw_termios.c_lflag &= !(ECHO | ICANON);
            // Block until at least one byte is available.
            raw_termios.c_cc[VMIN] = 1;
            raw_termios.c_cc[VTIME] = 0;

            if let Err(e) = tcsetattr(STDIN_FILENO, TCSANOW, &raw_termios) {
                warn!(
                    "ConsolePlatform: Failed to set raw terminal attributes: {}. Input might not work as expected.",
                    e
                );
            } else {
                debug!("ConsolePlatform: Terminal set to raw mode.");
            }
        }

        print!("{}", CURSOR_HIDE);
        stdout()
            .flush()
            .context("ConsolePlatform: Failed to flush stdout for initial CURSOR_HIDE")?;

        Ok(ConsolePlatform {
            original_termios,
            dims: TerminalDims {
                rows: rows as usize,
                cols: cols as usize,
            },
        })
    }
}

impl Platform for ConsolePlatform {
    fn dimensions(&self) -> TerminalDims {
        self.dims
    }

    /// Writes the frame to stdout and flushes it.
    fn render(&mut self, frame: &str) -> Result<()> {
        let mut out = stdout();
        out.write_all(frame.as_bytes())
            .context("ConsolePlatform: Failed to write frame to stdout")?;
        out.flush()
            .context("ConsolePlatform: Failed to flush stdout after frame")
    }

    /// Blocks reading stdin one byte at a time until a line terminator
    /// (`\n` or `\r`) arrives. Any other input is consumed and ignored.
    fn wait_for_step(&mut self) -> Result<()> {
        let mut byte = [0u8; 1];
        loop {
            match stdin().read(&mut byte) {
                Ok(0) => {
                    // EOF: the controlling terminal went away. Treat the
                    // trigger source as exhausted rather than spinning.
                    anyhow::bail!("ConsolePlatform: EOF on stdin while waiting for a step");
                }
                Ok(_) => {
                    if byte[0] == b'\n' || byte[0] == b'\r' {
                        return Ok(());
                    }
                }
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {
                    // Interrupted by a signal; keep waiting.
                    continue;
                }
                Err(e) => {
                    return Err(e).context("ConsolePlatform: Error reading from stdin");
                }
            }
        }
    }

    /// Restores original terminal attributes and shows the cursor.
    fn cleanup(&mut self) -> Result<()> {
        info!("ConsolePlatform: Cleaning up...");
        print!("{}", CURSOR_SHOW);
        stdout()
            .flush()
            .context("ConsolePlatform: Failed to flush for CURSOR_SHOW cleanup")?;

        if let Some(original_termios_val) = self.original_termios.take() {
            debug!("ConsolePlatform: Restoring original terminal attributes.");
            tcsetattr(STDIN_FILENO, TCSANOW, &original_termios_val)
                .context("ConsolePlatform: Failed to restore original terminal attributes")?;
        }
        Ok(())
    }
}

/// Ensures cleanup is attempted when `ConsolePlatform` is dropped.
impl Drop for ConsolePlatform {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            // Log error, but don't panic in drop.
            error!("ConsolePlatform: Error during cleanup in drop: {}", e);
        }
    }
}

/// Retrieves the terminal size in character cells using an `ioctl` call.
///
/// # Returns
/// * `Result<(u16, u16)>`: A tuple `(columns, rows)`, or an error if the
///   `ioctl` itself fails. A successful call reporting zero cols/rows falls
///   back to the default dimensions with a warning.
fn get_terminal_size_cells(fd: RawFd) -> Result<(u16, u16)> {
    // SAFETY: `ioctl` is an FFI call. `winsz` must be valid.
    unsafe {
        let mut winsz: winsize = mem::zeroed();
        if libc::ioctl(fd, TIOCGWINSZ, &mut winsz) == -1 {
            return Err(anyhow::Error::from(std::io::Error::last_os_error())
                .context("ConsolePlatform: ioctl(TIOCGWINSZ) failed"));
        }
        let cols = if winsz.ws_col == 0 {
            warn!("ConsolePlatform: ioctl reported zero columns, using default.");
            DEFAULT_WIDTH_CELLS
        } else {
            winsz.ws_col
        };
        let rows = if winsz.ws_row == 0 {
            warn!("ConsolePlatform: ioctl reported zero rows, using default.");
            DEFAULT_HEIGHT_CELLS
        } else {
            winsz.ws_row
        };
        Ok((cols, rows))
    }
}
