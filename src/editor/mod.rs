//! Editor module: session state, modal dispatch, and the main loop.
//!
//! This module contains:
//! - [`Editor`]: the session state container threaded through every
//!   operation — cursor, scroll offsets, mode, command buffer, row store
//! - [`Mode`]: the three-state modal machine (Normal, Insert, Command)
//! - viewport scroll math, frame composition, cursor motion, and the
//!   per-mode key dispatchers, as `impl Editor` blocks in the submodules

mod dispatch;
mod motion;
mod render;
mod viewport;

use crate::buffer::TextBuffer;
use crate::error::{Error, Result};
use crate::input::{Key, KeyDecoder};
use crate::terminal::FrameBuffer;
use std::io::{Read, Write};
use std::path::Path;

/// The active input mode. Exactly one is active at any time.
///
/// The dispatcher matches exhaustively on this enum, so there is no
/// "unknown mode" failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Motions, counts, and mode switches. The initial mode.
    Normal,
    /// Reachable state only: arrows move the cursor, typed bytes are
    /// dropped. Text mutation is not implemented.
    Insert,
    /// Collects a command line shown in the message bar.
    Command,
}

impl Mode {
    /// Status-bar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }
}

/// Editor session state.
///
/// Owns everything a frame or a keystroke can touch. Single-threaded by
/// design: one key event is dispatched per turn, and every frame reflects
/// the state as of the end of the previous keystroke — no partial state is
/// ever rendered.
pub struct Editor {
    /// Active mode.
    mode: Mode,
    /// Command-line buffer; cleared on every exit from Command mode.
    cmdbuf: String,
    /// Pending repeat count accumulated from digit keys in Normal mode.
    cmdrep: usize,

    /// Cursor column as a character offset into the current row.
    cx: usize,
    /// Cursor row index; may equal the row count (just past the last row).
    cy: usize,
    /// Rendered cursor column, derived from `cx` each frame.
    rx: usize,
    /// First visible row.
    rowoff: usize,
    /// First visible rendered column.
    coloff: usize,
    /// Text rows on screen (window height minus the two bars).
    screenrows: usize,
    /// Window width in columns.
    screencols: usize,

    /// The row store.
    buffer: TextBuffer,
    /// Name of the loaded file, if any.
    filename: Option<String>,
    /// Message-bar content; truncated only at render time.
    status_msg: String,

    /// Cleared by the quit paths; the main loop runs while set.
    running: bool,
}

impl Editor {
    /// Create a session for a `rows` x `cols` window with an empty buffer.
    ///
    /// Two rows are reserved for the status and message bars.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            mode: Mode::Normal,
            cmdbuf: String::new(),
            cmdrep: 0,
            cx: 0,
            cy: 0,
            rx: 0,
            rowoff: 0,
            coloff: 0,
            screenrows: rows.saturating_sub(2),
            screencols: cols,
            buffer: TextBuffer::new(),
            filename: None,
            status_msg: String::new(),
            running: true,
        }
    }

    /// Load a file into the buffer and remember its name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be read — a fatal
    /// startup condition.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.buffer = TextBuffer::open(path).map_err(|source| Error::Open {
            path: path.display().to_string(),
            source,
        })?;
        self.filename = Some(path.display().to_string());
        Ok(())
    }

    /// Run the main loop: render one frame, dispatch one key, repeat.
    ///
    /// Returns after a quit directive, leaving a cleared screen behind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Terminal`] if reading a key or writing a frame
    /// fails.
    pub fn run<R: Read, W: Write>(
        &mut self,
        keys: &mut KeyDecoder<R>,
        out: &mut W,
    ) -> Result<()> {
        while self.running {
            self.refresh_screen(out)?;
            let key = keys.read_key().map_err(Error::terminal("read"))?;
            self.process_key(key);
        }

        let mut frame = FrameBuffer::new();
        frame.clear_screen();
        frame.cursor_home();
        frame.flush_to(out).map_err(Error::terminal("write"))
    }

    /// Route one key event to the active mode's handler.
    pub fn process_key(&mut self, key: Key) {
        match self.mode {
            Mode::Normal => self.normal_mode_key(key),
            Mode::Insert => self.insert_mode_key(key),
            Mode::Command => self.command_mode_key(key),
        }
    }

    /// Replace the message-bar content.
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_msg = msg.into();
    }

    /// The active mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Cursor position as `(cx, cy)`.
    pub const fn cursor(&self) -> (usize, usize) {
        (self.cx, self.cy)
    }

    /// Scroll offsets as `(rowoff, coloff)`.
    pub const fn offsets(&self) -> (usize, usize) {
        (self.rowoff, self.coloff)
    }

    /// The pending Normal-mode repeat count.
    pub const fn pending_count(&self) -> usize {
        self.cmdrep
    }

    /// The Command-mode line as typed so far.
    pub fn command_line(&self) -> &str {
        &self.cmdbuf
    }

    /// The message-bar content.
    pub fn status_message(&self) -> &str {
        &self.status_msg
    }

    /// Whether the main loop should keep going.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Get a reference to the row store.
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Get a mutable reference to the row store.
    pub const fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }
}
