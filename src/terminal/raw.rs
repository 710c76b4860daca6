//! Raw mode: byte-at-a-time terminal input under program control.
//!
//! Acquiring raw mode is process-global, singleton state with a strict
//! init-once/restore-on-every-exit-path lifecycle. [`RawMode`] models it as
//! a scoped resource: the original configuration is captured on enable and
//! re-applied by `Drop`, so every exit path — normal quit, fatal error,
//! panic unwind — leaves the terminal usable.

// Termios FFI needs unsafe; everything here goes through libc on stdin.
#![allow(unsafe_code)]

use crate::error::{Error, Result};
use libc::{
    tcgetattr, tcsetattr, termios, BRKINT, CS8, ECHO, ICANON, ICRNL, IEXTEN, INPCK, ISIG, ISTRIP,
    IXON, OPOST, STDIN_FILENO, TCSAFLUSH, VMIN, VTIME,
};
use std::io;
use std::mem::MaybeUninit;

/// Guard holding the terminal in raw mode.
///
/// The captured pre-raw configuration is restored when the guard drops.
pub struct RawMode {
    orig: termios,
}

impl RawMode {
    /// Capture the current terminal configuration and switch to raw mode.
    ///
    /// Raw mode disables canonical line buffering, echo, signal-generating
    /// and flow-control keys, and output post-processing, and configures
    /// reads to return after at most a tenth of a second with no minimum
    /// byte count. The main loop relies on that timeout both to stay
    /// responsive and to detect incomplete escape sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Terminal`] if either termios syscall fails. That is
    /// fatal: a terminal stuck between configurations cannot be used for
    /// further I/O.
    pub fn enable() -> Result<Self> {
        let mut orig = MaybeUninit::<termios>::uninit();
        if unsafe { tcgetattr(STDIN_FILENO, orig.as_mut_ptr()) } == -1 {
            return Err(Error::terminal("tcgetattr")(io::Error::last_os_error()));
        }
        let orig = unsafe { orig.assume_init() };

        let raw = raw_from(&orig);
        if unsafe { tcsetattr(STDIN_FILENO, TCSAFLUSH, &raw) } == -1 {
            return Err(Error::terminal("tcsetattr")(io::Error::last_os_error()));
        }

        Ok(Self { orig })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        // Nowhere left to report a failure; the terminal is lost either way.
        unsafe {
            tcsetattr(STDIN_FILENO, TCSAFLUSH, &self.orig);
        }
    }
}

/// Derive the raw configuration from a captured one.
fn raw_from(orig: &termios) -> termios {
    let mut raw = *orig;
    // IXON: flow control (Ctrl-S/Ctrl-Q); ICRNL: CR-to-NL translation, so
    // Enter reads as 13; BRKINT/INPCK/ISTRIP: legacy raw-mode conventions.
    raw.c_iflag &= !(BRKINT | INPCK | ISTRIP | ICRNL | IXON);
    // OPOST: NL-to-CRNL translation on output.
    raw.c_oflag &= !OPOST;
    raw.c_cflag |= CS8;
    // ECHO; ICANON: line buffering; ISIG: Ctrl-C/Ctrl-Z; IEXTEN: Ctrl-V.
    raw.c_lflag &= !(ECHO | ICANON | ISIG | IEXTEN);
    // read() returns after 1/10s with whatever arrived, possibly nothing.
    raw.c_cc[VMIN] = 0;
    raw.c_cc[VTIME] = 1;
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> termios {
        // A zeroed termios is enough to observe the flag arithmetic.
        unsafe { std::mem::zeroed() }
    }

    #[test]
    fn test_raw_clears_input_and_local_flags() {
        let mut orig = blank();
        orig.c_iflag = BRKINT | INPCK | ISTRIP | ICRNL | IXON;
        orig.c_lflag = ECHO | ICANON | ISIG | IEXTEN;
        orig.c_oflag = OPOST;

        let raw = raw_from(&orig);
        assert_eq!(raw.c_iflag & (BRKINT | INPCK | ISTRIP | ICRNL | IXON), 0);
        assert_eq!(raw.c_lflag & (ECHO | ICANON | ISIG | IEXTEN), 0);
        assert_eq!(raw.c_oflag & OPOST, 0);
    }

    #[test]
    fn test_raw_sets_read_timeout() {
        let raw = raw_from(&blank());
        assert_eq!(raw.c_cc[VMIN], 0);
        assert_eq!(raw.c_cc[VTIME], 1);
        assert_eq!(raw.c_cflag & CS8, CS8);
    }

    #[test]
    fn test_raw_preserves_unrelated_flags() {
        let mut orig = blank();
        orig.c_iflag = ICRNL | libc::IGNBRK;
        let raw = raw_from(&orig);
        assert_eq!(raw.c_iflag & libc::IGNBRK, libc::IGNBRK);
    }
}
