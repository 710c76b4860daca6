//! Window geometry: how many rows and columns the terminal offers.

// The primary query is an ioctl on stdout.
#![allow(unsafe_code)]

use crate::error::{Error, Result};
use libc::{ioctl, winsize, STDOUT_FILENO, TIOCGWINSZ};
use std::io::{self, Read, Write};

/// Query the terminal size as `(rows, cols)`.
///
/// Uses `TIOCGWINSZ` when available. If the ioctl fails or reports zero
/// columns, falls back to parking the cursor at the bottom-right extreme
/// and asking the terminal where it ended up — the cursor-forward and
/// cursor-down sequences are documented to stop at the screen edge, which
/// makes the reported position a proxy for the screen size.
///
/// # Errors
///
/// Returns [`Error::Terminal`] if both the ioctl and the escape-sequence
/// fallback fail. Fatal: without geometry nothing can be rendered.
pub fn window_size() -> Result<(usize, usize)> {
    let mut ws = unsafe { std::mem::zeroed::<winsize>() };
    if unsafe { ioctl(STDOUT_FILENO, TIOCGWINSZ, &mut ws) } == -1 || ws.ws_col == 0 {
        return cursor_position_probe();
    }
    Ok((usize::from(ws.ws_row), usize::from(ws.ws_col)))
}

/// Ask the terminal for the cursor position after pushing it to the
/// bottom-right corner.
fn cursor_position_probe() -> Result<(usize, usize)> {
    let fail = Error::terminal("cursor position query");
    let mut stdout = io::stdout();
    stdout
        .write_all(b"\x1b[999C\x1b[999B\x1b[6n")
        .and_then(|()| stdout.flush())
        .map_err(Error::terminal("write"))?;

    // The reply is `ESC [ rows ; cols R`; read until the terminator or a
    // timed-out byte.
    let mut reply = Vec::with_capacity(32);
    let mut stdin = io::stdin();
    let mut byte = [0u8; 1];
    while reply.len() < 31 {
        match stdin.read(&mut byte) {
            Ok(1) if byte[0] == b'R' => break,
            Ok(1) => reply.push(byte[0]),
            Ok(_) => break,
            Err(err) => return Err(Error::terminal("read")(err)),
        }
    }

    parse_cursor_report(&reply)
        .ok_or_else(|| fail(io::Error::new(io::ErrorKind::InvalidData, "malformed report")))
}

/// Parse `ESC [ rows ; cols` (terminator already stripped).
fn parse_cursor_report(reply: &[u8]) -> Option<(usize, usize)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor_report() {
        assert_eq!(parse_cursor_report(b"\x1b[24;80"), Some((24, 80)));
        assert_eq!(parse_cursor_report(b"\x1b[1;1"), Some((1, 1)));
    }

    #[test]
    fn test_parse_cursor_report_rejects_garbage() {
        assert_eq!(parse_cursor_report(b""), None);
        assert_eq!(parse_cursor_report(b"24;80"), None);
        assert_eq!(parse_cursor_report(b"\x1b[24:80"), None);
        assert_eq!(parse_cursor_report(b"\x1b[;80"), None);
        assert_eq!(parse_cursor_report(b"\x1b[a;b"), None);
    }
}
