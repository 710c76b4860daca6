//! Escape-sequence decoder: raw bytes in, semantic key events out.
//!
//! The decoder sits directly on the raw-mode byte stream. Reads have
//! non-blocking-with-timeout semantics (VMIN=0, VTIME=1), which the
//! decoder leans on twice: the outer loop retries empty reads until a key
//! arrives, and the escape lookahead treats an empty read as "the sequence
//! ended here", degrading gracefully to a bare Esc instead of blocking on
//! a partial sequence.

use super::key::Key;
use std::io::{self, Read};

/// Decodes terminal input into [`Key`] events.
///
/// Generic over the byte source so the decode state machine can be tested
/// against in-memory streams, where hitting end-of-input models a timed
/// out read.
pub struct KeyDecoder<R> {
    source: R,
}

impl<R: Read> KeyDecoder<R> {
    /// Wrap a byte source.
    pub const fn new(source: R) -> Self {
        Self { source }
    }

    /// Block (bounded by the read timeout) until one key event is decoded.
    ///
    /// Produces exactly one event per call.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying read fails; timeouts and
    /// partial sequences are not errors.
    pub fn read_key(&mut self) -> io::Result<Key> {
        let first = loop {
            if let Some(byte) = self.read_byte()? {
                break byte;
            }
        };

        if first == 0x1b {
            self.decode_escape()
        } else {
            Ok(Key::Char(first))
        }
    }

    /// Read one byte; `None` means the read timed out with nothing pending.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.source.read(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
                ) =>
            {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Decode the tail of an escape sequence.
    ///
    /// Two lookahead bytes are consumed before the bracket check, and a
    /// timeout at any step yields plain [`Key::Esc`] — an unrecognized or
    /// incomplete sequence degrades rather than erroring.
    fn decode_escape(&mut self) -> io::Result<Key> {
        let Some(first) = self.read_byte()? else {
            return Ok(Key::Esc);
        };
        let Some(second) = self.read_byte()? else {
            return Ok(Key::Esc);
        };
        if first != b'[' {
            return Ok(Key::Esc);
        }

        match second {
            b'0'..=b'9' => {
                let Some(third) = self.read_byte()? else {
                    return Ok(Key::Esc);
                };
                if third != b'~' {
                    return Ok(Key::Esc);
                }
                Ok(match second {
                    b'1' | b'7' => Key::Home,
                    b'3' => Key::Delete,
                    b'4' | b'8' => Key::End,
                    b'5' => Key::PageUp,
                    b'6' => Key::PageDown,
                    _ => Key::Esc,
                })
            }
            b'A' => Ok(Key::Up),
            b'B' => Ok(Key::Down),
            b'C' => Ok(Key::Right),
            b'D' => Ok(Key::Left),
            b'H' => Ok(Key::Home),
            b'F' => Ok(Key::End),
            _ => Ok(Key::Esc),
        }
    }
}
