//! Modal dispatch: one key event per turn, routed by the active mode.

use super::{Editor, Mode};
use crate::input::Key;

const CTRL_Q: Key = Key::Char(b'q' & 0x1f);
const CTRL_U: Key = Key::Char(b'u' & 0x1f);
const CTRL_D: Key = Key::Char(b'd' & 0x1f);
/// Enter arrives as a carriage return with `ICRNL` disabled.
const ENTER: Key = Key::Char(13);
/// The command-line erase key; it never reaches the buffer.
const CMD_ERASE: Key = Key::Char(b'8');

impl Editor {
    /// Normal mode: counts, mode switches, paging, and motions.
    pub(super) fn normal_mode_key(&mut self, key: Key) {
        // Digits 1-9 start a repeat count; 0 joins in once a count is
        // pending (otherwise it is the line-start motion below).
        if let Key::Char(c) = key {
            if c.is_ascii_digit() && (c != b'0' || self.cmdrep != 0) {
                self.accumulate_count(c - b'0');
                return;
            }
        }

        match key {
            Key::Char(b'i') => self.mode = Mode::Insert,
            Key::Char(b':') => {
                self.mode = Mode::Command;
                self.set_status_message(":");
            }
            CTRL_Q => self.running = false,
            Key::Char(b'0') | Key::Home => self.cx = 0,
            Key::Char(b'$') | Key::End => {
                if let Some(row) = self.buffer.row(self.cy) {
                    self.cx = row.len();
                }
            }
            Key::PageUp | Key::PageDown | CTRL_U | CTRL_D => self.page_move(key),
            Key::Up
            | Key::Down
            | Key::Left
            | Key::Right
            | Key::Char(
                b'h' | b'j' | b'k' | b'l' | b'w' | b'W' | b'b' | b'B' | b'e' | b'E',
            ) => self.move_cursor(key),
            _ => {}
        }

        self.cmdrep = 0;
    }

    /// Insert mode: Esc leaves, arrows move, everything else is dropped.
    pub(super) fn insert_mode_key(&mut self, key: Key) {
        match key {
            Key::Esc => self.mode = Mode::Normal,
            Key::Up | Key::Down | Key::Left | Key::Right => self.move_cursor(key),
            // Typed bytes are dropped: row mutation is not implemented.
            _ => {}
        }
    }

    /// Command mode: collect a line, execute it on Enter.
    pub(super) fn command_mode_key(&mut self, key: Key) {
        match key {
            ENTER => {
                self.execute_command();
                self.leave_command_mode();
            }
            Key::Esc => self.leave_command_mode(),
            CMD_ERASE => {
                self.cmdbuf.pop();
            }
            Key::Char(c) if c.is_ascii_graphic() || c == b' ' => {
                self.cmdbuf.push(char::from(c));
                self.set_status_message(format!(":{}", self.cmdbuf));
            }
            _ => {}
        }
    }

    /// Accumulate one digit onto the pending repeat count.
    fn accumulate_count(&mut self, digit: u8) {
        self.cmdrep = self
            .cmdrep
            .saturating_mul(10)
            .saturating_add(usize::from(digit));
    }

    /// Execute the collected command line.
    ///
    /// Only `q` is recognized, anywhere in the line; a `w` (write)
    /// directive is the natural next addition once buffer persistence
    /// exists.
    fn execute_command(&mut self) {
        if self.cmdbuf.bytes().any(|b| b == b'q') {
            self.running = false;
        }
    }

    /// Clear the command line and message bar and return to Normal mode.
    fn leave_command_mode(&mut self) {
        self.cmdbuf.clear();
        self.set_status_message("");
        self.mode = Mode::Normal;
    }

    /// Page motion: snap the cursor to the viewport edge, then step a full
    /// screen height one row at a time.
    fn page_move(&mut self, key: Key) {
        let down = matches!(key, Key::PageDown) || key == CTRL_D;
        if down {
            self.cy = (self.rowoff + self.screenrows).saturating_sub(1);
            if self.cy > self.buffer.len() {
                self.cy = self.buffer.len();
            }
        } else {
            self.cy = self.rowoff;
        }

        let step = if down { Key::Down } else { Key::Up };
        for _ in 0..self.screenrows {
            self.move_cursor(step);
        }
    }
}
