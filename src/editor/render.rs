//! Frame composition: one atomic terminal write per refresh cycle.

use super::Editor;
use crate::error::{Error, Result};
use crate::terminal::FrameBuffer;
use std::io::Write;

impl Editor {
    /// Compose one complete frame.
    ///
    /// Scroll offsets are reconciled first, then the frame is built in
    /// protocol order: hide-cursor, cursor-home, the visible rows, the
    /// status bar, the message bar, cursor placement, show-cursor. The
    /// caller writes the result in a single syscall.
    pub fn render_frame(&mut self) -> FrameBuffer {
        self.scroll();

        let mut frame = FrameBuffer::new();
        frame.cursor_hide();
        frame.cursor_home();

        self.draw_rows(&mut frame);
        self.draw_status_bar(&mut frame);
        self.draw_message_bar(&mut frame);

        frame.cursor_goto(self.cy - self.rowoff + 1, self.rx - self.coloff + 1);
        frame.cursor_show();
        frame
    }

    /// Compose and write one frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Terminal`] if the terminal write fails.
    pub fn refresh_screen<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let frame = self.render_frame();
        frame.flush_to(out).map_err(Error::terminal("write"))
    }

    /// The visible slice of every screen row.
    fn draw_rows(&self, frame: &mut FrameBuffer) {
        for y in 0..self.screenrows {
            let filerow = y + self.rowoff;
            if let Some(row) = self.buffer.row(filerow) {
                let render = row.render();
                let start = self.coloff.min(render.len());
                let end = (self.coloff + self.screencols).min(render.len());
                frame.push_bytes(&render[start..end]);
            } else if self.buffer.is_empty() && y == self.screenrows / 3 {
                self.draw_welcome(frame);
            } else {
                frame.push_str("~");
            }
            frame.erase_line();
            frame.crlf();
        }
    }

    /// Centered welcome banner, shown on the empty buffer only.
    fn draw_welcome(&self, frame: &mut FrameBuffer) {
        let mut welcome = format!("Ni editor -- version {}", crate::VERSION);
        welcome.truncate(self.screencols);

        let mut padding = (self.screencols - welcome.len()) / 2;
        if padding > 0 {
            frame.push_str("~");
            padding -= 1;
        }
        for _ in 0..padding {
            frame.push_str(" ");
        }
        frame.push_str(&welcome);
    }

    /// Reverse-video status line: mode, filename, row count on the left,
    /// cursor position on the right.
    fn draw_status_bar(&self, frame: &mut FrameBuffer) {
        frame.reverse_video();

        let name = self.filename.as_deref().unwrap_or("[No name]");
        let status = format!(
            " {} | {} | {} lines",
            clip(self.mode.label(), 20),
            clip(name, 20),
            self.buffer.len()
        );
        let rstatus = format!("{}:{} ", self.cy + 1, self.cx + 1);

        let mut len = status.len().min(self.screencols);
        frame.push_bytes(&status.as_bytes()[..len]);
        while len < self.screencols {
            if self.screencols - len == rstatus.len() {
                frame.push_str(&rstatus);
                break;
            }
            frame.push_str(" ");
            len += 1;
        }

        frame.reset_attrs();
        frame.crlf();
    }

    /// Message line, with the pending repeat count right-aligned.
    fn draw_message_bar(&self, frame: &mut FrameBuffer) {
        frame.erase_line();

        let msg = &self.status_msg.as_bytes()[..self.status_msg.len().min(self.screencols)];
        frame.push_bytes(msg);

        if self.cmdrep != 0 {
            let pending = format!("{} ", self.cmdrep);
            let mut len = msg.len();
            while len < self.screencols {
                if self.screencols - len == pending.len() {
                    frame.push_str(&pending);
                    break;
                }
                frame.push_str(" ");
                len += 1;
            }
        }
    }
}

/// Clip to at most `max` bytes without splitting a character.
fn clip(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
