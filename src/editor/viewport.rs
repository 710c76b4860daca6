//! Viewport: keeping the cursor inside the visible window.

use super::Editor;

impl Editor {
    /// Recompute the rendered cursor column and clamp the scroll offsets.
    ///
    /// Runs once per frame, before composition. Afterwards
    /// `rowoff <= cy < rowoff + screenrows` and
    /// `coloff <= rx < coloff + screencols`; a cursor that has not left
    /// the window leaves both offsets untouched.
    pub(super) fn scroll(&mut self) {
        self.rx = self
            .buffer
            .row(self.cy)
            .map_or(0, |row| row.cx_to_rx(self.cx));

        if self.cy < self.rowoff {
            self.rowoff = self.cy;
        }
        if self.cy >= self.rowoff + self.screenrows {
            self.rowoff = self.cy - self.screenrows + 1;
        }
        if self.rx < self.coloff {
            self.coloff = self.rx;
        }
        if self.rx >= self.coloff + self.screencols {
            self.coloff = self.rx - self.screencols + 1;
        }
    }
}
