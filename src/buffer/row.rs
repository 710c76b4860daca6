//! Row: one logical line of text and its tab-expanded render form.

/// Tab stop width: each tab lands the next column on a multiple of this.
pub const TAB_STOP: usize = 4;

/// One logical line.
///
/// `content` is the raw byte sequence with no trailing newline; `render`
/// is the derived display form where each tab expands to between 1 and
/// [`TAB_STOP`] spaces. The render form is regenerated on every content
/// mutation, so no reader ever observes a stale expansion. The engine is
/// byte-oriented end to end: one byte is one rendered cell, tabs excepted.
#[derive(Debug, Clone)]
pub struct Row {
    content: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    /// Create a row from raw content, computing its render form.
    pub fn new(content: &[u8]) -> Self {
        Self {
            content: content.to_vec(),
            render: expand_tabs(content),
        }
    }

    /// Raw content bytes.
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Tab-expanded render bytes.
    #[inline]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Content length in bytes (= character cells before tab expansion).
    #[inline]
    pub const fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the row holds no content.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render length in cells.
    #[inline]
    pub const fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Replace the raw content, regenerating the render form.
    pub fn set_content(&mut self, content: &[u8]) {
        self.content.clear();
        self.content.extend_from_slice(content);
        self.regenerate();
    }

    /// Rebuild the render form from the current content.
    pub fn regenerate(&mut self) {
        self.render = expand_tabs(&self.content);
    }

    /// Map a character offset to its rendered column.
    ///
    /// Walks `content[0..cx)`: a tab consumes `TAB_STOP - (col % TAB_STOP)`
    /// cells, everything else exactly one. Offsets past the end are
    /// treated as the end of the row.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let mut rx = 0;
        for &byte in &self.content[..cx.min(self.content.len())] {
            if byte == b'\t' {
                rx += (TAB_STOP - 1) - (rx % TAB_STOP);
            }
            rx += 1;
        }
        rx
    }

    /// The content byte at `cx`, if in range.
    #[inline]
    pub fn byte(&self, cx: usize) -> Option<u8> {
        self.content.get(cx).copied()
    }
}

/// Expand tabs so that each stop lands on a multiple of [`TAB_STOP`].
fn expand_tabs(content: &[u8]) -> Vec<u8> {
    let tabs = content.iter().filter(|&&b| b == b'\t').count();
    let mut render = Vec::with_capacity(content.len() + tabs * (TAB_STOP - 1));
    for &byte in content {
        if byte == b'\t' {
            render.push(b' ');
            while render.len() % TAB_STOP != 0 {
                render.push(b' ');
            }
        } else {
            render.push(byte);
        }
    }
    render
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_expansion() {
        // Tab after one character: 3 spaces land `b` on column 4.
        let row = Row::new(b"a\tb");
        assert_eq!(row.render(), b"a   b");
        assert_eq!(row.cx_to_rx(1), 1);
        assert_eq!(row.cx_to_rx(2), 4);
        assert_eq!(row.cx_to_rx(3), 5);
    }

    #[test]
    fn test_tab_at_stop_consumes_full_width() {
        let row = Row::new(b"abcd\tx");
        assert_eq!(row.render(), b"abcd    x");
        assert_eq!(row.cx_to_rx(5), 8);
    }

    #[test]
    fn test_leading_tab() {
        let row = Row::new(b"\tx");
        assert_eq!(row.render(), b"    x");
        assert_eq!(row.cx_to_rx(1), 4);
    }

    #[test]
    fn test_cx_to_rx_monotone_and_strict() {
        let row = Row::new(b"a\t\tbc\td");
        let mut prev = row.cx_to_rx(0);
        for cx in 1..=row.len() {
            let rx = row.cx_to_rx(cx);
            assert!(rx >= prev + 1, "cx {cx}: {rx} vs {prev}");
            prev = rx;
        }
    }

    #[test]
    fn test_cx_to_rx_agrees_with_render_width() {
        // Full-row mapping must equal the rendered length.
        for content in [&b"a\tb"[..], b"\t\t", b"no tabs", b"", b"x\ty\tz"] {
            let row = Row::new(content);
            assert_eq!(row.cx_to_rx(row.len()), row.render_len());
        }
    }

    #[test]
    fn test_regenerate_is_stable() {
        let mut row = Row::new(b"a\tb\tc");
        let first = row.render().to_vec();
        row.regenerate();
        assert_eq!(row.render(), first);
    }

    #[test]
    fn test_set_content_refreshes_render() {
        let mut row = Row::new(b"old");
        row.set_content(b"new\t!");
        assert_eq!(row.content(), b"new\t!");
        assert_eq!(row.render(), b"new !");
    }

    #[test]
    fn test_cx_past_end_clamps() {
        let row = Row::new(b"ab");
        assert_eq!(row.cx_to_rx(99), 2);
    }
}
