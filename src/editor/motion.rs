//! Cursor motion: single-cell moves, row wrapping, and word scans.

use super::Editor;
use crate::buffer::Row;
use crate::input::Key;

impl Editor {
    /// Apply one motion key.
    ///
    /// Left/right move within the row and wrap at the row boundaries;
    /// up/down change the row only, with `cy` allowed to sit one past the
    /// last row. Keys with no motion binding (`b`/`B` arrive here too)
    /// fall through, and every path ends with the end-of-row snap.
    pub(super) fn move_cursor(&mut self, key: Key) {
        match key {
            Key::Up | Key::Char(b'k') => {
                if self.cy != 0 {
                    self.cy -= 1;
                }
            }
            Key::Down | Key::Char(b'j') => {
                if self.cy < self.buffer.len() {
                    self.cy += 1;
                }
            }
            Key::Left | Key::Char(b'h') => {
                if self.cx != 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    // Wrap to the end of the previous row.
                    self.cy -= 1;
                    self.cx = self.buffer.row(self.cy).map_or(0, Row::len);
                }
            }
            Key::Right | Key::Char(b'l') => {
                if let Some(row) = self.buffer.row(self.cy) {
                    if self.cx < row.len() {
                        self.cx += 1;
                    } else if self.cx == row.len() {
                        // Wrap to the start of the next row.
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            Key::Char(c @ (b'w' | b'W' | b'e' | b'E')) => self.word_motion(c),
            _ => {}
        }

        // Snap to the end of the destination row; a cursor past the last
        // row has no row to index and sits at column 0.
        let rowlen = self.buffer.row(self.cy).map_or(0, Row::len);
        if self.cx > rowlen {
            self.cx = rowlen;
        }
    }

    /// Word motion scan.
    ///
    /// Steps past the current run of non-space bytes; the scan position is
    /// advanced before the terminators are examined, so the cursor lands
    /// one past the space that ends a run, and the punctuation probe for
    /// the lowercase variants looks one byte ahead of the position just
    /// consumed — at the end of the row that probe reads nothing and the
    /// scan simply stops. `w`/`W` then skip trailing spaces, and a scan
    /// that exhausts the row advances to column 0 of the next row.
    fn word_motion(&mut self, key: u8) {
        let Some(row) = self.buffer.row(self.cy) else {
            return;
        };
        let bytes = row.content();
        let size = row.len();

        if key == b'W' || key == b'E' {
            while self.cx < size {
                let space = bytes[self.cx].is_ascii_whitespace();
                self.cx += 1;
                if space {
                    break;
                }
            }
        } else {
            while self.cx < size {
                let space = bytes[self.cx].is_ascii_whitespace();
                self.cx += 1;
                if space {
                    break;
                }
                if bytes.get(self.cx).is_some_and(|b| b.is_ascii_punctuation()) {
                    break;
                }
            }
        }

        if key == b'W' || key == b'w' {
            while self.cx < size && bytes[self.cx] == b' ' {
                self.cx += 1;
            }
        }

        if self.cx >= size {
            self.cy += 1;
            self.cx = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Editor;
    use crate::input::Key;

    fn editor(lines: &[&[u8]]) -> Editor {
        let mut editor = Editor::new(24, 80);
        for line in lines {
            editor.buffer_mut().append_row(line);
        }
        editor
    }

    #[test]
    fn test_vertical_clamps() {
        let mut editor = editor(&[]);
        editor.move_cursor(Key::Down);
        assert_eq!(editor.cursor(), (0, 0));
        editor.move_cursor(Key::Up);
        assert_eq!(editor.cursor(), (0, 0));
    }

    #[test]
    fn test_down_stops_one_past_last_row() {
        let mut editor = editor(&[b"a", b"b", b"c"]);
        for _ in 0..5 {
            editor.move_cursor(Key::Down);
        }
        assert_eq!(editor.cursor(), (0, 3));
    }

    #[test]
    fn test_left_wraps_to_previous_row_end() {
        let mut editor = editor(&[b"abc", b"de"]);
        editor.cy = 1;
        editor.move_cursor(Key::Left);
        assert_eq!(editor.cursor(), (3, 0));
    }

    #[test]
    fn test_right_wraps_to_next_row_start() {
        let mut editor = editor(&[b"ab", b"cd"]);
        editor.cx = 2;
        editor.move_cursor(Key::Right);
        assert_eq!(editor.cursor(), (0, 1));
    }

    #[test]
    fn test_right_at_end_of_buffer_row_is_allowed_past_last_char() {
        let mut editor = editor(&[b"ab"]);
        editor.move_cursor(Key::Right);
        editor.move_cursor(Key::Right);
        assert_eq!(editor.cursor(), (2, 0));
        // One more wraps past the final row.
        editor.move_cursor(Key::Right);
        assert_eq!(editor.cursor(), (0, 1));
    }

    #[test]
    fn test_column_snaps_on_row_change() {
        let mut editor = editor(&[b"a long row", b"x"]);
        editor.cx = 8;
        editor.move_cursor(Key::Down);
        assert_eq!(editor.cursor(), (1, 1));
    }

    #[test]
    fn test_hjkl_aliases() {
        let mut editor = editor(&[b"ab", b"cd"]);
        editor.move_cursor(Key::Char(b'l'));
        assert_eq!(editor.cursor(), (1, 0));
        editor.move_cursor(Key::Char(b'j'));
        assert_eq!(editor.cursor(), (1, 1));
        editor.move_cursor(Key::Char(b'h'));
        assert_eq!(editor.cursor(), (0, 1));
        editor.move_cursor(Key::Char(b'k'));
        assert_eq!(editor.cursor(), (0, 0));
    }

    #[test]
    fn test_word_motion_lands_past_the_space() {
        let mut editor = editor(&[b"one two"]);
        editor.move_cursor(Key::Char(b'W'));
        // The scan consumes "one" and the space that ends it.
        assert_eq!(editor.cursor(), (4, 0));
    }

    #[test]
    fn test_word_motion_w_skips_trailing_spaces() {
        let mut editor = editor(&[b"one   two"]);
        editor.move_cursor(Key::Char(b'w'));
        assert_eq!(editor.cursor(), (6, 0));
    }

    #[test]
    fn test_lowercase_word_motion_stops_at_punctuation() {
        let mut editor = editor(&[b"ab,cd ef"]);
        editor.move_cursor(Key::Char(b'e'));
        // The probe sees the comma one byte ahead after consuming `b`.
        assert_eq!(editor.cursor(), (2, 0));
    }

    #[test]
    fn test_uppercase_word_motion_ignores_punctuation() {
        let mut editor = editor(&[b"ab,cd ef"]);
        editor.move_cursor(Key::Char(b'E'));
        assert_eq!(editor.cursor(), (6, 0));
    }

    #[test]
    fn test_word_motion_at_row_end_advances_to_next_row() {
        // The scan reaches the last byte without indexing out of bounds
        // and rolls over to the next row.
        let mut editor = editor(&[b"word", b"next"]);
        editor.move_cursor(Key::Char(b'w'));
        assert_eq!(editor.cursor(), (0, 1));
    }

    #[test]
    fn test_word_motion_from_last_character() {
        let mut editor = editor(&[b"abc", b"next"]);
        editor.cx = 2;
        editor.move_cursor(Key::Char(b'w'));
        assert_eq!(editor.cursor(), (0, 1));
    }

    #[test]
    fn test_word_motion_on_last_row_moves_past_buffer() {
        let mut editor = editor(&[b"end"]);
        editor.move_cursor(Key::Char(b'w'));
        assert_eq!(editor.cursor(), (0, 1));
    }

    #[test]
    fn test_word_motion_past_last_row_is_inert() {
        let mut editor = editor(&[b"end"]);
        editor.cy = 1;
        editor.move_cursor(Key::Char(b'w'));
        assert_eq!(editor.cursor(), (0, 1));
    }

    #[test]
    fn test_b_keys_only_snap() {
        let mut editor = editor(&[b"abc"]);
        editor.cx = 2;
        editor.move_cursor(Key::Char(b'b'));
        assert_eq!(editor.cursor(), (2, 0));
        editor.move_cursor(Key::Char(b'B'));
        assert_eq!(editor.cursor(), (2, 0));
    }
}
