//! Cursor motion and mode-dependent column clamping.

use crate::{EditorState, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl EditorState {
    /// Largest legal `cx` on the current row for the current mode.
    pub fn max_cx(&self) -> usize {
        let len = self.current_line_len();
        match self.mode {
            Mode::Normal => len.saturating_sub(1),
            Mode::Insert => len,
        }
    }

    /// Restore the cursor invariants: `cy` inside the buffer and `cx` inside the
    /// mode's bound for that row.
    pub fn clamp_cx(&mut self) {
        let last = self.buffer().line_count().saturating_sub(1);
        if self.cy > last {
            self.cy = last;
        }
        let max = self.max_cx();
        if self.cx > max {
            self.cx = max;
        }
    }

    /// Move one step. Horizontal steps write the sticky column; vertical steps
    /// snap to it.
    pub fn move_cursor(&mut self, dir: Direction) {
        let len = self.current_line_len();
        match dir {
            Direction::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.mode == Mode::Insert && self.cy > 0 {
                    self.cy -= 1;
                    self.cx = self.current_line_len();
                }
                self.last_cx = self.cx;
            }
            Direction::Right => {
                match self.mode {
                    Mode::Normal => {
                        if self.cx + 1 < len {
                            self.cx += 1;
                        }
                    }
                    Mode::Insert => {
                        if self.cx < len {
                            self.cx += 1;
                        } else if self.cy + 1 < self.buffer().line_count() {
                            self.cy += 1;
                            self.cx = 0;
                        }
                    }
                }
                self.last_cx = self.cx;
            }
            Direction::Up => {
                self.cy = self.cy.saturating_sub(1);
                self.snap_to_sticky_column();
            }
            Direction::Down => {
                if self.cy + 1 < self.buffer().line_count() {
                    self.cy += 1;
                }
                self.snap_to_sticky_column();
            }
        }
        let len = self.current_line_len();
        if self.cx > len {
            self.cx = len;
        }
    }

    fn snap_to_sticky_column(&mut self) {
        self.cx = self.last_cx.min(self.max_cx());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;

    fn state(content: &str) -> EditorState {
        EditorState::new(Buffer::from_bytes(content.as_bytes(), 8), (24, 80))
    }

    #[test]
    fn normal_right_stops_on_last_char() {
        let mut st = state("abc\n");
        for _ in 0..5 {
            st.move_cursor(Direction::Right);
        }
        assert_eq!((st.cx, st.last_cx), (2, 2));
    }

    #[test]
    fn insert_right_wraps_but_not_past_last_line() {
        let mut st = state("ab\ncd\n");
        st.mode = Mode::Insert;
        st.cx = 2;
        st.move_cursor(Direction::Right);
        assert_eq!((st.cy, st.cx), (1, 0));
        st.cx = 2;
        st.move_cursor(Direction::Right);
        assert_eq!((st.cy, st.cx), (1, 2));
    }

    #[test]
    fn insert_left_wraps_to_previous_line_end() {
        let mut st = state("abc\nd\n");
        st.mode = Mode::Insert;
        st.cy = 1;
        st.move_cursor(Direction::Left);
        assert_eq!((st.cy, st.cx, st.last_cx), (0, 3, 3));
    }

    #[test]
    fn normal_left_at_line_start_stays() {
        let mut st = state("abc\nd\n");
        st.cy = 1;
        st.move_cursor(Direction::Left);
        assert_eq!((st.cy, st.cx), (1, 0));
    }

    #[test]
    fn vertical_moves_keep_sticky_column() {
        let mut st = state("abcdef\nab\n\nabcdef\n");
        st.cx = 4;
        st.last_cx = 4;
        st.move_cursor(Direction::Down);
        assert_eq!((st.cy, st.cx), (1, 1));
        st.move_cursor(Direction::Down);
        assert_eq!((st.cy, st.cx), (2, 0));
        st.move_cursor(Direction::Down);
        assert_eq!((st.cy, st.cx), (3, 4));
        assert_eq!(st.last_cx, 4);
    }

    #[test]
    fn insert_vertical_snaps_to_line_end() {
        let mut st = state("abcdef\nab\n");
        st.mode = Mode::Insert;
        st.cx = 6;
        st.last_cx = 6;
        st.move_cursor(Direction::Down);
        assert_eq!(st.cx, 2);
        st.move_cursor(Direction::Up);
        assert_eq!(st.cx, 6);
    }

    #[test]
    fn vertical_moves_stop_at_buffer_edges() {
        let mut st = state("a\nb\n");
        st.move_cursor(Direction::Up);
        assert_eq!(st.cy, 0);
        st.move_cursor(Direction::Down);
        st.move_cursor(Direction::Down);
        assert_eq!(st.cy, 1);
    }

    #[test]
    fn clamp_cx_is_mode_dependent() {
        let mut st = state("abc\n");
        st.cx = 3;
        st.mode = Mode::Insert;
        st.clamp_cx();
        assert_eq!(st.cx, 3);
        st.mode = Mode::Normal;
        st.clamp_cx();
        assert_eq!(st.cx, 2);
        st.cy = 7;
        st.clamp_cx();
        assert_eq!(st.cy, 0);
    }
}
