//! Status bar and message bar composition.
//!
//! Status bar format: `<name:.20> - <N> lines <(modified)>` on the left and
//! `<line>, <col>` (1-based) on the right, ending exactly at the last screen
//! column. When both do not fit, the left part is padded or cut to the width
//! and the right part is dropped.

use core_state::EditorState;
use std::time::Instant;

/// Text of the reverse-video status bar, exactly `screen_cols` bytes wide
/// unless the left part alone is narrower and no right part fits.
pub fn status_bar(state: &EditorState) -> String {
    let cols = state.screen_cols;
    let mut left = format!(
        "{:.20} - {} lines {}",
        state.file_name_display(),
        state.buffer().line_count(),
        if state.dirty { "(modified)" } else { "" }
    );
    let right = format!("{}, {}", state.cy + 1, state.cx + 1);
    if left.len() + right.len() <= cols {
        let pad = cols - left.len() - right.len();
        left.extend(std::iter::repeat_n(' ', pad));
        left.push_str(&right);
    } else if left.len() < cols {
        let pad = cols - left.len();
        left.extend(std::iter::repeat_n(' ', pad));
    } else {
        truncate_to(&mut left, cols);
    }
    left
}

/// Message bar text: the status message while it is fresh, cut to the screen width.
pub fn message_bar(state: &EditorState, now: Instant) -> String {
    let mut text = state.visible_status(now).unwrap_or_default().to_string();
    truncate_to(&mut text, state.screen_cols);
    text
}

fn truncate_to(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::time::Duration;

    fn state(content: &str, cols: u16) -> EditorState {
        EditorState::new(Buffer::from_bytes(content.as_bytes(), 8), (10, cols))
    }

    #[test]
    fn scratch_buffer_status() {
        let st = state("", 40);
        let bar = status_bar(&st);
        assert_eq!(bar, format!("[No Name] - 1 lines {}1, 1", " ".repeat(16)));
        assert_eq!(bar.len(), 40);
    }

    #[test]
    fn dirty_and_position_shown() {
        let mut st = state("a\nbcd\n", 50);
        st.file_name = Some(PathBuf::from("notes.txt"));
        st.dirty = true;
        st.cy = 1;
        st.cx = 2;
        let bar = status_bar(&st);
        assert!(bar.starts_with("notes.txt - 2 lines (modified)"));
        assert!(bar.ends_with("2, 3"));
        assert_eq!(bar.len(), 50);
    }

    #[test]
    fn long_names_are_cut_to_twenty() {
        let mut st = state("", 80);
        st.file_name = Some(PathBuf::from("a_really_long_file_name_indeed.txt"));
        assert!(status_bar(&st).starts_with("a_really_long_file_n - 1 lines"));
    }

    #[test]
    fn narrow_screen_drops_right_part() {
        let st = state("", 12);
        assert_eq!(status_bar(&st), "[No Name] - ");
    }

    #[test]
    fn message_bar_expires_and_truncates() {
        let mut st = state("", 5);
        st.set_status("-- INSERT --");
        let at = st.status.as_ref().unwrap().set_at;
        assert_eq!(message_bar(&st, at), "-- IN");
        assert_eq!(message_bar(&st, at + Duration::from_secs(6)), "");
    }
}
