//! Cursor motions shared by both modes plus the Normal mode line motions.

use super::DispatchResult;
use core_state::{Direction, EditorState};
use core_text::{first_non_whitespace, motion::word_forward};

pub(super) fn step(state: &mut EditorState, dir: Direction) -> DispatchResult {
    state.move_cursor(dir);
    DispatchResult::clean()
}

/// `0` / Home.
pub(super) fn line_start(state: &mut EditorState) -> DispatchResult {
    state.cx = 0;
    state.last_cx = 0;
    DispatchResult::clean()
}

/// `$` / End in Normal mode: rest on the last character.
pub(super) fn last_char(state: &mut EditorState) -> DispatchResult {
    state.cx = state.current_line_len().saturating_sub(1);
    state.last_cx = state.cx;
    DispatchResult::clean()
}

/// `_`
pub(super) fn first_non_blank(state: &mut EditorState) -> DispatchResult {
    state.cx = first_non_whitespace(state.current_line());
    state.last_cx = state.cx;
    DispatchResult::clean()
}

/// `w`: one word forward, then settle onto a legal column.
pub(super) fn word(state: &mut EditorState) -> DispatchResult {
    let mut pos = state.cursor();
    word_forward(state.buffer(), &mut pos);
    state.set_cursor(pos);
    state.clamp_cx();
    state.last_cx = state.cx;
    DispatchResult::clean()
}

/// PageUp/PageDown: jump to the viewport edge, then a screenful further.
pub(super) fn page(state: &mut EditorState, dir: Direction) -> DispatchResult {
    let last = state.buffer().line_count().saturating_sub(1);
    state.cy = match dir {
        Direction::Up => state.row_offset.min(last),
        _ => (state.row_offset + state.screen_rows)
            .saturating_sub(1)
            .min(last),
    };
    state.clamp_cx();
    for _ in 0..state.screen_rows {
        state.move_cursor(dir);
    }
    DispatchResult::clean()
}
