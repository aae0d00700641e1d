//! Insert mode keys.

use super::{DispatchResult, mode};
use anyhow::Result;
use core_events::Key;
use core_state::{Direction, EditorState};
use core_terminal::TerminalBackend;

pub(super) fn insert_key(
    key: Key,
    state: &mut EditorState,
    term: &mut dyn TerminalBackend,
) -> Result<DispatchResult> {
    match key {
        Key::Enter => state.insert_newline(),
        k if k.is_backspace() => state.delete_char(),
        Key::Delete => {
            state.move_cursor(Direction::Right);
            state.delete_char();
        }
        Key::Esc => {
            mode::enter_normal(state, term)?;
            state.cx = state.cx.saturating_sub(1);
        }
        Key::End => {
            state.cx = state.current_line_len();
            state.last_cx = state.cx;
        }
        Key::Char(c) if is_insertable(c) => state.insert_char(c),
        _ => {}
    }
    Ok(DispatchResult::clean())
}

/// Tab and anything that is not an ASCII control byte.
fn is_insertable(c: u8) -> bool {
    c == b'\t' || !c.is_ascii_control()
}
