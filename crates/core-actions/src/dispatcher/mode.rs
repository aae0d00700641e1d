//! Mode transitions. Each switch updates the cursor shape and announces the
//! new mode in the message bar.

use anyhow::Result;
use core_state::{EditorState, Mode};
use core_terminal::{CursorShape, TerminalBackend};

pub(super) fn enter_insert(state: &mut EditorState, term: &mut dyn TerminalBackend) -> Result<()> {
    term.set_cursor_shape(CursorShape::Thin)?;
    state.mode = Mode::Insert;
    state.set_status("-- INSERT --");
    tracing::debug!(target: "actions.mode", "enter_insert");
    Ok(())
}

pub(super) fn enter_normal(state: &mut EditorState, term: &mut dyn TerminalBackend) -> Result<()> {
    term.set_cursor_shape(CursorShape::Thick)?;
    state.mode = Mode::Normal;
    state.set_status("-- NORMAL --");
    tracing::debug!(target: "actions.mode", "enter_normal");
    Ok(())
}
