#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, dispatch};
use core_state::EditorState;
use core_terminal::{ScriptedTerminal, TerminalBackend};
use core_text::Buffer;

pub const ROWS: u16 = 24;
pub const COLS: u16 = 80;

pub fn editor(content: &str) -> (EditorState, ScriptedTerminal) {
    editor_sized(content, ROWS, COLS)
}

pub fn editor_sized(content: &str, rows: u16, cols: u16) -> (EditorState, ScriptedTerminal) {
    let state = EditorState::new(Buffer::from_bytes(content.as_bytes(), 8), (rows, cols));
    (state, ScriptedTerminal::new(rows, cols))
}

/// Queue `bytes` as keys and dispatch until the script is consumed or a
/// command quits. Prompt keys are read from the same queue.
pub fn run(state: &mut EditorState, term: &mut ScriptedTerminal, bytes: &[u8]) -> DispatchResult {
    term.push_bytes(bytes);
    drain(state, term)
}

pub fn drain(state: &mut EditorState, term: &mut ScriptedTerminal) -> DispatchResult {
    let mut last = DispatchResult::clean();
    while term.pending_keys() > 0 {
        let key = term.read_key().unwrap();
        last = dispatch(key, state, term).unwrap();
        if last.quit {
            break;
        }
    }
    last
}

pub fn status(state: &EditorState) -> &str {
    state.status.as_ref().map(|m| m.text.as_str()).unwrap_or("")
}

pub fn rows(state: &EditorState) -> Vec<String> {
    state
        .buffer()
        .rows()
        .iter()
        .map(|r| String::from_utf8_lossy(r).into_owned())
        .collect()
}
