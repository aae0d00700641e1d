//! Modal key dispatcher.
//!
//! Sub-modules:
//! * `motion`  - cursor movement semantics
//! * `mode`    - mode transitions (Normal <-> Insert)
//! * `edit`    - Insert mode text mutation
//! * `command` - `:` prompt and command execution
//!
//! Arrow keys, Home and PageUp/PageDown behave the same in both modes and are
//! handled before the mode split. Every key ends with `clamp_cx`, so the
//! mode-dependent column bound holds between invocations.

use anyhow::Result;
use core_events::Key;
use core_state::{Direction, EditorState, Mode};
use core_terminal::TerminalBackend;

pub mod command;
pub mod command_parser;
mod edit;
mod mode;
mod motion;

/// Result of dispatching a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub quit: bool,
}

impl DispatchResult {
    pub fn clean() -> Self {
        Self { quit: false }
    }
    pub fn quit() -> Self {
        Self { quit: true }
    }
}

/// Apply one key to the editor. Returns `quit` when a command asked the editor
/// to exit. Errors are terminal I/O failures only; user-level problems are
/// reported through the status message.
pub fn dispatch(
    key: Key,
    state: &mut EditorState,
    term: &mut dyn TerminalBackend,
) -> Result<DispatchResult> {
    tracing::trace!(target: "actions.dispatch", ?key, mode = ?state.mode, "dispatch_key");
    let result = match key {
        Key::ArrowLeft => motion::step(state, Direction::Left),
        Key::ArrowRight => motion::step(state, Direction::Right),
        Key::ArrowUp => motion::step(state, Direction::Up),
        Key::ArrowDown => motion::step(state, Direction::Down),
        Key::Home => motion::line_start(state),
        Key::PageUp => motion::page(state, Direction::Up),
        Key::PageDown => motion::page(state, Direction::Down),
        _ => match state.mode {
            Mode::Normal => normal_key(key, state, term)?,
            Mode::Insert => edit::insert_key(key, state, term)?,
        },
    };
    state.clamp_cx();
    if result.quit {
        tracing::debug!(target: "actions.dispatch", "quit_requested");
    }
    Ok(result)
}

fn normal_key(
    key: Key,
    state: &mut EditorState,
    term: &mut dyn TerminalBackend,
) -> Result<DispatchResult> {
    let c = match key {
        Key::End => return Ok(motion::last_char(state)),
        Key::Char(c) => c,
        _ => return Ok(DispatchResult::clean()),
    };
    let result = match c {
        b'h' => motion::step(state, Direction::Left),
        b'j' => motion::step(state, Direction::Down),
        b'k' => motion::step(state, Direction::Up),
        b'l' => motion::step(state, Direction::Right),
        b'i' => {
            mode::enter_insert(state, term)?;
            DispatchResult::clean()
        }
        b'a' => {
            state.cx += 1;
            state.last_cx = state.cx;
            mode::enter_insert(state, term)?;
            DispatchResult::clean()
        }
        b'o' => {
            state.cx = state.current_line_len();
            state.insert_newline();
            mode::enter_insert(state, term)?;
            DispatchResult::clean()
        }
        b'0' => motion::line_start(state),
        b'$' => motion::last_char(state),
        b'_' => motion::first_non_blank(state),
        b'w' => motion::word(state),
        b':' => command::prompt_command(state, term)?,
        _ => DispatchResult::clean(),
    };
    Ok(result)
}
