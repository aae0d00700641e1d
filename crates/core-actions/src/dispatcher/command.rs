//! `:` command execution (:w, :wq, :q, :q!, :set).

use super::DispatchResult;
use super::command_parser::{CommandParser, ParsedCommand, SetCommand};
use crate::{io_ops, prompt};
use anyhow::Result;
use core_state::EditorState;
use core_terminal::TerminalBackend;

/// Read a command on the prompt line and run it. Cancelling (or an empty
/// result) leaves "Aborted" in the message bar.
pub(super) fn prompt_command(
    state: &mut EditorState,
    term: &mut dyn TerminalBackend,
) -> Result<DispatchResult> {
    let input = prompt::prompt(state, term, ":{}")?;
    if input.is_empty() {
        state.set_status("Aborted");
        return Ok(DispatchResult::clean());
    }
    execute_command(&input, state, term)
}

pub fn execute_command(
    raw: &str,
    state: &mut EditorState,
    term: &mut dyn TerminalBackend,
) -> Result<DispatchResult> {
    let parsed = CommandParser::parse(raw);
    tracing::debug!(target: "runtime.command", ?parsed, "execute_command");
    let result = match parsed {
        ParsedCommand::Write => {
            io_ops::save(state, term)?;
            DispatchResult::clean()
        }
        ParsedCommand::WriteQuit => {
            if io_ops::save(state, term)? {
                DispatchResult::quit()
            } else {
                DispatchResult::clean()
            }
        }
        ParsedCommand::Quit => {
            if state.dirty {
                state.set_status("Unsaved changes. (add ! to override)");
                DispatchResult::clean()
            } else {
                DispatchResult::quit()
            }
        }
        ParsedCommand::ForceQuit => DispatchResult::quit(),
        ParsedCommand::Set(cmd) => {
            apply_set_command(state, &cmd);
            DispatchResult::clean()
        }
        ParsedCommand::Unknown(raw) => {
            tracing::debug!(target: "runtime.command", %raw, "unknown_command");
            state.set_status(format!("Unknown command: {raw}"));
            DispatchResult::clean()
        }
    };
    Ok(result)
}

/// Apply a `set` argument. Shared by `:set` and the rc file.
pub fn apply_set_command(state: &mut EditorState, cmd: &SetCommand) {
    match cmd {
        SetCommand::Toggle(opt, value) => state.set_option(*opt, *value),
        SetCommand::TabStop(n) => state.set_tab_stop(*n),
        SetCommand::Unknown(sub) => {
            state.set_status(format!("Unknown command: {sub}"));
        }
    }
}
