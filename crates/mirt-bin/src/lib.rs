//! Editor bootstrap and the top-level loop.
//!
//! Kept apart from `main` so a whole session can be driven against any
//! [`TerminalBackend`], including the scripted one used in tests.

use anyhow::{Context, Result};
use core_actions::{SetCommand, apply_set_command, dispatch, io_ops};
use core_config::RcFile;
use core_render::render_frame;
use core_render::writer::{Command, Writer};
use core_state::EditorState;
use core_terminal::TerminalBackend;
use core_text::{Buffer, DEFAULT_TAB_STOP};
use std::path::Path;
use tracing::info;

/// Build the initial editor state: size from the terminal, rc options, then
/// the named file. A file that cannot be read is fatal.
pub fn bootstrap(
    path: Option<&Path>,
    rc: &RcFile,
    term: &mut dyn TerminalBackend,
) -> Result<EditorState> {
    let size = term.window_size().context("window size")?;
    let mut state = EditorState::new(Buffer::new(DEFAULT_TAB_STOP), size);

    for sub in &rc.set_commands {
        apply_set_command(&mut state, &SetCommand::parse(sub));
    }

    if let Some(path) = path {
        let buffer = io_ops::open_file(path, state.options().tab_stop())?;
        state.replace_buffer(buffer);
        state.file_name = Some(path.to_path_buf());
    }

    state.set_status(":q to quit");
    info!(
        target: "runtime.startup",
        rows = size.0,
        cols = size.1,
        path = path.map(|p| p.display().to_string()),
        rc = rc.path.as_ref().map(|p| p.display().to_string()),
        lines = state.buffer().line_count(),
        "bootstrap_complete"
    );
    Ok(state)
}

/// Render, read a key, dispatch; until a command quits. The screen is cleared
/// on the way out.
pub fn run(state: &mut EditorState, term: &mut dyn TerminalBackend) -> Result<()> {
    loop {
        render_frame(state, term)?;
        let key = term.read_key()?;
        if dispatch(key, state, term)?.quit {
            break;
        }
    }
    term.write(&clear_screen()?)?;
    info!(target: "runtime", "shutdown");
    Ok(())
}

fn clear_screen() -> Result<Vec<u8>> {
    let mut w = Writer::new();
    w.push(Command::ClearScreen);
    w.move_to(0, 0);
    w.finish()
}
