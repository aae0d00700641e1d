//! Single-line prompt editor used for `:` commands and "Save as".
//!
//! The template holds one `{}` placeholder; the text around it frames the
//! live input on the bottom screen row. Every iteration repaints the editor
//! frame, then overlays the prompt line and parks a thin cursor inside it.
//!
//! Accepted keys: Backspace / Ctrl-H, Delete, Left/Right, printable ASCII.
//! ESC cancels (empty result, status cleared); Enter submits non-empty input
//! and is ignored while the input is empty.

use anyhow::Result;
use core_events::Key;
use core_render::render_frame;
use core_render::writer::{Command, Writer};
use core_state::EditorState;
use core_terminal::{CursorShape, TerminalBackend};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PromptLine {
    pub input: String,
    pub cursor: usize,
}

/// What a key did to the prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Continue,
    Cancel,
    Submit(String),
}

impl PromptLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: Key) -> PromptStep {
        match key {
            k if k.is_backspace() => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input.remove(self.cursor);
                }
            }
            Key::Delete => {
                if self.cursor < self.input.len() {
                    self.input.remove(self.cursor);
                }
            }
            Key::Esc => return PromptStep::Cancel,
            Key::Enter => {
                if !self.input.is_empty() {
                    return PromptStep::Submit(std::mem::take(&mut self.input));
                }
            }
            Key::ArrowLeft => self.cursor = self.cursor.saturating_sub(1),
            Key::ArrowRight => {
                if self.cursor < self.input.len() {
                    self.cursor += 1;
                }
            }
            k => {
                if let Some(c) = k.prompt_byte() {
                    self.input.insert(self.cursor, char::from(c));
                    self.cursor += 1;
                }
            }
        }
        PromptStep::Continue
    }
}

/// Run the prompt until the user submits or cancels. Returns the input, or an
/// empty string on cancel.
pub fn prompt(
    state: &mut EditorState,
    term: &mut dyn TerminalBackend,
    template: &str,
) -> Result<String> {
    let (before, after) = template.split_once("{}").unwrap_or((template, ""));
    let (rows, _) = term.window_size()?;
    let bottom = rows.saturating_sub(1);
    let mut line = PromptLine::new();
    loop {
        render_frame(state, term)?;
        let mut w = Writer::new();
        w.move_to(0, bottom);
        w.push(Command::ClearToEol);
        w.text(before);
        w.text(&line.input);
        w.text(after);
        let col = before.len() + line.cursor;
        w.move_to(u16::try_from(col).unwrap_or(u16::MAX), bottom);
        term.write(&w.finish()?)?;
        term.set_cursor_shape(CursorShape::Thin)?;

        match line.handle_key(term.read_key()?) {
            PromptStep::Continue => {}
            PromptStep::Cancel => {
                state.set_status("");
                term.set_cursor_shape(CursorShape::Thick)?;
                tracing::debug!(target: "actions.prompt", template, "prompt_cancelled");
                return Ok(String::new());
            }
            PromptStep::Submit(input) => {
                term.set_cursor_shape(CursorShape::Thick)?;
                tracing::debug!(target: "actions.prompt", template, %input, "prompt_submitted");
                return Ok(input);
            }
        }
    }
}
