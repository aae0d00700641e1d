//! Editor state: the single buffer, cursor/viewport coordinates, mode,
//! options and the transient status message.
//!
//! Invariants (hold between dispatcher invocations):
//! - the buffer has at least one row, and its render rows always match
//!   `expand_tabs(row, tab_stop)` (owned by `core_text::Buffer`);
//! - `cy < line_count`;
//! - Normal mode: `cx <= max(0, len(row) - 1)`; Insert mode: `cx <= len(row)`
//!   (see [`EditorState::clamp_cx`]);
//! - after [`EditorState::scroll`], `rx` is the render column of `cx` and the
//!   cursor lies inside the viewport rectangle.
//!
//! `last_cx` is the sticky column. Horizontal motions and edits write it;
//! vertical motions only read it.

use core_text::{Buffer, Position};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub mod cursor;
pub mod options;
pub mod viewport;

pub use cursor::Direction;
pub use options::{BoolOption, Options};

/// Rows reserved below the text area (status bar + message bar).
pub const RESERVED_ROWS: usize = 2;

/// How long a status message stays visible.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and commands; the cursor rests on a character.
    #[default]
    Normal,
    /// Text entry; the cursor may sit one past the last character.
    Insert,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    pub fn is_visible(&self, now: Instant) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < STATUS_MESSAGE_TTL
    }
}

#[derive(Debug, Clone)]
pub struct EditorState {
    buffer: Buffer,
    options: Options,
    pub cx: usize,
    pub cy: usize,
    pub rx: usize,
    pub last_cx: usize,
    pub row_offset: usize,
    pub col_offset: usize,
    pub screen_rows: usize,
    pub screen_cols: usize,
    pub file_name: Option<PathBuf>,
    pub dirty: bool,
    pub mode: Mode,
    pub status: Option<StatusMessage>,
    pub line_number_width: usize,
}

impl EditorState {
    /// Create editor state for a `(rows, cols)` window. An empty buffer is
    /// given its one empty line here.
    pub fn new(mut buffer: Buffer, window: (u16, u16)) -> Self {
        buffer.ensure_line();
        let mut options = Options::default();
        options.set_tab_stop(buffer.tab_stop());
        let mut state = Self {
            buffer,
            options,
            cx: 0,
            cy: 0,
            rx: 0,
            last_cx: 0,
            row_offset: 0,
            col_offset: 0,
            screen_rows: 0,
            screen_cols: 0,
            file_name: None,
            dirty: false,
            mode: Mode::Normal,
            status: None,
            line_number_width: 0,
        };
        state.resize(window);
        state
    }

    /// Apply a new window size; two rows are kept for the status and message bars.
    pub fn resize(&mut self, (rows, cols): (u16, u16)) {
        self.screen_rows = (rows as usize).saturating_sub(RESERVED_ROWS);
        self.screen_cols = cols as usize;
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Replace the buffer (file load); cursor and viewport return to the origin.
    pub fn replace_buffer(&mut self, mut buffer: Buffer) {
        buffer.ensure_line();
        buffer.set_tab_stop(self.options.tab_stop());
        self.buffer = buffer;
        self.cx = 0;
        self.cy = 0;
        self.rx = 0;
        self.last_cx = 0;
        self.row_offset = 0;
        self.col_offset = 0;
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn set_option(&mut self, opt: BoolOption, value: bool) {
        self.options.set(opt, value);
        tracing::debug!(target: "state.options", option = opt.name(), value, "option_set");
    }

    /// Change the tab stop and re-render every row. Zero is ignored.
    pub fn set_tab_stop(&mut self, tab_stop: usize) {
        if tab_stop == 0 {
            return;
        }
        self.options.set_tab_stop(tab_stop);
        self.buffer.set_tab_stop(tab_stop);
        tracing::debug!(target: "state.options", tab_stop, "tab_stop_set");
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = Some(StatusMessage {
            text: msg.into(),
            set_at: Instant::now(),
        });
    }

    /// Status text if one is set and younger than [`STATUS_MESSAGE_TTL`].
    pub fn visible_status(&self, now: Instant) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| m.is_visible(now))
            .map(|m| m.text.as_str())
    }

    pub fn file_name_display(&self) -> String {
        match &self.file_name {
            Some(p) => p.to_string_lossy().into_owned(),
            None => "[No Name]".to_string(),
        }
    }

    /// Untouched scratch buffer: no name, not dirty, a single empty line.
    pub fn is_fresh(&self) -> bool {
        !self.dirty && self.file_name.is_none() && self.buffer.is_blank()
    }

    pub fn current_line(&self) -> &[u8] {
        self.buffer.line(self.cy).unwrap_or_default()
    }

    pub fn current_line_len(&self) -> usize {
        self.buffer.line_len(self.cy)
    }

    pub fn cursor(&self) -> Position {
        Position::new(self.cy, self.cx)
    }

    pub fn set_cursor(&mut self, pos: Position) {
        self.cy = pos.line;
        self.cx = pos.byte;
    }

    /// Insert `c` at the cursor and step past it.
    pub fn insert_char(&mut self, c: u8) {
        let mut pos = self.cursor();
        self.buffer.insert_char(&mut pos, c);
        self.set_cursor(pos);
        self.last_cx = self.cx - 1;
        self.dirty = true;
    }

    /// Split the line at the cursor; the cursor moves to the start of the new line.
    pub fn insert_newline(&mut self) {
        let mut pos = self.cursor();
        self.buffer.insert_newline(&mut pos);
        self.set_cursor(pos);
        self.last_cx = 0;
        self.dirty = true;
    }

    /// Backspace at the cursor. No-op at the buffer origin.
    pub fn delete_char(&mut self) {
        let mut pos = self.cursor();
        if !self.buffer.delete_char(&mut pos) {
            return;
        }
        self.set_cursor(pos);
        self.last_cx = self.cx.saturating_sub(1);
        self.dirty = true;
    }

    /// Gutter width for the current options and line count.
    pub fn compute_line_number_width(&self) -> usize {
        if !self.options.line_numbers() {
            return 0;
        }
        let digits = self.buffer.line_count().max(1).to_string().len();
        (digits + 1).max(4)
    }

    pub fn refresh_line_number_width(&mut self) {
        self.line_number_width = self.compute_line_number_width();
    }
}
