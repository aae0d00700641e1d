//! In-memory terminal used by tests and headless drivers.
//!
//! Keys are replayed from a queue; every write is appended to `output`.
//! Reading past the end of the script is an error so a runaway prompt
//! loop fails instead of hanging.

use crate::{CursorShape, TerminalBackend};
use anyhow::{Result, bail};
use core_events::{Key, keys_from_bytes};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct ScriptedTerminal {
    keys: VecDeque<Key>,
    pub output: Vec<u8>,
    pub rows: u16,
    pub cols: u16,
    pub shapes: Vec<CursorShape>,
    pub entered: bool,
}

impl ScriptedTerminal {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            keys: VecDeque::new(),
            output: Vec::new(),
            rows,
            cols,
            shapes: Vec::new(),
            entered: false,
        }
    }

    pub fn push_key(&mut self, key: Key) -> &mut Self {
        self.keys.push_back(key);
        self
    }

    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = Key>) -> &mut Self {
        self.keys.extend(keys);
        self
    }

    /// Queue one key per byte (see [`core_events::Key::from_byte`]).
    pub fn push_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.keys.extend(keys_from_bytes(bytes));
        self
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn last_shape(&self) -> Option<CursorShape> {
        self.shapes.last().copied()
    }

    /// Lossy UTF-8 view of everything written so far.
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl TerminalBackend for ScriptedTerminal {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        match self.keys.pop_front() {
            Some(k) => Ok(k),
            None => bail!("key script exhausted"),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    fn window_size(&mut self) -> Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) -> Result<()> {
        self.shapes.push(shape);
        Ok(())
    }
}
