//! Frame writer.
//!
//! Primitive terminal operations are collected in order and translated into
//! escape sequences in one pass, so a whole frame reaches the terminal as a
//! single write.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is emitted before `finish`.
//! * Positions are absolute with a (0,0) origin; caller ensures bounds.
//! * Raw text is copied byte-for-byte (file content need not be UTF-8).

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    MoveTo(u16, u16),
    ClearToEol,
    ClearScreen,
    Reverse,
    Dim,
    NormalIntensity,
    ResetStyle,
    Text(Vec<u8>),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn push(&mut self, cmd: Command) {
        self.cmds.push(cmd);
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }

    pub fn text<B: AsRef<[u8]>>(&mut self, bytes: B) {
        let bytes = bytes.as_ref();
        if !bytes.is_empty() {
            self.cmds.push(Command::Text(bytes.to_vec()));
        }
    }

    pub fn spaces(&mut self, n: usize) {
        if n > 0 {
            self.cmds.push(Command::Text(vec![b' '; n]));
        }
    }

    pub fn newline(&mut self) {
        self.cmds.push(Command::Text(b"\r\n".to_vec()));
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Translate the queued commands into bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::new();
        for c in self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearToEol => queue!(out, Clear(ClearType::UntilNewLine))?,
                Command::ClearScreen => queue!(out, Clear(ClearType::All))?,
                Command::Reverse => queue!(out, SetAttribute(Attribute::Reverse))?,
                Command::Dim => queue!(out, SetAttribute(Attribute::Dim))?,
                Command::NormalIntensity => {
                    queue!(out, SetAttribute(Attribute::NormalIntensity))?
                }
                Command::ResetStyle => queue!(out, SetAttribute(Attribute::Reset))?,
                Command::Text(bytes) => out.write_all(&bytes)?,
            }
        }
        Ok(out)
    }
}
