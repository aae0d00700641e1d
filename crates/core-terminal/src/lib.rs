//! Terminal backend abstraction and crossterm implementation.
//!
//! The editor core talks to the terminal only through [`TerminalBackend`]:
//! blocking key reads, whole-buffer writes, size queries and cursor shape.
//! Raw mode is a scoped acquisition: [`CrosstermBackend::enter_guard`]
//! returns a guard that restores the terminal on drop, which covers normal
//! exit, early `?` returns and unwinding panics alike.

use anyhow::Result;
use core_events::Key;
use crossterm::{
    cursor::SetCursorStyle,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{Write, stdout};
use std::ops::{Deref, DerefMut};

pub mod scripted;
pub use scripted::ScriptedTerminal;

/// Cursor shape: thin bar in Insert mode and prompts, block elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Thin,
    Thick,
}

impl CursorShape {
    fn style(self) -> SetCursorStyle {
        match self {
            // ESC [ 0 q
            CursorShape::Thin => SetCursorStyle::DefaultUserShape,
            // ESC [ 2 q
            CursorShape::Thick => SetCursorStyle::SteadyBlock,
        }
    }
}

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    /// Block until one logical key is available.
    fn read_key(&mut self) -> Result<Key>;
    /// Write and flush `bytes` as a single unit.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
    /// Window size as `(rows, cols)`.
    fn window_size(&mut self) -> Result<(u16, u16)>;
    fn set_cursor_shape(&mut self, shape: CursorShape) -> Result<()>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }

    /// Fallback size probe: park the cursor at the bottom-right corner and
    /// ask the terminal where it ended up (`ESC [ 6n`).
    fn probe_size_via_cursor(&mut self) -> Result<(u16, u16)> {
        let mut out = stdout();
        out.write_all(b"\x1b[999C\x1b[999B")?;
        out.flush()?;
        let (col, row) = crossterm::cursor::position()?;
        Ok((row + 1, col + 1))
    }
}

/// Map a crossterm key event into the editor's logical key set.
///
/// Returns `None` for keys the editor has no binding for (function keys,
/// non-ASCII characters, modifier-only events).
pub fn map_key_event(event: &KeyEvent) -> Option<Key> {
    let key = match event.code {
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            Key::Ctrl(c.to_ascii_lowercase() as u8)
        }
        KeyCode::Char(c) if c.is_ascii() => Key::Char(c as u8),
        KeyCode::Char(_) => return None,
        KeyCode::Tab => Key::Char(b'\t'),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        _ => return None,
    };
    Some(key)
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), CursorShape::Thick.style())?;
            self.entered = true;
            tracing::debug!(target: "terminal", "raw_mode_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), CursorShape::Thin.style())?;
            disable_raw_mode()?;
            self.entered = false;
            tracing::debug!(target: "terminal", "raw_mode_left");
        }
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read()? {
                Event::Key(ev) if ev.kind != KeyEventKind::Release => {
                    if let Some(key) = map_key_event(&ev) {
                        return Ok(key);
                    }
                    tracing::trace!(target: "terminal", code = ?ev.code, "unmapped_key");
                }
                _ => {}
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut out = stdout();
        out.write_all(bytes)?;
        out.flush()?;
        Ok(())
    }

    fn window_size(&mut self) -> Result<(u16, u16)> {
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 => Ok((rows, cols)),
            other => {
                tracing::debug!(target: "terminal", ?other, "window_size_fallback");
                self.probe_size_via_cursor()
            }
        }
    }

    fn set_cursor_shape(&mut self, shape: CursorShape) -> Result<()> {
        let mut out = stdout();
        queue!(out, shape.style())?;
        out.flush()?;
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl<'a> Deref for TerminalGuard<'a> {
    type Target = CrosstermBackend;

    fn deref(&self) -> &Self::Target {
        self.backend
    }
}

impl<'a> DerefMut for TerminalGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.backend
    }
}

impl<'a> Drop for TerminalGuard<'a> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.backend.leave();
        }
    }
}
