//! Logical key codes consumed by the dispatcher and the prompt.
//!
//! The terminal adapter decodes raw input (including escape sequences for
//! special keys) into this closed set; nothing downstream ever sees a raw
//! escape sequence.

/// Byte sent by the terminal for the Backspace key in raw mode.
pub const BACKSPACE: u8 = 0x7f;
pub const ENTER: u8 = b'\r';
pub const ESC: u8 = 0x1b;

/// Control-byte for an ASCII letter (`ctrl(b'h') == 0x08`).
pub const fn ctrl(letter: u8) -> u8 {
    letter & 0x1f
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte not covered by another variant (printable ASCII, tab, ...).
    Char(u8),
    /// Control chord with a lowercase letter, e.g. `Ctrl(b'h')`.
    Ctrl(u8),
    Backspace,
    Enter,
    Esc,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Classify a single raw byte (no escape-sequence decoding).
    pub fn from_byte(b: u8) -> Self {
        match b {
            BACKSPACE => Key::Backspace,
            ENTER => Key::Enter,
            ESC => Key::Esc,
            b'\t' | b'\n' => Key::Char(b),
            0x01..=0x1a => Key::Ctrl(b - 1 + b'a'),
            _ => Key::Char(b),
        }
    }

    /// Printable ASCII accepted by the prompt line editor.
    pub fn prompt_byte(&self) -> Option<u8> {
        match *self {
            Key::Char(c) if c < 128 && !c.is_ascii_control() => Some(c),
            _ => None,
        }
    }

    /// Backspace or its `Ctrl-H` alias.
    pub fn is_backspace(&self) -> bool {
        matches!(self, Key::Backspace | Key::Ctrl(b'h'))
    }
}

/// Decode a byte string one key per byte. Convenient for scripting input.
pub fn keys_from_bytes(bytes: &[u8]) -> Vec<Key> {
    bytes.iter().copied().map(Key::from_byte).collect()
}
