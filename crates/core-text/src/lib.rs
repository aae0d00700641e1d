//! Line buffer with a lockstep cache of tab-expanded render rows.
//!
//! Each row is the raw byte content of one file line (no terminating
//! newline). `renders[i]` is always `expand_tabs(rows[i], tab_stop)`; every
//! mutation regenerates the affected render rows before returning, so the
//! two sequences can never be observed out of sync. Columns are byte
//! counts: one byte is one display cell.

pub mod motion;

/// Default number of columns per hard tab.
pub const DEFAULT_TAB_STOP: usize = 8;

/// A position inside a buffer expressed as (line index, byte offset within that line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }
    pub fn origin() -> Self {
        Self { line: 0, byte: 0 }
    }
}

/// Expand hard tabs to spaces, advancing each tab to the next multiple of `tab_stop`.
pub fn expand_tabs(line: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let mut out = Vec::with_capacity(line.len());
    for &b in line {
        if b == b'\t' {
            let pad = tab_stop - (out.len() % tab_stop);
            out.resize(out.len() + pad, b' ');
        } else {
            out.push(b);
        }
    }
    out
}

/// Render column of byte offset `cx` in `line` (the length of `expand_tabs(&line[..cx])`).
pub fn render_column(line: &[u8], cx: usize, tab_stop: usize) -> usize {
    let tab_stop = tab_stop.max(1);
    let mut rx = 0;
    for &b in line.iter().take(cx) {
        if b == b'\t' {
            rx += tab_stop - (rx % tab_stop);
        } else {
            rx += 1;
        }
    }
    rx
}

/// Byte index of the first non-whitespace byte, or 0 for blank lines.
pub fn first_non_whitespace(line: &[u8]) -> usize {
    line.iter().position(|&b| !is_space(b)).unwrap_or(0)
}

/// C-locale `isspace`.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Keyword bytes for word motions: ASCII alphanumerics and underscore.
pub fn is_keyword(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    rows: Vec<Vec<u8>>,
    renders: Vec<Vec<u8>>,
    tab_stop: usize,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Buffer {
    /// An empty buffer (zero rows). Callers that need the one-empty-line
    /// invariant follow up with [`Buffer::ensure_line`].
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            renders: Vec::new(),
            tab_stop: tab_stop.max(1),
        }
    }

    /// Split file content on `\n`. A missing final newline is treated the
    /// same as a present one; empty content yields one empty line.
    pub fn from_bytes(content: &[u8], tab_stop: usize) -> Self {
        let mut buf = Self::new(tab_stop);
        let body = content.strip_suffix(b"\n").unwrap_or(content);
        if !content.is_empty() {
            for line in body.split(|&b| b == b'\n') {
                buf.append_row(line.to_vec());
            }
        }
        buf.ensure_line();
        buf
    }

    /// Guarantee at least one (empty) row exists.
    pub fn ensure_line(&mut self) {
        if self.rows.is_empty() {
            self.append_row(Vec::new());
        }
    }

    pub fn append_row(&mut self, line: Vec<u8>) {
        self.renders.push(expand_tabs(&line, self.tab_stop));
        self.rows.push(line);
    }

    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    pub fn line(&self, idx: usize) -> Option<&[u8]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    pub fn render(&self, idx: usize) -> Option<&[u8]> {
        self.renders.get(idx).map(Vec::as_slice)
    }

    /// Byte length of a line; 0 for out-of-range indices.
    pub fn line_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn renders(&self) -> &[Vec<u8>] {
        &self.renders
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Change the tab stop and regenerate every render row.
    pub fn set_tab_stop(&mut self, tab_stop: usize) {
        self.tab_stop = tab_stop.max(1);
        self.rerender_all();
    }

    pub fn rerender_all(&mut self) {
        let tab_stop = self.tab_stop;
        self.renders = self.rows.iter().map(|r| expand_tabs(r, tab_stop)).collect();
    }

    /// Render column of byte offset `cx` on line `idx`.
    pub fn render_column(&self, idx: usize, cx: usize) -> usize {
        self.line(idx)
            .map_or(0, |line| render_column(line, cx, self.tab_stop))
    }

    fn rerender(&mut self, idx: usize) {
        self.renders[idx] = expand_tabs(&self.rows[idx], self.tab_stop);
    }

    /// Insert byte `c` at `pos` and advance `pos` past it. An insert on the
    /// line just past the end appends a fresh row first.
    pub fn insert_char(&mut self, pos: &mut Position, c: u8) {
        if pos.line == self.rows.len() {
            self.append_row(Vec::new());
        }
        let row = &mut self.rows[pos.line];
        let at = pos.byte.min(row.len());
        row.insert(at, c);
        self.rerender(pos.line);
        pos.byte = at + 1;
    }

    /// Split the line at `pos` (or open an empty line above it when
    /// `pos.byte == 0`). The position moves to the start of the following line.
    pub fn insert_newline(&mut self, pos: &mut Position) {
        if pos.byte == 0 {
            self.rows.insert(pos.line, Vec::new());
            self.renders.insert(pos.line, Vec::new());
        } else {
            let row = &mut self.rows[pos.line];
            let at = pos.byte.min(row.len());
            let tail = row.split_off(at);
            self.rerender(pos.line);
            self.renders
                .insert(pos.line + 1, expand_tabs(&tail, self.tab_stop));
            self.rows.insert(pos.line + 1, tail);
        }
        pos.line += 1;
        pos.byte = 0;
    }

    /// Backspace semantics: remove the byte before `pos`, or join the line
    /// onto the previous one when `pos` is at a line start. Returns false
    /// (and leaves the buffer untouched) at the origin.
    pub fn delete_char(&mut self, pos: &mut Position) -> bool {
        if pos.line >= self.rows.len() || (pos.line == 0 && pos.byte == 0) {
            return false;
        }
        if pos.byte > 0 {
            let row = &mut self.rows[pos.line];
            let at = pos.byte.min(row.len()) - 1;
            row.remove(at);
            self.rerender(pos.line);
            pos.byte = at;
        } else {
            let prev = pos.line - 1;
            let tail = self.rows.remove(pos.line);
            self.renders.remove(pos.line);
            pos.byte = self.rows[prev].len();
            self.rows[prev].extend_from_slice(&tail);
            self.rerender(prev);
            pos.line = prev;
        }
        true
    }

    /// Serialized file contents: every row followed by exactly one `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(row);
            out.push(b'\n');
        }
        out
    }

    /// True for the untouched one-empty-line buffer.
    pub fn is_blank(&self) -> bool {
        self.rows.len() == 1 && self.rows[0].is_empty()
    }
}
