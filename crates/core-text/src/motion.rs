//! Word motion (`w`).
//!
//! Byte classes: keyword (`[A-Za-z0-9_]`), whitespace, and everything else.
//! A hop first leaves the run of same-class bytes under the cursor, then
//! skips whitespace, wrapping across line ends. Landing on an empty line
//! ends the hop there. The position never moves past the last line; a hop
//! that runs off the end of the buffer stops at the last line's end and the
//! caller clamps it into the mode's column range.

use crate::{Buffer, Position, is_keyword, is_space};

/// Advance `pos` to the start of the next word.
pub fn word_forward(buf: &Buffer, pos: &mut Position) {
    let Some(row) = buf.line(pos.line) else {
        return;
    };

    if let Some(&b) = row.get(pos.byte)
        && !is_space(b)
    {
        let class = is_keyword(b);
        while pos.byte < row.len() && !is_space(row[pos.byte]) && is_keyword(row[pos.byte]) == class
        {
            pos.byte += 1;
        }
    }

    if pos.byte >= row.len() {
        if !wrap_to_next_line(buf, pos) {
            return;
        }
        if buf.line_len(pos.line) == 0 {
            return;
        }
    }

    skip_whitespace(buf, pos);
}

fn skip_whitespace(buf: &Buffer, pos: &mut Position) {
    loop {
        let Some(row) = buf.line(pos.line) else {
            return;
        };
        match row.get(pos.byte) {
            Some(&b) if is_space(b) => {
                pos.byte += 1;
                if pos.byte >= row.len() {
                    if !wrap_to_next_line(buf, pos) {
                        return;
                    }
                    if buf.line_len(pos.line) == 0 {
                        return;
                    }
                }
            }
            _ => return,
        }
    }
}

/// Move to the start of the next line. At the last line the position is
/// left at end-of-line and false is returned.
fn wrap_to_next_line(buf: &Buffer, pos: &mut Position) -> bool {
    if pos.line + 1 >= buf.line_count() {
        pos.byte = buf.line_len(pos.line);
        return false;
    }
    pos.line += 1;
    pos.byte = 0;
    true
}
