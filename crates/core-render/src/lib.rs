//! Frame assembly.
//!
//! A frame is one contiguous write: hide cursor, home, text rows, status bar,
//! message bar, cursor placement, show cursor. Every frame is a full repaint;
//! each text row is terminated with an erase-to-end-of-line so stale content
//! from the previous frame never survives.
//!
//! Before drawing, the gutter width is recomputed and the viewport scrolled so
//! the cursor is visible (see `EditorState::scroll`).

use anyhow::Result;
use core_state::{BoolOption, EditorState};
use core_terminal::TerminalBackend;
use std::time::Instant;

pub mod status;
pub mod writer;

use writer::{Command, Writer};

pub const WELCOME: &str = concat!("Welcome to mirt -- version ", env!("CARGO_PKG_VERSION"));

/// Scroll, then build the bytes of a full frame.
pub fn build_frame(state: &mut EditorState, now: Instant) -> Result<Vec<u8>> {
    state.refresh_line_number_width();
    state.scroll();

    let mut w = Writer::new();
    w.push(Command::HideCursor);
    w.move_to(0, 0);
    draw_rows(state, &mut w);
    draw_status_bar(state, &mut w);
    draw_message_bar(state, now, &mut w);

    let x = state.rx - state.col_offset + state.line_number_width;
    let y = state.cy - state.row_offset;
    w.move_to(clamp_u16(x), clamp_u16(y));
    w.push(Command::ShowCursor);
    w.finish()
}

/// Build a frame for `state` and hand it to the terminal in one write.
pub fn render_frame(state: &mut EditorState, term: &mut dyn TerminalBackend) -> Result<()> {
    let frame = build_frame(state, Instant::now())?;
    tracing::trace!(
        target: "render.frame",
        bytes = frame.len(),
        row_offset = state.row_offset,
        col_offset = state.col_offset,
        "frame"
    );
    term.write(&frame)
}

/// Gutter text for `filerow`, exactly `line_number_width` bytes including the
/// trailing separator space. `None` when no number option is on.
///
/// With both options on, the cursor row shows its absolute number left-aligned
/// and every other row its distance from the cursor. With one option on,
/// numbers are right-aligned.
pub fn gutter_label(state: &EditorState, filerow: usize) -> Option<String> {
    let width = state.line_number_width;
    if width == 0 {
        return None;
    }
    let field = width - 1;
    let absolute = filerow + 1;
    let relative = filerow.abs_diff(state.cy);
    let opts = state.options();
    let label = match (
        opts.get(BoolOption::Number),
        opts.get(BoolOption::RelativeNumber),
    ) {
        (true, true) if relative == 0 => format!("{absolute:<field$} "),
        (true, true) | (false, true) => format!("{relative:>field$} "),
        (true, false) => format!("{absolute:>field$} "),
        (false, false) => return None,
    };
    Some(label)
}

fn draw_rows(state: &EditorState, w: &mut Writer) {
    let buf = state.buffer();
    let text_cols = state.text_cols();
    for y in 0..state.screen_rows {
        let filerow = y + state.row_offset;
        match buf.render(filerow) {
            None => {
                w.spaces(state.line_number_width);
                if state.is_fresh() && y == state.screen_rows / 3 {
                    w.text(welcome_line(state.screen_cols, text_cols));
                } else {
                    w.text("~");
                }
            }
            Some(render) => {
                if let Some(label) = gutter_label(state, filerow) {
                    w.push(Command::Dim);
                    w.text(label);
                    w.push(Command::NormalIntensity);
                }
                let start = state.col_offset.min(render.len());
                let end = (state.col_offset + text_cols).min(render.len());
                w.text(&render[start..end]);
            }
        }
        w.push(Command::ClearToEol);
        w.newline();
    }
}

/// Centred against the full window width, then cut to fit after the gutter.
fn welcome_line(screen_cols: usize, text_cols: usize) -> String {
    let mut line = String::new();
    let mut padding = screen_cols.saturating_sub(WELCOME.len()) / 2;
    if padding > 0 {
        line.push('~');
        padding -= 1;
    }
    line.extend(std::iter::repeat_n(' ', padding));
    line.push_str(WELCOME);
    line.truncate(text_cols);
    line
}

fn draw_status_bar(state: &EditorState, w: &mut Writer) {
    w.push(Command::Reverse);
    w.text(status::status_bar(state));
    w.push(Command::ResetStyle);
    w.newline();
}

fn draw_message_bar(state: &EditorState, now: Instant, w: &mut Writer) {
    w.push(Command::ClearToEol);
    w.text(status::message_bar(state, now));
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
