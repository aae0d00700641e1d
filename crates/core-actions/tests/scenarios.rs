mod common;

use common::{editor, rows, run, status};
use core_events::Key;
use core_render::{WELCOME, build_frame, gutter_label};
use core_state::Mode;
use core_terminal::{CursorShape, TerminalBackend};
use pretty_assertions::assert_eq;
use std::time::Instant;

#[test]
fn startup_without_file_shows_welcome() {
    let (mut st, _term) = editor("");
    let frame = String::from_utf8(build_frame(&mut st, Instant::now()).unwrap()).unwrap();
    let lines: Vec<&str> = frame.split("\r\n").collect();
    assert_eq!(rows(&st), vec![""]);
    assert_eq!((st.cy, st.cx), (0, 0));
    assert!(lines[st.screen_rows / 3].contains(WELCOME));
    assert!(lines[st.screen_rows / 3].starts_with('~'));
}

#[test]
fn opening_file_splits_and_expands_tabs() {
    let (st, _term) = editor("hello\n\tworld\n");
    assert_eq!(rows(&st), vec!["hello", "\tworld"]);
    assert_eq!(st.buffer().render(1).unwrap(), b"        world");
}

#[test]
fn down_then_dollar_rests_on_last_char() {
    let (mut st, mut term) = editor("hello\n\tworld\n");
    run(&mut st, &mut term, b"j$");
    assert_eq!((st.cy, st.cx), (1, 5));
}

#[test]
fn insert_then_write_quit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("f.txt");
    std::fs::write(&path, "hello\n\tworld\n").unwrap();
    let (mut st, mut term) = editor("");
    st.replace_buffer(core_actions::io_ops::open_file(&path, 8).unwrap());
    st.file_name = Some(path.clone());

    term.push_bytes(b"iA").push_key(Key::Esc).push_bytes(b":wq\r");
    let result = common::drain(&mut st, &mut term);

    assert!(result.quit);
    assert_eq!(std::fs::read(&path).unwrap(), b"Ahello\n\tworld\n");
    assert!(!st.dirty);
}

#[test]
fn word_motion_skips_leading_tab_on_next_line() {
    let (mut st, mut term) = editor("hello\n\tworld\n");
    run(&mut st, &mut term, b"w");
    assert_eq!((st.cy, st.cx), (1, 1));
    assert_eq!(st.last_cx, 1);
}

#[test]
fn hybrid_line_numbers_from_commands() {
    let content: String = (1..=10).map(|i| format!("{i}\n")).collect();
    let (mut st, mut term) = editor(&content);
    run(&mut st, &mut term, b":set number\r:set relativenumber\rjjj");
    assert_eq!(st.cy, 3);
    st.refresh_line_number_width();
    assert_eq!(st.line_number_width, 4);
    assert_eq!(gutter_label(&st, 3).as_deref(), Some("4   "));
    assert_eq!(gutter_label(&st, 5).as_deref(), Some("  2 "));
}

#[test]
fn mode_switches_change_cursor_shape_and_status() {
    let (mut st, mut term) = editor("abc\n");
    run(&mut st, &mut term, b"i");
    assert_eq!(st.mode, Mode::Insert);
    assert_eq!(term.last_shape(), Some(CursorShape::Thin));
    assert_eq!(status(&st), "-- INSERT --");
    term.push_key(Key::Esc);
    common::drain(&mut st, &mut term);
    assert_eq!(st.mode, Mode::Normal);
    assert_eq!(term.last_shape(), Some(CursorShape::Thick));
    assert_eq!(status(&st), "-- NORMAL --");
}

#[test]
fn prompt_is_drawn_on_bottom_row() {
    let (mut st, mut term) = editor("abc\n");
    term.push_bytes(b":se");
    term.push_key(Key::Esc);
    common::drain(&mut st, &mut term);
    let out = term.output_text();
    assert!(out.contains("\x1b[24;1H\x1b[K:se\x1b[24;4H"), "{out:?}");
    assert_eq!(term.window_size().unwrap(), (24, 80));
}
