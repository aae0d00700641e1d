mod common;

use core_actions::dispatch;
use core_events::Key;
use core_render::build_frame;
use core_state::{EditorState, Mode};
use core_terminal::ScriptedTerminal;
use core_text::{Buffer, expand_tabs};
use proptest::prelude::*;
use std::time::Instant;

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        prop::sample::select(b"hjklia0$_wo xyz\t".to_vec()).prop_map(Key::Char),
        prop::sample::select(vec![
            Key::Esc,
            Key::Enter,
            Key::Backspace,
            Key::Delete,
            Key::Home,
            Key::End,
            Key::PageUp,
            Key::PageDown,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::Ctrl(b'h'),
        ]),
    ]
}

fn assert_invariants(st: &mut EditorState) {
    let buf = st.buffer();
    assert!(buf.line_count() >= 1);
    assert_eq!(buf.rows().len(), buf.renders().len());
    for (row, render) in buf.rows().iter().zip(buf.renders()) {
        assert_eq!(render, &expand_tabs(row, buf.tab_stop()));
    }
    assert!(st.cy < buf.line_count());
    let len = st.current_line_len();
    match st.mode {
        Mode::Normal => assert!(st.cx <= len.saturating_sub(1)),
        Mode::Insert => assert!(st.cx <= len),
    }

    build_frame(st, Instant::now()).unwrap();
    assert!(st.row_offset <= st.cy && st.cy < st.row_offset + st.screen_rows);
    assert!(st.col_offset <= st.rx && st.rx < st.col_offset + st.text_cols());
}

proptest! {
    #[test]
    fn invariants_hold_after_every_key(
        content in "[a-c \t\n]{0,40}",
        keys in prop::collection::vec(key_strategy(), 0..80),
    ) {
        let mut st = EditorState::new(Buffer::from_bytes(content.as_bytes(), 8), (8, 12));
        let mut term = ScriptedTerminal::new(8, 12);
        for key in keys {
            dispatch(key, &mut st, &mut term).unwrap();
            assert_invariants(&mut st);
        }
    }

    #[test]
    fn insert_then_backspace_restores_rows(
        content in "[a-z\t]{0,10}(\n[a-z\t]{0,10}){0,4}",
        moves in prop::collection::vec(prop::sample::select(b"hjkl".to_vec()), 0..12),
        c in prop::sample::select(b"xyz\t".to_vec()),
    ) {
        let mut st = EditorState::new(Buffer::from_bytes(content.as_bytes(), 8), (10, 40));
        let mut term = ScriptedTerminal::new(10, 40);
        for m in moves {
            dispatch(Key::Char(m), &mut st, &mut term).unwrap();
        }
        let before = st.buffer().rows().to_vec();
        for key in [Key::Char(b'i'), Key::Char(c), Key::Backspace] {
            dispatch(key, &mut st, &mut term).unwrap();
        }
        prop_assert_eq!(st.buffer().rows(), before.as_slice());
    }
}
