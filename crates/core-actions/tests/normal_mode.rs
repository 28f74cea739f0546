mod common;

use common::*;
use core_actions::Mode;
use core_events::NamedKey;
use pretty_assertions::assert_eq;

#[test]
fn append_then_escape_rests_on_inserted_char() {
    let mut e = editor("ab");
    typed(&mut e, "0ax");
    replay(&mut e, &[ESC]);
    assert_eq!(e.text(), "axb");
    assert_eq!(e.buffer().cursor(), 1);
    assert_eq!(e.mode(), Mode::Normal);
}

#[test]
fn append_on_second_char_inserts_after_it() {
    let mut e = editor("ab");
    typed(&mut e, "0l");
    assert_eq!(e.buffer().cursor(), 1);
    typed(&mut e, "ax");
    replay(&mut e, &[ESC]);
    assert_eq!(e.text(), "abx");
    assert_eq!(e.buffer().cursor(), 2);
    assert_eq!(e.buffer().rune_at_cursor(), Some('x'));
}

#[test]
fn append_at_end_of_last_line() {
    let mut e = editor("ab");
    typed(&mut e, "0Acd");
    replay(&mut e, &[ESC]);
    assert_eq!(e.text(), "abcd");
    assert_eq!(e.buffer().cursor(), 3);
}

#[test]
fn append_line_end_inside_multiline_buffer() {
    let mut e = editor("ab\ncd");
    typed(&mut e, "gAX");
    replay(&mut e, &[ESC]);
    assert_eq!(e.text(), "abX\ncd");
    // Nothing to step back over: `A` stopped on the line break.
    assert_eq!(e.buffer().cursor(), 3);
}

#[test]
fn insert_at_line_start() {
    let mut e = editor("ab\ncd");
    typed(&mut e, "I>");
    replay(&mut e, &[ESC]);
    assert_eq!(e.text(), "ab\n>cd");
}

#[test]
fn hjkl_and_arrows_move_the_same() {
    let mut a = editor("abc\ndef\nghi");
    let mut b = editor("abc\ndef\nghi");
    typed(&mut a, "gjlkh");
    replay(
        &mut b,
        &[
            Char('g'),
            Named(NamedKey::Down),
            Named(NamedKey::Right),
            Named(NamedKey::Up),
            Named(NamedKey::Left),
        ],
    );
    assert_eq!(a.buffer().cursor(), b.buffer().cursor());
    assert_eq!(a.buffer().cursor(), 0);
}

#[test]
fn line_start_and_end_variants() {
    let mut e = editor("hello\nworld");
    typed(&mut e, "g$");
    assert_eq!(e.buffer().cursor(), 5);
    typed(&mut e, "0");
    assert_eq!(e.buffer().cursor(), 0);
    replay(&mut e, &[Ctrl('e')]);
    assert_eq!(e.buffer().cursor(), 5);
    typed(&mut e, "^");
    assert_eq!(e.buffer().cursor(), 0);
    replay(&mut e, &[Named(NamedKey::End), Ctrl('a')]);
    assert_eq!(e.buffer().cursor(), 0);
}

#[test]
fn x_and_delete_remove_under_cursor() {
    let mut e = editor("abc");
    typed(&mut e, "gx");
    assert_eq!(e.text(), "bc");
    replay(&mut e, &[Named(NamedKey::Delete)]);
    assert_eq!(e.text(), "c");
    typed(&mut e, "xx");
    assert_eq!(e.text(), "");
}

#[test]
fn capital_d_removes_line() {
    let mut e = editor("one\ntwo\nthree");
    typed(&mut e, "gjlD");
    assert_eq!(e.text(), "one\nthree");
    // The index is kept, so the cursor lands on the next line's second column.
    assert_eq!(e.buffer().cursor(), 5);
    assert_eq!(e.buffer().rune_at_cursor(), Some('h'));
}

#[test]
fn open_line_below_and_above() {
    let mut e = editor("top\nbottom");
    typed(&mut e, "gonew");
    replay(&mut e, &[ESC]);
    assert_eq!(e.text(), "top\nnew\nbottom");

    typed(&mut e, "gOfirst");
    replay(&mut e, &[ESC]);
    assert_eq!(e.text(), "first\ntop\nnew\nbottom");
}

#[test]
fn every_key_is_safe_on_empty_buffer() {
    let mut e = editor("");
    let strokes: Vec<Stroke> = "hjkl0^$gGxDddIia"
        .chars()
        .map(Char)
        .chain([
            ESC,
            Named(NamedKey::Backspace),
            Named(NamedKey::Delete),
            Named(NamedKey::Enter),
            ESC,
            Char('A'),
            ESC,
            Char('o'),
            ESC,
            Char('O'),
            ESC,
        ])
        .collect();
    replay(&mut e, &strokes);
    assert!(e.buffer().cursor() <= e.buffer().len());
    assert_eq!(e.mode(), Mode::Normal);
}
