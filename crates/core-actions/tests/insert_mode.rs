mod common;

use common::*;
use core_actions::Mode;
use core_events::NamedKey;
use pretty_assertions::assert_eq;

#[test]
fn typing_into_empty_buffer() {
    let mut e = editor("");
    typed(&mut e, "ihello");
    replay(&mut e, &[Named(NamedKey::Enter), Char('w'), Named(NamedKey::Tab)]);
    assert_eq!(e.text(), "hello\nw\t");
    assert_eq!(e.mode(), Mode::Insert);
}

#[test]
fn enter_at_end_moves_to_trailing_line() {
    let mut e = editor("ab");
    typed(&mut e, "i");
    replay(&mut e, &[Named(NamedKey::Enter)]);
    assert_eq!(e.text(), "ab\n");
    assert!(e.buffer().at_end());
    assert_eq!(e.buffer().position(), (3, 1));
}

#[test]
fn backspace_deletes_left_within_line() {
    let mut e = editor("abc");
    typed(&mut e, "i");
    replay(&mut e, &[Named(NamedKey::Backspace)]);
    assert_eq!(e.text(), "ab");
    assert_eq!(e.buffer().cursor(), 2);
}

#[test]
fn backspace_stops_at_line_start() {
    let mut e = editor("ab\ncd");
    typed(&mut e, "gji");
    replay(&mut e, &[Named(NamedKey::Backspace)]);
    assert_eq!(e.text(), "ab\ncd");
    assert_eq!(e.buffer().cursor(), 3);
}

#[test]
fn delete_removes_code_point_after_cursor() {
    let mut e = editor("abcd");
    typed(&mut e, "gli");
    replay(&mut e, &[Named(NamedKey::Delete)]);
    assert_eq!(e.text(), "abd");
    assert_eq!(e.buffer().cursor(), 1);
}

#[test]
fn arrows_move_in_insert_mode() {
    let mut e = editor("ab\ncd");
    typed(&mut e, "gi");
    replay(&mut e, &[Named(NamedKey::Down), Named(NamedKey::Right)]);
    typed(&mut e, "X");
    assert_eq!(e.text(), "ab\ncXd");
}

#[test]
fn escape_without_append_keeps_cursor() {
    let mut e = editor("abc");
    typed(&mut e, "gli");
    replay(&mut e, &[ESC]);
    assert_eq!(e.buffer().cursor(), 1);
    assert_eq!(e.mode(), Mode::Normal);
}

#[test]
fn normal_command_letters_insert_literally() {
    let mut e = editor("");
    typed(&mut e, "idd");
    assert_eq!(e.text(), "dd");
    assert!(!e.is_pending());
}
