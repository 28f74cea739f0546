//! Buffer mutations.

use core_events::{KeyEvent, KeyToken, NamedKey};
use core_keymap::NormalCommand;
use core_text::{LINE_BREAK, TextBuffer};

/// Normal-mode deletions. `None` for commands that are not deletions.
pub(crate) fn apply_delete(cmd: NormalCommand, buffer: &mut TextBuffer) -> Option<bool> {
    match cmd {
        NormalCommand::DeleteChar => Some(buffer.remove()),
        NormalCommand::DeleteLine => Some(buffer.remove_current_line()),
        _ => None,
    }
}

/// Insert-mode editing keys (everything except Escape and motions).
/// Returns true when the key is an editing key, whether or not the buffer
/// changed.
pub(crate) fn apply_insert_key(key: &KeyEvent, buffer: &mut TextBuffer) -> bool {
    if key.is_chord() {
        return false;
    }
    match key.token {
        KeyToken::Char(c) => buffer.insert(c),
        KeyToken::Named(NamedKey::Tab) => buffer.insert('\t'),
        KeyToken::Named(NamedKey::Enter) => buffer.insert(LINE_BREAK),
        KeyToken::Named(NamedKey::Backspace) => {
            if buffer.cursor_move_left() {
                buffer.remove();
            }
        }
        KeyToken::Named(NamedKey::Delete) => {
            buffer.cursor_move_right();
            if buffer.remove() {
                buffer.cursor_move_left();
            }
        }
        KeyToken::Named(_) => return false,
    }
    true
}
