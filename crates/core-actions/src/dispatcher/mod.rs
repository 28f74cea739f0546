//! Applies resolved keys to an editor's buffer.
//!
//! * `motion` - cursor movement, valid in both modes
//! * `edit`   - deletions and Insert-mode typing
//!
//! Mode changes are reported back as [`ModeChange`] so the editor owns the
//! single place where `mode` and `appending` are written.

mod edit;
mod motion;

use core_events::{KeyEvent, KeyToken, NamedKey};
use core_keymap::NormalCommand;
use core_text::{LINE_BREAK, TextBuffer};

pub(crate) use edit::apply_insert_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModeChange {
    EnterInsert { appending: bool },
}

/// Run one Normal-mode command.
pub(crate) fn dispatch_normal(cmd: NormalCommand, buffer: &mut TextBuffer) -> Option<ModeChange> {
    if motion::apply_motion(cmd, buffer).is_some() || edit::apply_delete(cmd, buffer).is_some() {
        return None;
    }
    let appending = match cmd {
        NormalCommand::Insert => false,
        NormalCommand::InsertLineStart => {
            buffer.cursor_move_bol();
            false
        }
        NormalCommand::Append => buffer.cursor_move_right(),
        NormalCommand::AppendLineEnd => {
            buffer.cursor_move_eol();
            buffer.cursor_move_right()
        }
        NormalCommand::OpenBelow => {
            buffer.cursor_move_eol();
            // A last line without a break ends on a code point; open after it.
            if buffer.rune_at_cursor() != Some(LINE_BREAK) {
                buffer.cursor_move_right();
            }
            buffer.insert(LINE_BREAK);
            false
        }
        NormalCommand::OpenAbove => {
            buffer.cursor_move_bol();
            buffer.insert(LINE_BREAK);
            buffer.cursor_move_up();
            false
        }
        // Motions and deletions returned above.
        _ => return None,
    };
    Some(ModeChange::EnterInsert { appending })
}

/// Insert-mode arrow keys. Returns true when `key` is an arrow.
pub(crate) fn insert_motion(key: &KeyEvent, buffer: &mut TextBuffer) -> bool {
    if key.is_chord() {
        return false;
    }
    let cmd = match key.token {
        KeyToken::Named(NamedKey::Left) => NormalCommand::MoveLeft,
        KeyToken::Named(NamedKey::Right) => NormalCommand::MoveRight,
        KeyToken::Named(NamedKey::Up) => NormalCommand::MoveUp,
        KeyToken::Named(NamedKey::Down) => NormalCommand::MoveDown,
        KeyToken::Named(NamedKey::Home) => NormalCommand::LineStart,
        KeyToken::Named(NamedKey::End) => NormalCommand::LineEnd,
        _ => return false,
    };
    motion::apply_motion(cmd, buffer).is_some()
}
