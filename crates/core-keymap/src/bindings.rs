//! Single-key Normal-mode bindings.

use crate::command::NormalCommand;
use core_events::{KeyEvent, KeyToken, ModMask, NamedKey};

/// Resolve one key pressed in Normal mode.
///
/// Only `Ctrl-a` and `Ctrl-e` are recognized chords; any other key held with
/// Ctrl, Alt, Meta or Super is unbound.
pub fn normal_binding(key: &KeyEvent) -> Option<NormalCommand> {
    use NormalCommand as C;

    if key.mods.contains(ModMask::CTRL) {
        return match key.token {
            KeyToken::Char('a') if key.mods == ModMask::CTRL => Some(C::LineStart),
            KeyToken::Char('e') if key.mods == ModMask::CTRL => Some(C::LineEnd),
            _ => None,
        };
    }
    if key.is_chord() {
        return None;
    }

    match key.token {
        KeyToken::Char(c) => match c {
            'h' => Some(C::MoveLeft),
            'l' => Some(C::MoveRight),
            'k' => Some(C::MoveUp),
            'j' => Some(C::MoveDown),
            '0' | '^' => Some(C::LineStart),
            '$' => Some(C::LineEnd),
            'g' => Some(C::BufferStart),
            'G' => Some(C::BufferEnd),
            'x' => Some(C::DeleteChar),
            'D' => Some(C::DeleteLine),
            'i' => Some(C::Insert),
            'I' => Some(C::InsertLineStart),
            'a' => Some(C::Append),
            'A' => Some(C::AppendLineEnd),
            'o' => Some(C::OpenBelow),
            'O' => Some(C::OpenAbove),
            _ => None,
        },
        KeyToken::Named(named) => match named {
            NamedKey::Left => Some(C::MoveLeft),
            NamedKey::Right => Some(C::MoveRight),
            NamedKey::Up => Some(C::MoveUp),
            NamedKey::Down => Some(C::MoveDown),
            NamedKey::Home => Some(C::LineStart),
            NamedKey::End => Some(C::LineEnd),
            NamedKey::Delete => Some(C::DeleteChar),
            _ => None,
        },
    }
}
