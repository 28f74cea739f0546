//! Cursor motions shared by Normal and Insert mode.

use core_keymap::NormalCommand;
use core_text::TextBuffer;

/// Apply `cmd` if it is a pure motion. Returns `None` for non-motions,
/// otherwise whether the buffer reported the move as applied.
pub(crate) fn apply_motion(cmd: NormalCommand, buffer: &mut TextBuffer) -> Option<bool> {
    let moved = match cmd {
        NormalCommand::MoveLeft => buffer.cursor_move_left(),
        NormalCommand::MoveRight => buffer.cursor_move_right(),
        NormalCommand::MoveUp => buffer.cursor_move_up(),
        NormalCommand::MoveDown => buffer.cursor_move_down(),
        NormalCommand::LineStart => {
            buffer.cursor_move_bol();
            true
        }
        NormalCommand::LineEnd => {
            buffer.cursor_move_eol();
            true
        }
        NormalCommand::BufferStart => {
            buffer.cursor_move_bof();
            true
        }
        NormalCommand::BufferEnd => {
            buffer.cursor_move_eof();
            true
        }
        _ => return None,
    };
    Some(moved)
}
