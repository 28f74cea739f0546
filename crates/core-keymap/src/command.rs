//! Normal-mode command vocabulary and sequence notation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeymapError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("empty key sequence for `{0}`")]
    EmptySequence(String),

    #[error("unknown key name `<{0}>`")]
    UnknownKeyName(String),
}

/// Everything a Normal-mode key or key sequence can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalCommand {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    LineStart,
    LineEnd,
    BufferStart,
    BufferEnd,
    DeleteChar,
    DeleteLine,
    Insert,
    InsertLineStart,
    Append,
    AppendLineEnd,
    OpenBelow,
    OpenAbove,
}

impl NormalCommand {
    pub const ALL: [NormalCommand; 16] = [
        NormalCommand::MoveLeft,
        NormalCommand::MoveRight,
        NormalCommand::MoveUp,
        NormalCommand::MoveDown,
        NormalCommand::LineStart,
        NormalCommand::LineEnd,
        NormalCommand::BufferStart,
        NormalCommand::BufferEnd,
        NormalCommand::DeleteChar,
        NormalCommand::DeleteLine,
        NormalCommand::Insert,
        NormalCommand::InsertLineStart,
        NormalCommand::Append,
        NormalCommand::AppendLineEnd,
        NormalCommand::OpenBelow,
        NormalCommand::OpenAbove,
    ];

    /// Name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            NormalCommand::MoveLeft => "move_left",
            NormalCommand::MoveRight => "move_right",
            NormalCommand::MoveUp => "move_up",
            NormalCommand::MoveDown => "move_down",
            NormalCommand::LineStart => "line_start",
            NormalCommand::LineEnd => "line_end",
            NormalCommand::BufferStart => "buffer_start",
            NormalCommand::BufferEnd => "buffer_end",
            NormalCommand::DeleteChar => "delete_char",
            NormalCommand::DeleteLine => "delete_line",
            NormalCommand::Insert => "insert",
            NormalCommand::InsertLineStart => "insert_line_start",
            NormalCommand::Append => "append",
            NormalCommand::AppendLineEnd => "append_line_end",
            NormalCommand::OpenBelow => "open_below",
            NormalCommand::OpenAbove => "open_above",
        }
    }
}

impl fmt::Display for NormalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NormalCommand {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NormalCommand::ALL
            .into_iter()
            .find(|c| c.name() == trimmed)
            .ok_or_else(|| KeymapError::UnknownCommand(trimmed.to_string()))
    }
}

/// Expand sequence notation into code points.
///
/// `<leader>` becomes `leader` and `<lt>` a literal `<`; any other bracketed
/// name is rejected. A `<` with no closing `>` is taken literally.
pub fn parse_sequence(notation: &str, leader: char) -> Result<Vec<char>, KeymapError> {
    let mut keys = Vec::with_capacity(notation.len());
    let mut rest = notation;
    while let Some(c) = rest.chars().next() {
        if c == '<'
            && let Some(close) = rest.find('>')
        {
            let name = &rest[1..close];
            match name.to_ascii_lowercase().as_str() {
                "leader" => keys.push(leader),
                "lt" => keys.push('<'),
                _ => return Err(KeymapError::UnknownKeyName(name.to_string())),
            }
            rest = &rest[close + 1..];
            continue;
        }
        keys.push(c);
        rest = &rest[c.len_utf8()..];
    }
    if keys.is_empty() {
        return Err(KeymapError::EmptySequence(notation.to_string()));
    }
    Ok(keys)
}

/// Sequences available without any configuration.
pub fn default_sequences() -> Vec<(&'static str, NormalCommand)> {
    vec![
        ("dd", NormalCommand::DeleteLine),
        ("<leader>g", NormalCommand::BufferStart),
        ("<leader>G", NormalCommand::BufferEnd),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_round_trip_through_from_str() {
        for cmd in NormalCommand::ALL {
            assert_eq!(cmd.name().parse::<NormalCommand>(), Ok(cmd));
        }
    }

    #[test]
    fn unknown_name_is_error() {
        assert_eq!(
            "explode".parse::<NormalCommand>(),
            Err(KeymapError::UnknownCommand("explode".into()))
        );
    }

    #[test]
    fn leader_expands() {
        assert_eq!(parse_sequence("<leader>g", '\\'), Ok(vec!['\\', 'g']));
        assert_eq!(parse_sequence("<Leader>G", ','), Ok(vec![',', 'G']));
        assert_eq!(parse_sequence("dd", '\\'), Ok(vec!['d', 'd']));
    }

    #[test]
    fn literal_angle_brackets() {
        assert_eq!(parse_sequence("<lt>x", '\\'), Ok(vec!['<', 'x']));
        assert_eq!(parse_sequence("a<b", '\\'), Ok(vec!['a', '<', 'b']));
    }

    #[test]
    fn malformed_sequences_are_rejected() {
        assert_eq!(
            parse_sequence("<space>x", '\\'),
            Err(KeymapError::UnknownKeyName("space".into()))
        );
        assert_eq!(
            parse_sequence("", '\\'),
            Err(KeymapError::EmptySequence(String::new()))
        );
    }
}
