//! Key event and loop event types shared by the editor crates.
//!
//! Key events carry the instant at which the input source observed them. The
//! sequence recognizer compares these timestamps instead of reading a clock,
//! which keeps dispatch deterministic under test: replaying the same events
//! with the same timestamps always yields the same editor state.

use std::fmt;
use std::time::Instant;

/// Capacity of the bounded channel between the input task and the main loop.
pub const EVENT_CHANNEL_CAP: usize = 1024;

/// Top-level event enum consumed by the host event loop.
#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 { const CTRL=1; const ALT=2; const SHIFT=4; const META=8; const SUPER=16; }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F(u8),
}

/// Logical key identity: a Unicode code point or a named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyToken {
    Char(char),
    Named(NamedKey),
}

/// One discrete key press.
///
/// `SHIFT` is informational only for `KeyToken::Char`: the code point already
/// reflects the shifted character (`'A'`, `'$'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub token: KeyToken,
    pub mods: ModMask,
    pub timestamp: Instant,
}

impl KeyEvent {
    /// Unmodified key stamped with the current instant.
    pub fn new(token: KeyToken) -> Self {
        Self::from_parts(token, ModMask::empty(), Instant::now())
    }

    /// Key with modifiers stamped with the current instant.
    pub fn with_mods(token: KeyToken, mods: ModMask) -> Self {
        Self::from_parts(token, mods, Instant::now())
    }

    /// Create a key event with a caller supplied timestamp (primarily for tests).
    pub fn from_parts(token: KeyToken, mods: ModMask, timestamp: Instant) -> Self {
        Self {
            token,
            mods,
            timestamp,
        }
    }

    pub fn char(c: char) -> Self {
        Self::new(KeyToken::Char(c))
    }

    pub fn named(key: NamedKey) -> Self {
        Self::new(KeyToken::Named(key))
    }

    /// Ctrl or Alt held (Shift alone does not make a chord).
    pub fn is_chord(&self) -> bool {
        self.mods.intersects(ModMask::CTRL | ModMask::ALT | ModMask::META | ModMask::SUPER)
    }

    /// The code point of a plain (non-chord) character key.
    pub fn plain_char(&self) -> Option<char> {
        match self.token {
            KeyToken::Char(c) if !self.is_chord() => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.contains(ModMask::CTRL) {
            write!(f, "C-")?;
        }
        if self.mods.contains(ModMask::ALT) {
            write!(f, "A-")?;
        }
        match self.token {
            KeyToken::Char(c) => write!(f, "{c}"),
            KeyToken::Named(n) => write!(f, "<{n:?}>"),
        }
    }
}
