#![allow(dead_code)] // Shared across integration test binaries; each uses a subset.

use core_actions::ModalEditor;
use core_events::{KeyEvent, KeyToken, ModMask, NamedKey};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub enum Stroke {
    Char(char),
    Named(NamedKey),
    Ctrl(char),
}

pub use Stroke::{Char, Ctrl, Named};

impl Stroke {
    pub fn at(self, timestamp: Instant) -> KeyEvent {
        match self {
            Stroke::Char(c) => KeyEvent::from_parts(KeyToken::Char(c), ModMask::empty(), timestamp),
            Stroke::Named(k) => KeyEvent::from_parts(KeyToken::Named(k), ModMask::empty(), timestamp),
            Stroke::Ctrl(c) => KeyEvent::from_parts(KeyToken::Char(c), ModMask::CTRL, timestamp),
        }
    }
}

pub const ESC: Stroke = Stroke::Named(NamedKey::Esc);

/// Editor seeded with `text`, cursor at end of buffer.
pub fn editor(text: &str) -> ModalEditor {
    editor_sized(text, 80, 24)
}

pub fn editor_sized(text: &str, width: usize, height: usize) -> ModalEditor {
    let mut e = ModalEditor::new(width, height);
    e.set_text(text);
    e
}

/// Feed strokes 10ms apart starting at `base`. Returns the instant after the last one.
pub fn replay_from(e: &mut ModalEditor, base: Instant, strokes: &[Stroke]) -> Instant {
    let mut t = base;
    for s in strokes {
        e.handle_key(&s.at(t));
        t += Duration::from_millis(10);
    }
    t
}

pub fn replay(e: &mut ModalEditor, strokes: &[Stroke]) {
    replay_from(e, Instant::now(), strokes);
}

/// Plain characters of `s` as strokes.
pub fn chars(s: &str) -> Vec<Stroke> {
    s.chars().map(Stroke::Char).collect()
}

pub fn typed(e: &mut ModalEditor, s: &str) {
    replay(e, &chars(s));
}
