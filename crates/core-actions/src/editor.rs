//! Modal editor widget.

use crate::dispatcher::{self, ModeChange};
use crate::mode::Mode;
use core_config::Config;
use core_events::{KeyEvent, KeyToken, NamedKey};
use core_keymap::{
    CommandTrie, DEFAULT_LEADER, NormalCommand, Recognition, SequenceRecognizer, build_normal_trie,
    default_normal_trie, default_sequences, normal_binding,
};
use core_model::Focusable;
use core_render::{RenderSurface, Viewport, paint};
use core_text::TextBuffer;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// One editing pane: a buffer, a mode, a viewport and the Normal-mode key
/// recognizer. Every key is handled to completion before the next.
#[derive(Debug, Clone)]
pub struct ModalEditor {
    buffer: TextBuffer,
    mode: Mode,
    appending: bool,
    viewport: Viewport,
    recognizer: SequenceRecognizer<NormalCommand>,
    focused: bool,
}

impl ModalEditor {
    /// Editor with the default sequences and a one second sequence timeout.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_parts(
            TextBuffer::new(),
            Viewport::new(width, height),
            default_normal_trie(DEFAULT_LEADER),
            Some(DEFAULT_TIMEOUT),
        )
    }

    /// Editor sized and keyed from configuration. Configured sequences are
    /// layered over the defaults; an invalid entry drops all configured
    /// sequences (logged at WARN) and keeps the defaults.
    pub fn with_config(config: &Config) -> Self {
        let input = config.input();
        let editor = config.editor();
        let defaults = default_sequences();
        let entries = defaults
            .iter()
            .map(|(keys, cmd)| (*keys, cmd.name()))
            .chain(
                input
                    .sequences
                    .iter()
                    .map(|(keys, name)| (keys.as_str(), name.as_str())),
            );
        let trie = match build_normal_trie(entries, input.leader) {
            Ok(trie) => trie,
            Err(error) => {
                warn!(target: "editor", %error, "sequence_config_rejected");
                default_normal_trie(input.leader)
            }
        };
        let mut buffer = TextBuffer::new();
        buffer.set_wrap_width(editor.wrap());
        Self::with_parts(
            buffer,
            Viewport::new(usize::from(editor.width), usize::from(editor.height)),
            trie,
            input.sequence_timeout(),
        )
    }

    fn with_parts(
        buffer: TextBuffer,
        viewport: Viewport,
        trie: CommandTrie<NormalCommand>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            buffer,
            mode: Mode::Normal,
            appending: false,
            viewport,
            recognizer: SequenceRecognizer::new(trie, timeout),
            focused: false,
        }
    }

    /// Replace the content. The cursor goes to the end of the buffer and the
    /// viewport scrolls to show it.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.recognizer.reset();
        self.viewport.x_scroll = 0;
        self.viewport.y_scroll = 0;
        let now = self.cursor_coords();
        self.viewport.follow((0, 0), now);
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// True while a multi-key sequence is waiting for more keys.
    pub fn is_pending(&self) -> bool {
        self.recognizer.is_pending()
    }

    /// When the pending sequence expires, if one is pending and expiry is on.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.recognizer.deadline()
    }

    /// Drop a pending sequence that is stale at `now`. Returns true when one
    /// was dropped.
    pub fn expire_pending(&mut self, now: Instant) -> bool {
        self.recognizer.expire(now)
    }

    /// `(column, line_index)` of the cursor.
    pub fn cursor_coords(&self) -> (usize, usize) {
        let (cursor, line) = self.buffer.position();
        (self.buffer.current_line().column_of(cursor), line)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        let at = self.cursor_coords();
        self.viewport.resize(width, height, at);
    }

    /// Paint the viewport; the cursor is shown only while focused.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        paint(surface, &self.buffer, &self.viewport, self.focused);
    }

    /// Process one key. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let before = self.cursor_coords();
        let consumed = match self.mode {
            Mode::Normal => self.handle_normal(key),
            Mode::Insert => self.handle_insert(key),
        };
        let after = self.cursor_coords();
        self.viewport.follow(before, after);
        consumed
    }

    fn handle_normal(&mut self, key: &KeyEvent) -> bool {
        self.recognizer.expire(key.timestamp);

        if is_escape(key) {
            self.recognizer.reset();
            return true;
        }

        match key.plain_char() {
            Some(c) => match self.recognizer.feed(c, key.timestamp) {
                Recognition::Unrecognized => {}
                Recognition::Pending | Recognition::Aborted => return true,
                Recognition::Complete(cmd) => {
                    self.run_normal(cmd);
                    return true;
                }
            },
            None if self.recognizer.is_pending() => {
                // Any non-character key cancels the sequence and is swallowed.
                self.recognizer.reset();
                return true;
            }
            None => {}
        }

        match normal_binding(key) {
            Some(cmd) => {
                self.run_normal(cmd);
                true
            }
            None => false,
        }
    }

    fn run_normal(&mut self, cmd: NormalCommand) {
        debug!(target: "editor", %cmd, cursor = self.buffer.cursor(), "normal_command");
        if let Some(ModeChange::EnterInsert { appending }) =
            dispatcher::dispatch_normal(cmd, &mut self.buffer)
        {
            self.appending = appending;
            self.set_mode(Mode::Insert);
        }
    }

    fn handle_insert(&mut self, key: &KeyEvent) -> bool {
        if is_escape(key) {
            self.set_mode(Mode::Normal);
            if self.appending {
                self.buffer.cursor_move_left();
                self.appending = false;
            }
            return true;
        }
        dispatcher::insert_motion(key, &mut self.buffer)
            || dispatcher::apply_insert_key(key, &mut self.buffer)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(target: "editor.mode", from = %self.mode, to = %mode, "mode_change");
            self.mode = mode;
        }
    }
}

fn is_escape(key: &KeyEvent) -> bool {
    matches!(key.token, KeyToken::Named(NamedKey::Esc)) && !key.is_chord()
}

impl Focusable for ModalEditor {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
        self.recognizer.reset();
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        ModalEditor::handle_key(self, key)
    }
}
