//! Pane host: two editors side by side behind a focus router, a separator
//! column and a status line. Terminal-free so it can be driven from tests.

use core_actions::ModalEditor;
use core_config::Config;
use core_events::{Event, InputEvent, KeyEvent, KeyToken, ModMask, NamedKey};
use core_model::{FocusRouter, Focusable, Layout};
use core_render::{
    CellStyle, OffsetSurface, RenderSurface, StatusContext, build_status, draw_status,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};

const PANE_COUNT: u16 = 2;
const SEPARATOR: char = '│';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Redraw,
    Quit,
}

pub(crate) struct App {
    panes: FocusRouter<ModalEditor>,
    layout: Layout,
    file_name: Option<PathBuf>,
}

impl App {
    /// Build the panes for a `(columns, rows)` screen, each seeded with `seed`.
    /// The first pane starts focused.
    pub(crate) fn new(config: &Config, seed: &str, file_name: Option<PathBuf>, size: (u16, u16)) -> Self {
        let mut panes = FocusRouter::new();
        for _ in 0..PANE_COUNT {
            let mut editor = ModalEditor::with_config(config);
            editor.set_text(seed);
            panes.push(editor);
        }
        let mut app = Self {
            panes,
            layout: Layout::columns(size.0, size.1, PANE_COUNT),
            file_name,
        };
        app.relayout(size.0, size.1);
        app.panes.focus();
        app
    }

    pub(crate) fn panes(&self) -> &FocusRouter<ModalEditor> {
        &self.panes
    }

    fn relayout(&mut self, width: u16, height: u16) {
        self.layout = Layout::columns(width, height, PANE_COUNT);
        for (editor, region) in self.panes.children_mut().iter_mut().zip(self.layout.panes()) {
            editor.resize(usize::from(region.width), usize::from(region.height));
        }
        debug!(target: "runtime", width, height, "relayout");
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> Flow {
        match event {
            Event::Input(InputEvent::Key(key)) => self.handle_key(key),
            Event::Input(InputEvent::Resize(w, h)) => {
                self.relayout(*w, *h);
                Flow::Redraw
            }
            Event::Shutdown => Flow::Quit,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Flow {
        if is_quit(key) {
            return Flow::Quit;
        }
        if key.token == KeyToken::Named(NamedKey::F(2)) && !key.is_chord() {
            match self.panes.focus_next() {
                Ok(index) => debug!(target: "focus", index, "pane_focused"),
                Err(error) => warn!(target: "focus", %error, "pane_focus_failed"),
            }
            return Flow::Redraw;
        }
        if self.panes.handle_key(key) {
            Flow::Redraw
        } else {
            Flow::Continue
        }
    }

    /// Deadline of the focused pane's pending key sequence.
    pub(crate) fn pending_deadline(&self) -> Option<Instant> {
        self.panes.focused().and_then(ModalEditor::pending_deadline)
    }

    pub(crate) fn expire_pending(&mut self, now: Instant) -> bool {
        self.panes
            .focused_mut()
            .is_some_and(|editor| editor.expire_pending(now))
    }

    pub(crate) fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for (editor, region) in self.panes.children().iter().zip(self.layout.panes()) {
            let mut pane = OffsetSurface::new(&mut *surface, region.x, region.y);
            editor.render(&mut pane);
        }
        let text_rows = self.layout.status_row().unwrap_or(0);
        for &col in self.layout.separators() {
            for row in 0..text_rows {
                surface.set_cell(col, row, Some(SEPARATOR), CellStyle::Normal);
            }
        }
        if let Some(row) = self.layout.status_row() {
            let text = self.status_text();
            draw_status(surface, row, self.layout.width(), &text);
        }
    }

    fn status_text(&self) -> String {
        let Some(editor) = self.panes.focused() else {
            return String::new();
        };
        let (col, line) = editor.cursor_coords();
        build_status(&StatusContext {
            mode: editor.mode().label(),
            line,
            col,
            file_name: self.file_name.as_deref(),
            pane: self.panes.focused_index().map(|i| (i, self.panes.len())),
        })
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.mods.contains(ModMask::CTRL) && matches!(key.token, KeyToken::Char('q' | 'c'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_actions::Mode;
    use core_render::CellGrid;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn app(seed: &str) -> App {
        App::new(&Config::default(), seed, None, (61, 3))
    }

    fn key(k: KeyEvent) -> Event {
        Event::Input(InputEvent::Key(k))
    }

    fn screen(app: &App) -> CellGrid {
        let mut grid = CellGrid::new(app.layout.width(), app.layout.height());
        app.draw(&mut grid);
        grid
    }

    #[test]
    fn draws_both_panes_separator_and_status() {
        let app = app("hello");
        let grid = screen(&app);
        assert_eq!(
            grid.lines(),
            vec![
                format!("hello{}│hello", " ".repeat(25)),
                format!("{}│", " ".repeat(30)),
                "[NORMAL] [No Name] Ln 1, Col 6 | pane 1/2".to_string(),
            ]
        );
        assert_eq!(grid.cursor_cell(), Some((5, 0)));
    }

    #[test]
    fn f2_moves_focus_and_keys_follow() {
        let mut app = app("hello");
        assert_eq!(app.handle_event(&key(KeyEvent::named(NamedKey::F(2)))), Flow::Redraw);
        assert_eq!(app.panes().focused_index(), Some(1));
        assert_eq!(app.handle_event(&key(KeyEvent::char('0'))), Flow::Redraw);
        app.handle_event(&key(KeyEvent::char('x')));
        assert_eq!(app.panes().children()[0].text(), "hello");
        assert_eq!(app.panes().children()[1].text(), "ello");

        let grid = screen(&app);
        assert_eq!(grid.cursor_cell(), Some((31, 0)));
        assert!(grid.row_text(2).contains("pane 2/2"));
    }

    #[test]
    fn insert_mode_shows_in_status() {
        let mut app = app("");
        app.handle_event(&key(KeyEvent::char('i')));
        assert_eq!(app.panes().focused().map(ModalEditor::mode), Some(Mode::Insert));
        assert!(screen(&app).row_text(2).starts_with("[INSERT]"));
    }

    #[test]
    fn ctrl_q_and_shutdown_quit() {
        let mut app = app("");
        let ctrl_q = KeyEvent::with_mods(KeyToken::Char('q'), ModMask::CTRL);
        assert_eq!(app.handle_event(&key(ctrl_q)), Flow::Quit);
        assert_eq!(app.handle_event(&Event::Shutdown), Flow::Quit);
    }

    #[test]
    fn unbound_key_needs_no_redraw() {
        let mut app = app("abc");
        assert_eq!(app.handle_event(&key(KeyEvent::char('q'))), Flow::Continue);
    }

    #[test]
    fn resize_relayouts_panes() {
        let mut app = app("abc");
        assert_eq!(app.handle_event(&Event::Input(InputEvent::Resize(41, 5))), Flow::Redraw);
        for editor in app.panes().children() {
            assert_eq!(editor.viewport().width, 20);
            assert_eq!(editor.viewport().height, 4);
        }
        assert_eq!(app.layout.separators(), &[20]);
    }

    #[test]
    fn pending_sequence_expires_after_deadline() {
        let mut app = app("a\nb");
        app.handle_event(&key(KeyEvent::char('d')));
        let deadline = app.pending_deadline().expect("pending after d");
        assert!(!app.expire_pending(deadline));
        assert!(app.expire_pending(deadline + Duration::from_millis(1)));
        assert_eq!(app.pending_deadline(), None);
        assert_eq!(app.panes().children()[0].text(), "a\nb");
    }

    #[test]
    fn status_uses_file_name() {
        let app = App::new(
            &Config::default(),
            "",
            Some(PathBuf::from("/tmp/notes.txt")),
            (61, 2),
        );
        assert!(screen(&app).row_text(1).starts_with("[NORMAL] notes.txt Ln 1, Col 1"));
    }
}
