//! core-actions: the modal editor.
//!
//! [`ModalEditor`] wires a [`core_text::TextBuffer`] to Normal/Insert mode key
//! handling and a scrolling [`core_render::Viewport`]:
//!
//! 1. In Normal mode a key first goes to the sequence recognizer when a
//!    sequence is pending or the key can start one (`dd`, `<leader>g`, ...).
//!    Otherwise it is looked up in the single-key table.
//! 2. In Insert mode printable keys, Tab and Enter insert; Backspace, Delete
//!    and arrows edit or move; Escape returns to Normal.
//! 3. After every key the viewport follows the cursor in the direction it
//!    moved.
//!
//! Keys never fail. A key that does nothing is reported as not consumed so a
//! host can act on it.

mod dispatcher;
pub mod editor;
pub mod mode;

pub use editor::ModalEditor;
pub use mode::Mode;
