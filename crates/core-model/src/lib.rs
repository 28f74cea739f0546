//! core-model: composition of editor panes.
//!
//! * `focus`: the [`Focusable`] contract and the [`FocusRouter`] that routes
//!   keys to exactly one focused child.
//! * `layout`: cell geometry for side-by-side panes and the status row.

pub mod focus;
pub mod layout;

pub use focus::{FocusError, FocusRouter, Focusable};
pub use layout::{Layout, LayoutRegion};
