//! Keyboard focus delegation.
//!
//! A [`FocusRouter`] holds child widgets and at most one focused index. Keys
//! go to the focused child only. Focus moves are explicit: focusing one child
//! blurs the previous one, so at most one child ever reports `is_focused`.

use core_events::KeyEvent;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FocusError {
    #[error("no child at index {index} (router has {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("router has no children")]
    Empty,
}

/// A widget that can hold keyboard focus.
pub trait Focusable {
    fn focus(&mut self);
    fn blur(&mut self);
    fn is_focused(&self) -> bool;
    /// Returns true when the key was consumed.
    fn handle_key(&mut self, key: &KeyEvent) -> bool;
}

impl<T: Focusable + ?Sized> Focusable for Box<T> {
    fn focus(&mut self) {
        (**self).focus();
    }
    fn blur(&mut self) {
        (**self).blur();
    }
    fn is_focused(&self) -> bool {
        (**self).is_focused()
    }
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        (**self).handle_key(key)
    }
}

#[derive(Debug)]
pub struct FocusRouter<C> {
    children: Vec<C>,
    focused: Option<usize>,
    // Whether the router itself holds focus within its own parent.
    active: bool,
}

impl<C> Default for FocusRouter<C> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            focused: None,
            active: false,
        }
    }
}

impl<C: Focusable> FocusRouter<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child, blurred. Returns its index.
    pub fn push(&mut self, mut child: C) -> usize {
        child.blur();
        self.children.push(child);
        self.children.len() - 1
    }

    pub fn children(&self) -> &[C] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [C] {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused(&self) -> Option<&C> {
        self.focused.and_then(|i| self.children.get(i))
    }

    pub fn focused_mut(&mut self) -> Option<&mut C> {
        self.focused.and_then(|i| self.children.get_mut(i))
    }

    /// Give focus to the child at `index`, blurring the previous holder.
    pub fn focus_child(&mut self, index: usize) -> Result<(), FocusError> {
        let len = self.children.len();
        if index >= len {
            return Err(FocusError::OutOfRange { index, len });
        }
        if let Some(prev) = self.focused
            && prev != index
        {
            self.children[prev].blur();
        }
        self.children[index].focus();
        debug!(target: "focus", from = ?self.focused, to = index, "focus_child");
        self.focused = Some(index);
        Ok(())
    }

    /// Move focus to the next child, wrapping; focuses the first child when
    /// nothing is focused.
    pub fn focus_next(&mut self) -> Result<usize, FocusError> {
        if self.children.is_empty() {
            return Err(FocusError::Empty);
        }
        let next = match self.focused {
            Some(i) => (i + 1) % self.children.len(),
            None => 0,
        };
        self.focus_child(next)?;
        Ok(next)
    }

    /// Blur the focused child, leaving nothing focused.
    pub fn blur_child(&mut self) {
        if let Some(i) = self.focused.take() {
            self.children[i].blur();
            debug!(target: "focus", index = i, "blur_child");
        }
    }
}

/// A router nests inside another router: focusing it restores focus to its
/// last focused child (or the first one), blurring it blurs that child but
/// remembers the index.
impl<C: Focusable> Focusable for FocusRouter<C> {
    fn focus(&mut self) {
        self.active = true;
        let target = self.focused.unwrap_or(0);
        if let Some(child) = self.children.get_mut(target) {
            child.focus();
            self.focused = Some(target);
        }
    }

    fn blur(&mut self) {
        self.active = false;
        if let Some(child) = self.focused.and_then(|i| self.children.get_mut(i)) {
            child.blur();
        }
    }

    fn is_focused(&self) -> bool {
        self.active
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match self.focused_mut() {
            Some(child) => child.handle_key(key),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{KeyEvent, NamedKey};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct Probe {
        focused: bool,
        keys: usize,
    }

    impl Focusable for Probe {
        fn focus(&mut self) {
            self.focused = true;
        }
        fn blur(&mut self) {
            self.focused = false;
        }
        fn is_focused(&self) -> bool {
            self.focused
        }
        fn handle_key(&mut self, _key: &KeyEvent) -> bool {
            self.keys += 1;
            true
        }
    }

    fn router(n: usize) -> FocusRouter<Probe> {
        let mut r = FocusRouter::new();
        for _ in 0..n {
            r.push(Probe::default());
        }
        r
    }

    fn focus_flags(r: &FocusRouter<Probe>) -> Vec<bool> {
        r.children().iter().map(|c| c.is_focused()).collect()
    }

    #[test]
    fn unfocused_router_drops_keys() {
        let mut r = router(2);
        assert!(!r.handle_key(&KeyEvent::char('x')));
        assert_eq!(r.children()[0].keys + r.children()[1].keys, 0);
    }

    #[test]
    fn keys_reach_only_focused_child() {
        let mut r = router(2);
        r.focus_child(1).unwrap();
        assert!(r.handle_key(&KeyEvent::char('x')));
        assert!(r.handle_key(&KeyEvent::named(NamedKey::Esc)));
        assert_eq!(r.children()[0].keys, 0);
        assert_eq!(r.children()[1].keys, 2);
    }

    #[test]
    fn focus_moves_exclusively() {
        let mut r = router(3);
        r.focus_child(0).unwrap();
        r.focus_child(2).unwrap();
        assert_eq!(focus_flags(&r), vec![false, false, true]);
        assert_eq!(r.focused_index(), Some(2));
    }

    #[test]
    fn out_of_range_focus_is_rejected() {
        let mut r = router(2);
        r.focus_child(0).unwrap();
        assert_eq!(
            r.focus_child(5),
            Err(FocusError::OutOfRange { index: 5, len: 2 })
        );
        assert_eq!(r.focused_index(), Some(0));
    }

    #[test]
    fn focus_next_wraps() {
        let mut r = router(2);
        assert_eq!(r.focus_next(), Ok(0));
        assert_eq!(r.focus_next(), Ok(1));
        assert_eq!(r.focus_next(), Ok(0));
        assert_eq!(focus_flags(&r), vec![true, false]);
        assert_eq!(router(0).focus_next(), Err(FocusError::Empty));
    }

    #[test]
    fn blur_child_clears_focus() {
        let mut r = router(2);
        r.focus_child(1).unwrap();
        r.blur_child();
        assert_eq!(r.focused_index(), None);
        assert_eq!(focus_flags(&r), vec![false, false]);
        assert!(!r.handle_key(&KeyEvent::char('a')));
    }

    #[test]
    fn push_blurs_new_child() {
        let mut r = FocusRouter::new();
        r.push(Probe {
            focused: true,
            keys: 0,
        });
        assert!(!r.children()[0].is_focused());
    }

    #[test]
    fn routers_nest() {
        let mut outer: FocusRouter<Box<dyn Focusable>> = FocusRouter::new();
        outer.push(Box::new(router(2)));
        outer.push(Box::new(Probe::default()));
        outer.focus_child(0).unwrap();
        assert!(outer.children()[0].is_focused());
        assert!(outer.handle_key(&KeyEvent::char('q')));
        outer.focus_next().unwrap();
        assert!(!outer.children()[0].is_focused());
        assert!(outer.children()[1].is_focused());
    }

    #[test]
    fn nested_router_remembers_inner_focus() {
        let mut inner = router(3);
        inner.focus_child(2).unwrap();
        inner.blur();
        assert_eq!(focus_flags(&inner), vec![false, false, false]);
        inner.focus();
        assert_eq!(focus_flags(&inner), vec![false, false, true]);
    }
}
