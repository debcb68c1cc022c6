//! Disclosure state -- the set of tree identities currently expanded.
//!
//! The store is owned by the host view and shared by reference with every
//! recursive render call. Renderers only read it; mutation happens when a
//! host applies an [`Action`](crate::tree::Action) produced by a render.

use std::collections::HashSet;

/// Flat set of opened identities. Created empty, never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    opened: HashSet<String>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is currently opened.
    pub fn has(&self, id: &str) -> bool {
        self.opened.contains(id)
    }

    /// Open `id`. Returns `true` if it was not already open.
    pub fn open(&mut self, id: &str) -> bool {
        if self.opened.contains(id) {
            return false;
        }
        self.opened.insert(id.to_string())
    }

    /// Close `id`. Returns `true` if it was open.
    pub fn close(&mut self, id: &str) -> bool {
        self.opened.remove(id)
    }

    /// Open `id` if closed, close it if open. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.close(id) {
            false
        } else {
            self.open(id)
        }
    }

    pub fn len(&self) -> usize {
        self.opened.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opened.is_empty()
    }

    /// Iterate over opened identities in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.opened.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DisclosureState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            opened: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for DisclosureState {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.opened.extend(iter.into_iter().map(Into::into));
    }
}
