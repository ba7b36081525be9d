// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sunburst History: a navigation stack for drill-down interfaces.
//!
//! [`NavigationHistory`] records which item is currently focused and which items
//! were focused before it. The last entry is the current selection; drilling in
//! pushes an entry and drilling back out pops one.
//!
//! The stack is generic over its entries and places no bounds on them. Entries
//! are usually small handles (indices or IDs) into data owned elsewhere, so the
//! history refers to items rather than copying them.
//!
//! ## Minimal example
//!
//! ```rust
//! use sunburst_history::NavigationHistory;
//!
//! let mut history = NavigationHistory::with_root("root");
//! history.navigate("docs");
//! assert_eq!(history.current(), Some(&"docs"));
//! assert_eq!(history.previous(), Some(&"root"));
//!
//! history.back();
//! assert_eq!(history.current(), Some(&"root"));
//!
//! // The bottom entry survives `back`.
//! history.back();
//! assert_eq!(history.size(), 1);
//! ```
//!
//! ## Guarded and unguarded removal
//!
//! [`NavigationHistory::back`] never removes the last remaining entry, so a
//! history created with [`NavigationHistory::with_root`] is never empty.
//! [`NavigationHistory::pop`] removes the top entry unconditionally and can
//! leave the stack empty; [`NavigationHistory::current`] then returns `None`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A stack of previously selected entries; the top is the current selection.
///
/// All operations are O(1) (amortized for [`NavigationHistory::navigate`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationHistory<T> {
    entries: Vec<T>,
}

impl<T> NavigationHistory<T> {
    /// Creates a history from existing entries, oldest first.
    #[must_use]
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// Creates a history whose only entry is `root`.
    #[must_use]
    pub fn with_root(root: T) -> Self {
        let mut entries = Vec::with_capacity(4);
        entries.push(root);
        Self { entries }
    }

    /// Pushes `entry`, making it the current selection.
    pub fn navigate(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Drops the current selection, returning to the previous one.
    ///
    /// Does nothing when at most one entry remains.
    pub fn back(&mut self) {
        if self.entries.len() > 1 {
            self.entries.pop();
        }
    }

    /// Removes and returns the top entry, even if it is the last one.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }

    /// Returns the current selection, or `None` if the history is empty.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.entries.last()
    }

    /// Returns the entry below the current one, or `None` if there are fewer than two.
    #[must_use]
    pub fn previous(&self) -> Option<&T> {
        let len = self.entries.len();
        if len > 1 {
            self.entries.get(len - 2)
        } else {
            None
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if [`NavigationHistory::back`] would remove an entry.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Returns an iterator over the entries, oldest first.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a NavigationHistory<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
