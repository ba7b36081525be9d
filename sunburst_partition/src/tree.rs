// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weighted input tree and its optional validation.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A node of the weighted input tree.
///
/// Sibling order is significant: children are laid out left to right (clockwise)
/// in the order they appear in [`TreeNode::children`].
///
/// A node's `value` is expected to be at least the sum of its children's values,
/// but nothing enforces it. Each child receives `child.value / parent.value` of the
/// parent's angular span regardless of whether the children add up.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode {
    /// Identifier shown to the user.
    pub name: String,
    /// Free-form annotation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Weight used to compute this node's share of its parent's span.
    pub value: f64,
    /// Ordered children; empty for a leaf.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Self>,
}

impl TreeNode {
    /// Creates a leaf with the given name and value and an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            value,
            children: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a child after any existing children.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a batch of children, preserving their order.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        self.children.extend(children);
        self
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Checks the weights the partitioner relies on.
    ///
    /// Partitioning never fails: zero-value children are silently dropped and a
    /// non-positive parent value is a caller contract violation. Call this first
    /// if the data comes from an untrusted source and you would rather reject it.
    ///
    /// The first offending node in pre-order is reported.
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut path = Vec::new();
        self.validate_at(&mut path)
    }

    fn validate_at(&self, path: &mut Vec<usize>) -> Result<(), TreeError> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(TreeError {
                path: path.clone(),
                kind: TreeErrorKind::InvalidValue(self.value),
            });
        }
        if !self.children.is_empty() && self.value <= 0.0 {
            return Err(TreeError {
                path: path.clone(),
                kind: TreeErrorKind::NonPositiveParent(self.value),
            });
        }
        for (index, child) in self.children.iter().enumerate() {
            path.push(index);
            child.validate_at(path)?;
            path.pop();
        }
        Ok(())
    }
}

/// What [`TreeNode::validate`] found wrong with a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TreeErrorKind {
    /// The value is negative, infinite or NaN.
    InvalidValue(f64),
    /// The node has children but its value is zero, so their spans cannot be computed.
    NonPositiveParent(f64),
}

/// Error returned by [`TreeNode::validate`].
#[derive(Clone, Debug, PartialEq)]
pub struct TreeError {
    /// Child indices leading from the root to the offending node; empty for the root.
    pub path: Vec<usize>,
    /// The problem found at that node.
    pub kind: TreeErrorKind,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TreeErrorKind::InvalidValue(value) => {
                write!(f, "node at {:?} has invalid value {value}", self.path)
            }
            TreeErrorKind::NonPositiveParent(value) => write!(
                f,
                "node at {:?} has children but value {value} is not strictly positive",
                self.path
            ),
        }
    }
}

impl core::error::Error for TreeError {}
