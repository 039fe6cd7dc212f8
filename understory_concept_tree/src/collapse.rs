// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse bookkeeping for concept maps.

use hashbrown::HashSet;

use crate::key::NodeKey;

/// The set of node keys currently collapsed, plus a revision counter.
///
/// `CollapseState` never looks at a tree. It records keys; layout decides what
/// they mean. Keys with no matching node are inert and harmless.
///
/// The revision bumps on every mutation that changes the set, so observers can
/// cheaply ask whether a re-layout is due. Equality compares only the set:
/// `toggle(k); toggle(k)` yields a state equal to the original even though the
/// revision has advanced.
#[derive(Clone, Debug, Default)]
pub struct CollapseState {
    collapsed: HashSet<NodeKey>,
    revision: u64,
}

impl CollapseState {
    /// Creates an empty state with nothing collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `key`, returning whether it is now collapsed.
    pub fn toggle(&mut self, key: NodeKey) -> bool {
        let collapsed = if self.collapsed.remove(&key) {
            false
        } else {
            self.collapsed.insert(key);
            true
        };
        self.bump_revision();
        collapsed
    }

    /// Returns `true` if `key` is collapsed.
    #[must_use]
    pub fn is_collapsed(&self, key: &NodeKey) -> bool {
        self.collapsed.contains(key)
    }

    /// Collapses `key`, returning `true` if it was expanded before.
    pub fn collapse(&mut self, key: NodeKey) -> bool {
        let changed = self.collapsed.insert(key);
        if changed {
            self.bump_revision();
        }
        changed
    }

    /// Expands `key`, returning `true` if it was collapsed before.
    pub fn expand(&mut self, key: &NodeKey) -> bool {
        let changed = self.collapsed.remove(key);
        if changed {
            self.bump_revision();
        }
        changed
    }

    /// Expands everything.
    pub fn clear(&mut self) {
        if self.collapsed.is_empty() {
            return;
        }
        self.collapsed.clear();
        self.bump_revision();
    }

    /// Returns the number of collapsed keys, including inert ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    /// Returns `true` if nothing is collapsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Iterates the collapsed keys in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeKey> + '_ {
        self.collapsed.iter()
    }

    /// Returns the revision counter.
    ///
    /// Starts at `0` and increases by one for each effective mutation. No-op
    /// calls such as expanding a key that is not collapsed leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(revision = self.revision, len = self.collapsed.len(), "collapse state changed");
    }
}

impl PartialEq for CollapseState {
    fn eq(&self, other: &Self) -> bool {
        self.collapsed == other.collapsed
    }
}

impl Eq for CollapseState {}

impl Extend<NodeKey> for CollapseState {
    fn extend<I: IntoIterator<Item = NodeKey>>(&mut self, keys: I) {
        for key in keys {
            self.collapse(key);
        }
    }
}

impl FromIterator<NodeKey> for CollapseState {
    fn from_iter<I: IntoIterator<Item = NodeKey>>(keys: I) -> Self {
        let mut state = Self::new();
        state.extend(keys);
        state
    }
}
