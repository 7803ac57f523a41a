/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Trie nodes.

use crate::{ALPHABET_SIZE, Digit, NodeIndex, Result};

/// A node of the prefix trie.
///
/// Each node stands for exactly one prefix: the sequence of digits on the
/// path from the root down to it. All links are [`NodeIndex`] handles into
/// the arena owning the node.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Length of the prefix, zero at the root.
    depth: usize,
    /// The last digit of the prefix, `None` at the root.
    digit: Option<Digit>,
    /// `None` at the root only.
    parent: Option<NodeIndex>,
    children: [Option<NodeIndex>; ALPHABET_SIZE],
    /// Where numbers starting with this prefix are forwarded to.
    forward: Option<NodeIndex>,
    /// Every node whose `forward` points here.
    sources: RedirectSources,
}

impl TrieNode {
    pub(crate) const fn root() -> Self {
        Self {
            depth: 0,
            digit: None,
            parent: None,
            children: [None; ALPHABET_SIZE],
            forward: None,
            sources: RedirectSources::new(),
        }
    }

    pub(crate) const fn child_of(parent: NodeIndex, parent_depth: usize, digit: Digit) -> Self {
        Self {
            depth: parent_depth + 1,
            digit: Some(digit),
            parent: Some(parent),
            children: [None; ALPHABET_SIZE],
            forward: None,
            sources: RedirectSources::new(),
        }
    }

    /// Length of the prefix this node stands for.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The last digit of the prefix, `None` for the root.
    pub const fn digit(&self) -> Option<Digit> {
        self.digit
    }

    /// The parent node, `None` for the root.
    pub const fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// The child reached through `digit`, if it was ever created.
    pub const fn child(&self, digit: Digit) -> Option<NodeIndex> {
        self.children[digit.index()]
    }

    /// Iterate over the existing children, in alphabet order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeIndex> + '_ {
        self.children.iter().flatten().copied()
    }

    pub(crate) const fn set_child(&mut self, digit: Digit, child: NodeIndex) {
        self.children[digit.index()] = Some(child);
    }

    /// The node this prefix is forwarded to.
    pub const fn forward(&self) -> Option<NodeIndex> {
        self.forward
    }

    pub(crate) const fn set_forward(&mut self, target: Option<NodeIndex>) -> Option<NodeIndex> {
        std::mem::replace(&mut self.forward, target)
    }

    /// The nodes forwarded to this one.
    pub const fn sources(&self) -> &RedirectSources {
        &self.sources
    }

    pub(crate) const fn sources_mut(&mut self) -> &mut RedirectSources {
        &mut self.sources
    }

    /// Whether at least one prefix is forwarded to this node.
    pub fn is_redirect_target(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Bytes owned on the heap by this node.
    pub(crate) fn heap_size(&self) -> usize {
        self.sources.heap_size()
    }
}

/// The set of nodes forwarded to a given node.
///
/// Kept sorted by handle, so membership tests and removals are logarithmic.
#[derive(Debug, Clone, Default)]
pub struct RedirectSources(Vec<NodeIndex>);

impl RedirectSources {
    pub(crate) const fn new() -> Self {
        Self(Vec::new())
    }

    /// Make room for one more source.
    ///
    /// Called before any link is modified, so that a failed allocation
    /// leaves the redirection index untouched.
    pub(crate) fn try_reserve_one(&mut self) -> Result<()> {
        self.0.try_reserve(1)?;
        Ok(())
    }

    /// Add `source`, returning `false` if it was already there.
    ///
    /// Does not allocate if [`Self::try_reserve_one`] succeeded beforehand.
    pub(crate) fn insert(&mut self, source: NodeIndex) -> bool {
        match self.0.binary_search(&source) {
            Ok(_) => false,
            Err(position) => {
                self.0.insert(position, source);
                true
            }
        }
    }

    /// Remove `source`, returning `false` if it was not there.
    pub(crate) fn remove(&mut self, source: NodeIndex) -> bool {
        match self.0.binary_search(&source) {
            Ok(position) => {
                self.0.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Whether `source` is forwarded to the owning node.
    pub fn contains(&self, source: NodeIndex) -> bool {
        self.0.binary_search(&source).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = NodeIndex> + '_ {
        self.0.iter().copied()
    }

    fn heap_size(&self) -> usize {
        self.0.capacity() * std::mem::size_of::<NodeIndex>()
    }
}
