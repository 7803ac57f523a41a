/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for trie nodes.
//!
//! Every node of a [`PhoneForward`](crate::PhoneForward) lives in a single
//! vector and refers to its parent, children and redirection peers through
//! [`NodeIndex`] handles. Nodes are never removed one by one, so handles stay
//! valid for the whole lifetime of the arena, and dropping the arena tears
//! down the trie without recursing.

use std::ops::{Index, IndexMut};

use crate::{PhoneForwardError, Result, TrieNode};

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// The handle of the root node, i.e. of the empty prefix.
    pub const ROOT: Self = Self(0);

    /// The position of the node in the arena.
    pub const fn position(self) -> usize {
        self.0 as usize
    }
}

/// Arena storage for [`TrieNode`]s.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    /// Create an arena holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
        }
    }

    /// Create an arena holding only the root node, with room for
    /// `capacity` nodes in total.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(TrieNode::root());
        Self { nodes }
    }

    /// Fallible counterpart of [`Self::with_capacity`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(capacity.max(1))?;
        nodes.push(TrieNode::root());
        Ok(Self { nodes })
    }

    /// Get the number of nodes stored in the arena, the root included.
    ///
    /// Never zero.
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of nodes the arena can hold without reallocating.
    pub const fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Store `node` and return its handle.
    ///
    /// Fails with [`PhoneForwardError::Allocation`] when the arena cannot
    /// grow, either because memory is exhausted or because the handle space
    /// (`u32::MAX` nodes) is.
    pub fn try_insert(&mut self, node: TrieNode) -> Result<NodeIndex> {
        let position =
            u32::try_from(self.nodes.len()).map_err(|_| PhoneForwardError::Allocation)?;
        self.nodes.try_reserve(1)?;
        self.nodes.push(node);
        Ok(NodeIndex(position))
    }

    /// Get the node behind `index`, `None` if it is out of bounds.
    pub fn get(&self, index: NodeIndex) -> Option<&TrieNode> {
        self.nodes.get(index.position())
    }

    /// Iterate over every node along with its handle, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &TrieNode)> {
        // Positions fit in a `u32`, `try_insert` makes sure of it.
        self.nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (NodeIndex(position as u32), node))
    }

    /// Memory used by the arena and every heap buffer owned by its nodes.
    pub fn mem_usage(&self) -> usize {
        let slots = self.nodes.capacity() * std::mem::size_of::<TrieNode>();
        let sources: usize = self.nodes.iter().map(TrieNode::heap_size).sum();
        std::mem::size_of::<Self>() + slots + sources
    }
}

impl Index<NodeIndex> for NodeArena {
    type Output = TrieNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index.position()]
    }
}

impl IndexMut<NodeIndex> for NodeArena {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index.position()]
    }
}
