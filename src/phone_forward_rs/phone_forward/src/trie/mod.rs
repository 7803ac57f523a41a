/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Prefix trie of phone numbers and the redirections stored on it.
//!
//! The implementation is split into sub-modules by concern:
//! - [`redirect`]: Write path (add and remove redirections)
//! - [`forward`]: Forward lookup
//! - [`reverse`]: Reverse lookup
//! - [`non_trivial`]: Counting numbers that lead to a redirect target

mod ancestors;
mod forward;
#[cfg(all(feature = "unittest", not(miri)))]
mod invariants;
mod non_trivial;
mod redirect;
mod reverse;

pub use ancestors::Ancestors;

use crate::arena::NodeArena;
use crate::{Digit, NodeIndex, PhoneForwardError, Result, TrieNode};

/// A set of phone number redirections.
///
/// Redirections are stored on a prefix trie: forwarding `"100"` to `"200"`
/// creates the nodes for both prefixes and links them with a forward edge,
/// plus the matching reverse entry on the target. Any number starting with
/// `"100"` is then forwarded to `"200"` followed by the rest of the number.
///
/// # Arena Storage
///
/// All nodes are stored in a single arena and link to each other through
/// [`NodeIndex`] handles. The trie only ever grows: removing a redirection
/// clears edges but keeps the nodes, which are released all at once when the
/// [`PhoneForward`] is dropped.
///
/// # Queries
///
/// Lookups never create nodes. A prefix without a node carries no edge, so
/// the deepest existing node on the path of a number holds all the
/// information a query needs.
#[derive(Clone)]
pub struct PhoneForward {
    /// Arena holding all trie nodes, the root first.
    nodes: NodeArena,
    /// Number of forward edges currently stored.
    n_redirections: usize,
}

impl Default for PhoneForward {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneForward {
    /// Create an empty set of redirections.
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            n_redirections: 0,
        }
    }

    /// Create an empty set of redirections, reporting an allocation failure
    /// instead of aborting.
    pub fn try_new() -> Result<Self> {
        Self::try_with_capacity(1)
    }

    /// Create an empty set of redirections with room for `capacity` trie
    /// nodes before the arena needs to grow.
    ///
    /// # Panics
    ///
    /// Aborts if the memory cannot be allocated, use
    /// [`Self::try_with_capacity`] to handle that case.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            n_redirections: 0,
        }
    }

    /// Fallible counterpart of [`Self::with_capacity`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            nodes: NodeArena::try_with_capacity(capacity)?,
            n_redirections: 0,
        })
    }

    /// Number of trie nodes, the root included.
    pub const fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of trie nodes that can be stored before the arena grows.
    pub const fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of redirections currently stored.
    pub const fn n_redirections(&self) -> usize {
        self.n_redirections
    }

    /// Approximate memory used by the structure, in bytes.
    pub fn mem_usage(&self) -> usize {
        std::mem::size_of::<Self>() - std::mem::size_of::<NodeArena>() + self.nodes.mem_usage()
    }

    /// Get the node behind `index`.
    ///
    /// Returns `None` for a handle that does not belong to this structure.
    /// A handle taken from another [`PhoneForward`] may still resolve to an
    /// unrelated node.
    pub fn node(&self, index: NodeIndex) -> Option<&TrieNode> {
        self.nodes.get(index)
    }

    /// Iterate over every node along with its handle, the root first.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &TrieNode)> {
        self.nodes.iter()
    }

    /// Iterate over `index` and its ancestors, up to and including the root.
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors::new(&self.nodes, index)
    }

    /// Find the node standing for `digits`, creating every missing node on
    /// the way.
    ///
    /// The empty sequence resolves to the root.
    pub(crate) fn resolve(&mut self, digits: &[u8]) -> Result<NodeIndex> {
        let mut current = NodeIndex::ROOT;
        for &byte in digits {
            let digit = Digit::from_byte(byte).ok_or(PhoneForwardError::InvalidNumber)?;
            current = match self.nodes[current].child(digit) {
                Some(child) => child,
                None => {
                    let depth = self.nodes[current].depth();
                    let child = self
                        .nodes
                        .try_insert(TrieNode::child_of(current, depth, digit))?;
                    self.nodes[current].set_child(digit, child);
                    child
                }
            };
        }
        Ok(current)
    }

    /// Find the deepest existing node on the path of `digits`.
    ///
    /// Returns the node and the number of digits it covers. The trie is left
    /// untouched; bytes outside of the alphabet stop the walk.
    pub fn locate(&self, digits: &[u8]) -> (NodeIndex, usize) {
        let mut current = NodeIndex::ROOT;
        for (matched, &byte) in digits.iter().enumerate() {
            let child = Digit::from_byte(byte).and_then(|digit| self.nodes[current].child(digit));
            match child {
                Some(child) => current = child,
                None => return (current, matched),
            }
        }
        (current, digits.len())
    }

    /// Append the prefix `index` stands for to `buf`.
    pub fn write_prefix(&self, index: NodeIndex, buf: &mut Vec<u8>) -> Result<()> {
        let depth = self.nodes[index].depth();
        buf.try_reserve(depth)?;

        let start = buf.len();
        buf.resize(start + depth, 0);
        let mut slots = buf[start..].iter_mut().rev();
        for node in self.ancestors(index) {
            if let (Some(digit), Some(slot)) = (node.digit(), slots.next()) {
                *slot = digit.as_byte();
            }
        }
        Ok(())
    }

    /// Build the prefix `index` stands for.
    pub fn prefix(&self, index: NodeIndex) -> Result<String> {
        let mut buf = Vec::new();
        self.write_prefix(index, &mut buf)?;
        Ok(crate::alphabet::into_number_string(buf))
    }

    #[cfg(all(feature = "unittest", not(miri)))]
    fn after_mutation(&self) {
        self.check_invariants();
    }

    #[cfg(not(all(feature = "unittest", not(miri))))]
    const fn after_mutation(&self) {}
}
