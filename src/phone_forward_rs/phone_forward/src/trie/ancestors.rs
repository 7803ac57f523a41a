/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::iter::FusedIterator;

use crate::{NodeIndex, TrieNode, arena::NodeArena};

/// Iterates over a node and its ancestors, deepest first.
///
/// Created by [`PhoneForward::ancestors`](crate::PhoneForward::ancestors).
/// The root is always the last item.
pub struct Ancestors<'a> {
    nodes: &'a NodeArena,
    /// The node to yield next.
    current: Option<NodeIndex>,
}

impl<'a> Ancestors<'a> {
    pub(crate) const fn new(nodes: &'a NodeArena, start: NodeIndex) -> Self {
        Self {
            nodes,
            current: Some(start),
        }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.current?];
        self.current = node.parent();
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.map_or(0, |index| self.nodes[index].depth() + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ancestors<'_> {}

impl FusedIterator for Ancestors<'_> {}
