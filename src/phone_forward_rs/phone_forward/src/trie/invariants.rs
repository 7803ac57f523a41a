/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug invariant checks for the redirection trie.
//!
//! These checks are gated behind the `unittest` feature flag and run
//! after every mutation (`add`, `remove`) to catch structural
//! violations early.

use super::PhoneForward;
use crate::NodeIndex;

impl PhoneForward {
    /// Walk the whole arena and assert that the trie and the redirection
    /// index are consistent.
    pub(crate) fn check_invariants(&self) {
        self.check_structure();
        self.check_redirections();
    }

    /// Parent, child, depth and digit links agree with each other.
    fn check_structure(&self) {
        let root = &self.nodes[NodeIndex::ROOT];
        assert_eq!(root.depth(), 0, "root depth");
        assert!(root.parent().is_none(), "root has a parent");
        assert!(root.digit().is_none(), "root has a digit");

        for (index, node) in self.nodes.iter() {
            for child_index in node.children() {
                let child = &self.nodes[child_index];
                assert_eq!(
                    child.parent(),
                    Some(index),
                    "child {child_index:?} of {index:?} points to another parent"
                );
                assert_eq!(
                    child.depth(),
                    node.depth() + 1,
                    "child {child_index:?} of {index:?} has a wrong depth"
                );
                let digit = child.digit().expect("non-root nodes carry a digit");
                assert_eq!(
                    node.child(digit),
                    Some(child_index),
                    "child {child_index:?} is stored under the wrong digit"
                );
            }
            if let Some(parent) = node.parent() {
                assert!(
                    self.nodes[parent].children().any(|child| child == index),
                    "{index:?} is missing from its parent's children"
                );
            }
        }
    }

    /// `a.forward == Some(b)` if and only if `a` is a source of `b`.
    fn check_redirections(&self) {
        let mut forward_edges = 0;
        let mut reverse_entries = 0;
        for (index, node) in self.nodes.iter() {
            if let Some(target) = node.forward() {
                forward_edges += 1;
                assert_ne!(target, index, "{index:?} is forwarded to itself");
                assert_ne!(target, NodeIndex::ROOT, "{index:?} is forwarded to the root");
                assert_ne!(index, NodeIndex::ROOT, "the root has a forward edge");
                assert!(
                    self.nodes[target].sources().contains(index),
                    "{index:?} -> {target:?} has no reverse entry"
                );
            }
            for source in node.sources().iter() {
                reverse_entries += 1;
                assert_eq!(
                    self.nodes[source].forward(),
                    Some(index),
                    "reverse entry {source:?} <- {index:?} has no forward edge"
                );
            }
        }
        assert_eq!(forward_edges, reverse_entries, "edge count mismatch");
        assert_eq!(
            forward_edges, self.n_redirections,
            "n_redirections does not match the stored edges"
        );
    }
}
