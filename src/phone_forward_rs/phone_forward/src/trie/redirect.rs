/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: adding and removing redirections.

use tracing::debug;

use super::PhoneForward;
use crate::{NodeIndex, PhoneForwardError, Result, validate};

impl PhoneForward {
    /// Forward every number starting with `from` to `to`, followed by the
    /// rest of the number.
    ///
    /// A redirection previously rooted at exactly `from` is replaced.
    /// Redirections rooted at longer or shorter prefixes are left alone.
    ///
    /// # Errors
    ///
    /// - [`PhoneForwardError::InvalidRedirection`] if either string is not a
    ///   phone number or both are equal.
    /// - [`PhoneForwardError::Allocation`] if memory ran out. The
    ///   redirections are then unchanged.
    pub fn add(&mut self, from: &str, to: &str) -> Result<()> {
        let (Ok(from_digits), Ok(to_digits)) = (validate(from), validate(to)) else {
            return Err(PhoneForwardError::InvalidRedirection);
        };
        if from_digits == to_digits {
            return Err(PhoneForwardError::InvalidRedirection);
        }

        let source = self.resolve(from_digits)?;
        let target = self.resolve(to_digits)?;
        let replaced = self.set_forward(source, target)?;

        debug!(from, to, replaced, "added redirection");
        self.after_mutation();
        Ok(())
    }

    /// Remove the redirections of every number starting with `prefix`.
    ///
    /// Only forward edges rooted at `prefix` or below are dropped: numbers
    /// forwarded *to* such a prefix keep their redirection. Invalid input is
    /// a no-op.
    ///
    /// Returns the number of redirections removed.
    pub fn remove(&mut self, prefix: &str) -> usize {
        let Ok(digits) = validate(prefix) else {
            return 0;
        };
        let (node, matched) = self.locate(digits);
        if matched < digits.len() {
            // No node for `prefix` means no redirection below it either.
            return 0;
        }

        let removed = self.clear_subtree(node);
        debug!(prefix, removed, "removed redirections");
        self.after_mutation();
        removed
    }

    /// Point the forward edge of `source` at `target`, keeping the reverse
    /// entries in sync.
    ///
    /// Returns whether a previous forward edge to another target was
    /// replaced. Setting the current edge again changes nothing.
    fn set_forward(&mut self, source: NodeIndex, target: NodeIndex) -> Result<bool> {
        debug_assert_ne!(source, target);
        if self.nodes[source].forward() == Some(target) {
            return Ok(false);
        }

        // Reserve first: nothing below can fail.
        self.nodes[target].sources_mut().try_reserve_one()?;

        let previous = self.nodes[source].set_forward(Some(target));
        match previous {
            Some(old_target) => {
                self.nodes[old_target].sources_mut().remove(source);
            }
            None => self.n_redirections += 1,
        }
        self.nodes[target].sources_mut().insert(source);
        Ok(previous.is_some())
    }

    /// Drop the forward edge of `root` and of all its descendants.
    ///
    /// Returns the number of edges dropped.
    fn clear_subtree(&mut self, root: NodeIndex) -> usize {
        let mut removed = 0;
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            if let Some(target) = self.nodes[index].set_forward(None) {
                self.nodes[target].sources_mut().remove(index);
                removed += 1;
            }
            stack.extend(self.nodes[index].children());
        }
        self.n_redirections -= removed;
        removed
    }
}
