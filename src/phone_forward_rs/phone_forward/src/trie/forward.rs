/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use super::PhoneForward;
use crate::{NumberList, Result, validate};

impl PhoneForward {
    /// Find where `number` is forwarded to.
    ///
    /// The redirection rooted at the longest prefix of `number` wins, and only
    /// that one is applied: redirections are not chained. A number without
    /// any redirection is forwarded to itself.
    ///
    /// The result holds exactly one number, or none if `number` is not a
    /// phone number.
    pub fn get(&self, number: &str) -> Result<NumberList> {
        let Ok(digits) = validate(number) else {
            return Ok(NumberList::empty());
        };
        let (node, _) = self.locate(digits);

        let jump = self
            .ancestors(node)
            .find_map(|node| node.forward().map(|target| (node.depth(), target)));

        let mut forwarded = Vec::new();
        match jump {
            Some((depth, target)) => {
                let suffix = &digits[depth..];
                forwarded.try_reserve_exact(self.nodes[target].depth() + suffix.len())?;
                self.write_prefix(target, &mut forwarded)?;
                forwarded.extend_from_slice(suffix);
            }
            None => {
                forwarded.try_reserve_exact(digits.len())?;
                forwarded.extend_from_slice(digits);
            }
        }
        NumberList::try_single(forwarded)
    }
}
