/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use super::PhoneForward;
use crate::{DigitSet, NodeIndex};

impl PhoneForward {
    /// Count the numbers of exactly `length` digits, all taken from the
    /// alphabet symbols of `symbols`, that have a prefix some other prefix is
    /// forwarded to.
    ///
    /// Once a redirect target is reached, every way of completing the number
    /// with allowed digits is counted, whether or not deeper nodes exist.
    /// Bytes of `symbols` outside of the alphabet are ignored.
    ///
    /// The count wraps around on overflow.
    pub fn non_trivial_count(&self, symbols: &str, length: usize) -> usize {
        let allowed = DigitSet::from_symbols(symbols.as_bytes());
        if allowed.is_empty() || length == 0 {
            return 0;
        }
        let base = allowed.len();

        let mut count = 0usize;
        let mut stack: Vec<(NodeIndex, usize)> = vec![(NodeIndex::ROOT, length)];
        while let Some((index, remaining)) = stack.pop() {
            let node = &self.nodes[index];
            if node.is_redirect_target() {
                count = count.wrapping_add(wrapping_pow(base, remaining));
                continue;
            }
            if remaining == 0 {
                continue;
            }
            for digit in allowed.iter() {
                if let Some(child) = node.child(digit) {
                    stack.push((child, remaining - 1));
                }
            }
        }
        count
    }
}

/// `base` to the power `exponent`, modulo `2^usize::BITS`.
const fn wrapping_pow(mut base: usize, mut exponent: usize) -> usize {
    let mut result = 1usize;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    result
}
