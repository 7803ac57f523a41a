/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use super::PhoneForward;
use crate::{NumberList, NumberSet, Result, validate};

impl PhoneForward {
    /// Find every number that may be forwarded to `number`.
    ///
    /// For each prefix `p` of `number` and each prefix `r` forwarded to `p`,
    /// the result holds `r` followed by the rest of `number`. It also holds
    /// `number` itself. The result is sorted and free of duplicates.
    ///
    /// Candidates are not checked against [`Self::get`]: a candidate may be
    /// forwarded somewhere else by a redirection rooted at a longer prefix.
    ///
    /// An invalid `number` yields an empty list.
    pub fn reverse(&self, number: &str) -> Result<NumberList> {
        let Ok(digits) = validate(number) else {
            return Ok(NumberList::empty());
        };
        let (node, _) = self.locate(digits);

        let mut set = NumberSet::new();
        let mut scratch = Vec::new();
        for ancestor in self.ancestors(node) {
            let suffix = &digits[ancestor.depth()..];
            if ancestor.parent().is_none() {
                set.try_insert(digits)?;
                continue;
            }
            for source in ancestor.sources().iter() {
                scratch.clear();
                self.write_prefix(source, &mut scratch)?;
                scratch.try_reserve(suffix.len())?;
                scratch.extend_from_slice(suffix);
                set.try_insert(&scratch)?;
            }
        }
        set.into_number_list()
    }
}
