/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A sorted set of phone numbers, built one number at a time.

use std::collections::BTreeSet;

use crate::{NumberList, Result, alphabet::as_number_str};

/// Sorted, duplicate-free collection of phone numbers.
///
/// Numbers are compared as byte strings, which matches the alphabet order.
#[derive(Debug, Default)]
pub struct NumberSet {
    numbers: BTreeSet<Box<str>>,
}

impl NumberSet {
    pub const fn new() -> Self {
        Self {
            numbers: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Add the number spelled by `digits`.
    ///
    /// A number already in the set is discarded without allocating.
    /// Returns whether the number was new.
    ///
    /// `digits` must be made of alphabet symbols only.
    pub fn try_insert(&mut self, digits: &[u8]) -> Result<bool> {
        let number = as_number_str(digits);
        if self.numbers.contains(number) {
            return Ok(false);
        }

        let mut owned = String::new();
        owned.try_reserve_exact(number.len())?;
        owned.push_str(number);
        Ok(self.numbers.insert(owned.into_boxed_str()))
    }

    /// Turn the set into a [`NumberList`], in ascending order.
    pub fn into_number_list(self) -> Result<NumberList> {
        let mut numbers = Vec::new();
        numbers.try_reserve_exact(self.numbers.len())?;
        numbers.extend(self.numbers);
        Ok(NumberList::from_sorted(numbers))
    }
}
