/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::ops::Index;

use crate::Result;

/// An immutable sequence of phone numbers returned by a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberList {
    numbers: Vec<Box<str>>,
}

impl NumberList {
    /// A list with no number, returned for invalid queries.
    pub const fn empty() -> Self {
        Self {
            numbers: Vec::new(),
        }
    }

    pub(crate) const fn from_sorted(numbers: Vec<Box<str>>) -> Self {
        Self { numbers }
    }

    /// A list holding the number spelled by `digits`.
    pub(crate) fn try_single(digits: Vec<u8>) -> Result<Self> {
        let mut numbers = Vec::new();
        numbers.try_reserve_exact(1)?;
        numbers.push(crate::alphabet::into_number_string(digits).into_boxed_str());
        Ok(Self { numbers })
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Get the number at position `index`, `None` past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.numbers.get(index).map(AsRef::as_ref)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator {
        self.numbers.iter().map(AsRef::as_ref)
    }
}

impl Index<usize> for NumberList {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.numbers[index]
    }
}

impl<'a> IntoIterator for &'a NumberList {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, Box<str>>, fn(&'a Box<str>) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&'a Box<str>) -> &'a str = |number| &**number;
        self.numbers.iter().map(as_str)
    }
}

impl IntoIterator for NumberList {
    type Item = Box<str>;
    type IntoIter = std::vec::IntoIter<Box<str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.numbers.into_iter()
    }
}

impl<S: AsRef<str>> PartialEq<[S]> for NumberList {
    fn eq(&self, other: &[S]) -> bool {
        self.iter().eq(other.iter().map(AsRef::as_ref))
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for NumberList {
    fn eq(&self, other: &[S; N]) -> bool {
        self == other.as_slice()
    }
}

impl<S: AsRef<str>> PartialEq<Vec<S>> for NumberList {
    fn eq(&self, other: &Vec<S>) -> bool {
        self == other.as_slice()
    }
}
