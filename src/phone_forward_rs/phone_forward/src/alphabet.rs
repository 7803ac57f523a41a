/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The alphabet phone numbers are written in.
//!
//! It is made of twelve symbols: the ten decimal digits followed by the two
//! extension symbols `:` and `;`. The symbols are contiguous in ASCII, so the
//! alphabet order matches byte order and comparing numbers as byte strings
//! gives the alphabet's lexicographic order.

use crate::{PhoneForwardError, Result};

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 12;

const FIRST_SYMBOL: u8 = b'0';
const LAST_SYMBOL: u8 = b';';

/// A single symbol of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Convert an ASCII byte into a [`Digit`].
    ///
    /// Returns `None` if the byte is not part of the alphabet.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if is_symbol(byte) {
            Some(Self(byte - FIRST_SYMBOL))
        } else {
            None
        }
    }

    /// Get the digit at position `index` in the alphabet.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Position of this digit in the alphabet, in `0..ALPHABET_SIZE`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The ASCII byte this digit is written as.
    pub const fn as_byte(self) -> u8 {
        FIRST_SYMBOL + self.0
    }

    /// The character this digit is written as.
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// Iterate over the whole alphabet, in order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..ALPHABET_SIZE as u8).map(Self)
    }
}

/// Whether `byte` is one of the alphabet symbols.
pub const fn is_symbol(byte: u8) -> bool {
    FIRST_SYMBOL <= byte && byte <= LAST_SYMBOL
}

/// Check that `number` is a phone number, i.e. a non-empty sequence of
/// alphabet symbols, and return its bytes.
pub fn validate(number: &str) -> Result<&[u8]> {
    let bytes = number.as_bytes();
    if bytes.is_empty() || !bytes.iter().copied().all(is_symbol) {
        return Err(PhoneForwardError::InvalidNumber);
    }
    Ok(bytes)
}

/// View a sequence of alphabet symbols as a string slice.
pub(crate) fn as_number_str(digits: &[u8]) -> &str {
    debug_assert!(digits.iter().copied().all(is_symbol));
    // SAFETY:
    // - Every alphabet symbol is an ASCII byte, and callers only pass
    //   sequences of alphabet symbols, hence valid UTF-8.
    unsafe { std::str::from_utf8_unchecked(digits) }
}

/// Turn a sequence of alphabet symbols into an owned string.
pub(crate) fn into_number_string(digits: Vec<u8>) -> String {
    debug_assert!(digits.iter().copied().all(is_symbol));
    // SAFETY:
    // - Every alphabet symbol is an ASCII byte, and callers only pass
    //   sequences of alphabet symbols, hence valid UTF-8.
    unsafe { String::from_utf8_unchecked(digits) }
}

/// A set of alphabet symbols.
///
/// Built from arbitrary text: bytes outside of the alphabet are ignored
/// and repeated symbols are counted once.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitSet(u16);

impl DigitSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Collect the alphabet symbols found in `text`.
    pub fn from_symbols(text: &[u8]) -> Self {
        text.iter().copied().filter_map(Digit::from_byte).collect()
    }

    /// Add `digit` to the set.
    ///
    /// Returns `true` if the digit was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let was_present = self.contains(digit);
        self.0 |= 1 << digit.0;
        !was_present
    }

    /// Whether `digit` belongs to the set.
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.0) != 0
    }

    /// The number of distinct symbols in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set holds no symbol.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the symbols in the set, in alphabet order.
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::all().filter(move |digit| self.contains(*digit))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl std::fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::as_char)).finish()
    }
}
