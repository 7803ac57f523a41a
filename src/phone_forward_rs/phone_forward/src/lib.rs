/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! PhoneForward - Prefix-based phone number redirections.
//!
//! This crate stores redirections between phone number prefixes and answers
//! three kinds of queries over them:
//!
//! - Forward lookup: where a number ends up once the redirection rooted at
//!   its longest redirected prefix is applied.
//! - Reverse lookup: which numbers may end up at a given number.
//! - Non-trivial counting: how many numbers of a given length, made of a given
//!   set of digits, start with a prefix other numbers are forwarded to.
//!
//! Phone numbers are non-empty strings over the twelve symbol
//! [alphabet](crate::alphabet): `0` to `9`, `:` and `;`.
//!
//! # Example
//!
//! ```
//! use phone_forward::PhoneForward;
//!
//! let mut pf = PhoneForward::new();
//! pf.add("123", "9").unwrap();
//!
//! assert_eq!(pf.get("12345").unwrap(), ["945"]);
//! assert_eq!(pf.get("124").unwrap(), ["124"]);
//! assert_eq!(pf.reverse("945").unwrap(), ["12345", "945"]);
//! ```

pub mod alphabet;
mod arena;
mod error;
mod node;
mod number_list;
mod number_set;
mod trait_impls;
mod trie;

pub use alphabet::{ALPHABET_SIZE, Digit, DigitSet, validate};
pub use arena::NodeIndex;
pub use error::{PhoneForwardError, Result};
pub use node::{RedirectSources, TrieNode};
pub use number_list::NumberList;
pub use number_set::NumberSet;
pub use trie::{Ancestors, PhoneForward};
