/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Text commands over sets of phone number redirections.
//!
//! A command stream is a sequence of operations such as `NEW base`,
//! `123 > 45`, `1234 ?` or `? 45`. [`OperationReader`] parses them from any
//! [`Read`](std::io::Read) implementation and [`Executor`] applies them to a
//! [`Registry`](phone_registry::Registry) of bases, writing answers one per
//! line.
//!
//! # Example
//!
//! ```
//! let mut output = Vec::new();
//! phone_command::run(&b"NEW base 123 > 9 12345 ? ? 945"[..], &mut output).unwrap();
//! assert_eq!(output, b"945\n12345\n945\n");
//! ```

mod error;
mod exec;
mod operation;
mod parse;

pub use error::{CommandError, Result};
pub use exec::{Executor, run};
pub use operation::{Operation, Operator};
pub use parse::OperationReader;
