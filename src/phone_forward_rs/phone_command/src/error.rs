/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for parsing and executing operations.
//!
//! The [`Display`](std::fmt::Display) output of [`CommandError`] is the
//! report expected after the `ERROR ` prefix.

use std::collections::TryReserveError;

use phone_forward::PhoneForwardError;

use crate::Operator;

/// A specialized Result type for command operations.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Errors that stop the processing of a command stream.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The input does not follow the grammar.
    #[error("{position}")]
    Syntax {
        /// 1-based position of the first offending byte.
        position: usize,
    },

    /// The input ended in the middle of an operation or of a comment.
    #[error("EOF")]
    UnexpectedEof,

    /// A well-formed operation could not be carried out.
    #[error("{operator} {position}")]
    Failed {
        /// The operator of the failed operation.
        operator: Operator,
        /// 1-based position of the operator.
        position: usize,
    },

    /// Memory ran out.
    #[error("memory error")]
    Memory,

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TryReserveError> for CommandError {
    fn from(_: TryReserveError) -> Self {
        Self::Memory
    }
}

impl CommandError {
    /// Map an engine error for an operation starting at `position`.
    pub(crate) fn from_engine(error: PhoneForwardError, operator: Operator, position: usize) -> Self {
        match error {
            PhoneForwardError::Allocation => Self::Memory,
            PhoneForwardError::InvalidNumber | PhoneForwardError::InvalidRedirection => {
                Self::Failed { operator, position }
            }
        }
    }
}
