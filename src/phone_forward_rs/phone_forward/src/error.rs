/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Error types for phone forward operations.

use std::collections::TryReserveError;

/// A specialized Result type for phone forward operations.
pub type Result<T> = std::result::Result<T, PhoneForwardError>;

/// Errors that can occur when operating on a [`PhoneForward`](crate::PhoneForward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhoneForwardError {
    /// The string contains a symbol outside of the alphabet, or is empty.
    #[error("not a phone number")]
    InvalidNumber,

    /// A redirection was rejected: one of the numbers is invalid,
    /// or both numbers are the same.
    #[error("invalid redirection")]
    InvalidRedirection,

    /// Memory for a node, a redirection or a result could not be allocated.
    ///
    /// The engine is left in the state it had before the failed call.
    #[error("memory allocation failed")]
    Allocation,
}

impl From<TryReserveError> for PhoneForwardError {
    fn from(_: TryReserveError) -> Self {
        Self::Allocation
    }
}
