/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::fmt;

/// The operator of an [`Operation`], as written in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `NEW`
    New,
    /// `DEL`
    Del,
    /// `>`
    Redirect,
    /// `?`
    Query,
    /// `@`
    Count,
}

impl Operator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Del => "DEL",
            Self::Redirect => ">",
            Self::Query => "?",
            Self::Count => "@",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed operation.
///
/// Each variant records the 1-based position of its operator in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `NEW id`: select base `id`, creating it if needed.
    NewBase { id: String, position: usize },
    /// `DEL id`: destroy base `id`.
    DeleteBase { id: String, position: usize },
    /// `from > to`: add a redirection to the active base.
    Add {
        from: String,
        to: String,
        position: usize,
    },
    /// `number ?`: forward lookup in the active base.
    Get { number: String, position: usize },
    /// `? number`: reverse lookup in the active base.
    Reverse { number: String, position: usize },
    /// `DEL prefix`: remove redirections from the active base.
    Remove { prefix: String, position: usize },
    /// `@ symbols`: count non-trivial numbers in the active base.
    NonTrivialCount { symbols: String, position: usize },
}

impl Operation {
    /// The operator this operation was written with.
    pub const fn operator(&self) -> Operator {
        match self {
            Self::NewBase { .. } => Operator::New,
            Self::DeleteBase { .. } | Self::Remove { .. } => Operator::Del,
            Self::Add { .. } => Operator::Redirect,
            Self::Get { .. } | Self::Reverse { .. } => Operator::Query,
            Self::NonTrivialCount { .. } => Operator::Count,
        }
    }

    /// 1-based position of the operator in the input.
    pub const fn position(&self) -> usize {
        match self {
            Self::NewBase { position, .. }
            | Self::DeleteBase { position, .. }
            | Self::Add { position, .. }
            | Self::Get { position, .. }
            | Self::Reverse { position, .. }
            | Self::Remove { position, .. }
            | Self::NonTrivialCount { position, .. } => *position,
        }
    }
}
