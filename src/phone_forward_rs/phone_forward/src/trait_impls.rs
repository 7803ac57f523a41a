/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Implementation of various standard traits for [`PhoneForward`].

use std::fmt;

use crate::{NodeIndex, PhoneForward};

impl PhoneForward {
    /// Prefix of `index`, for display purposes only.
    fn display_prefix(&self, index: NodeIndex) -> String {
        let mut prefix: Vec<char> = self
            .ancestors(index)
            .filter_map(|node| node.digit())
            .map(|digit| digit.as_char())
            .collect();
        prefix.reverse();
        prefix.into_iter().collect()
    }
}

impl fmt::Debug for PhoneForward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(NodeIndex::ROOT, 0, 0)];

        while let Some((index, white_indentation, line_indentation)) = stack.pop() {
            let Some(node) = self.node(index) else {
                continue;
            };

            let prefix = match node.digit() {
                None => String::new(),
                Some(digit) => {
                    let whitespace = " ".repeat(white_indentation);
                    let line = "–".repeat(line_indentation - 1);
                    format!("{whitespace}↳{}{line}", digit.as_char())
                }
            };
            write!(f, "{prefix}\"{}\"", self.display_prefix(index))?;

            if let Some(target) = node.forward() {
                write!(f, " → \"{}\"", self.display_prefix(target))?;
            }
            if node.is_redirect_target() {
                let mut sources: Vec<String> = node
                    .sources()
                    .iter()
                    .map(|source| self.display_prefix(source))
                    .collect();
                sources.sort_unstable();
                write!(f, " ← {sources:?}")?;
            }
            writeln!(f)?;

            for child in node.children().rev() {
                let new_line_indentation = 4;
                let white_indentation = white_indentation + line_indentation + 2;
                stack.push((child, white_indentation, new_line_indentation));
            }
        }
        Ok(())
    }
}
