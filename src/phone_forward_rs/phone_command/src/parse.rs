/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Streaming parser turning a byte stream into [`Operation`]s.
//!
//! # Grammar
//!
//! ```text
//! operation := "NEW" identifier
//!            | "DEL" identifier
//!            | "DEL" number
//!            | number ">" number
//!            | number "?"
//!            | "?" number
//!            | "@" number
//! number     := [0-9:;]+
//! identifier := [A-Za-z][A-Za-z0-9]*     (except "NEW" and "DEL")
//! ```
//!
//! Tokens may be separated by whitespace and by comments, which start and end
//! with `$$`. Positions are 1-based byte offsets into the stream.

use std::io::{self, Read};
use std::iter::{FusedIterator, Peekable};

use phone_forward::alphabet::is_symbol;

use crate::{CommandError, Operation, Result};

const NEW_KEYWORD: &str = "NEW";
const DEL_KEYWORD: &str = "DEL";

/// Reads [`Operation`]s one at a time from a byte stream.
///
/// Iteration stops at the end of the stream, or right after the first error.
/// The reader is not buffered internally: wrap it in a
/// [`BufReader`](std::io::BufReader) when reading from a file or stdin.
pub struct OperationReader<R: Read> {
    bytes: Peekable<io::Bytes<R>>,
    /// Number of bytes consumed so far.
    position: usize,
    /// Set once the stream is exhausted or an error was reported.
    done: bool,
}

impl<R: Read> OperationReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes().peekable(),
            position: 0,
            done: false,
        }
    }

    /// Number of bytes consumed so far.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Parse the next operation, `None` at the end of the stream.
    pub fn next_operation(&mut self) -> Result<Option<Operation>> {
        self.skip_ignored()?;
        let Some(byte) = self.peek()? else {
            return Ok(None);
        };
        let position = self.next_position();

        let operation = match byte {
            b'?' => {
                self.bump()?;
                let number = self.expect_number()?;
                Operation::Reverse { number, position }
            }
            b'@' => {
                self.bump()?;
                let symbols = self.expect_number()?;
                Operation::NonTrivialCount { symbols, position }
            }
            byte if is_symbol(byte) => self.postfix_operation()?,
            byte if byte.is_ascii_alphabetic() => {
                let word = self.read_word()?;
                match word.as_str() {
                    NEW_KEYWORD => {
                        let id = self.expect_identifier()?;
                        Operation::NewBase { id, position }
                    }
                    DEL_KEYWORD => self.delete_operation(position)?,
                    _ => return Err(CommandError::Syntax { position }),
                }
            }
            _ => return Err(CommandError::Syntax { position }),
        };
        Ok(Some(operation))
    }

    /// `number ?` or `number > number`.
    fn postfix_operation(&mut self) -> Result<Operation> {
        let number = self.read_number()?;
        self.skip_ignored()?;
        let position = self.next_position();
        match self.peek()? {
            None => Err(CommandError::UnexpectedEof),
            Some(b'?') => {
                self.bump()?;
                Ok(Operation::Get { number, position })
            }
            Some(b'>') => {
                self.bump()?;
                let to = self.expect_number()?;
                Ok(Operation::Add {
                    from: number,
                    to,
                    position,
                })
            }
            Some(_) => Err(CommandError::Syntax { position }),
        }
    }

    /// The argument of `DEL` decides between removing a base and removing
    /// redirections.
    fn delete_operation(&mut self, position: usize) -> Result<Operation> {
        self.skip_ignored()?;
        match self.peek()? {
            None => Err(CommandError::UnexpectedEof),
            Some(byte) if is_symbol(byte) => {
                let prefix = self.read_number()?;
                Ok(Operation::Remove { prefix, position })
            }
            Some(_) => {
                let id = self.expect_identifier()?;
                Ok(Operation::DeleteBase { id, position })
            }
        }
    }

    fn expect_number(&mut self) -> Result<String> {
        self.skip_ignored()?;
        match self.peek()? {
            None => Err(CommandError::UnexpectedEof),
            Some(byte) if is_symbol(byte) => self.read_number(),
            Some(_) => Err(CommandError::Syntax {
                position: self.next_position(),
            }),
        }
    }

    fn expect_identifier(&mut self) -> Result<String> {
        self.skip_ignored()?;
        let position = self.next_position();
        match self.peek()? {
            None => Err(CommandError::UnexpectedEof),
            Some(byte) if byte.is_ascii_alphabetic() => {
                let word = self.read_word()?;
                if word == NEW_KEYWORD || word == DEL_KEYWORD {
                    return Err(CommandError::Syntax { position });
                }
                Ok(word)
            }
            Some(_) => Err(CommandError::Syntax { position }),
        }
    }

    fn read_number(&mut self) -> Result<String> {
        self.read_while(is_symbol)
    }

    fn read_word(&mut self) -> Result<String> {
        self.read_while(|byte| byte.is_ascii_alphanumeric())
    }

    /// Consume the longest run of bytes matching `accept`.
    fn read_while(&mut self, accept: impl Fn(u8) -> bool) -> Result<String> {
        let mut token = String::new();
        while let Some(byte) = self.peek()? {
            if !accept(byte) {
                break;
            }
            self.bump()?;
            token.try_reserve(1)?;
            token.push(char::from(byte));
        }
        Ok(token)
    }

    /// Skip whitespace and comments.
    fn skip_ignored(&mut self) -> Result<()> {
        while let Some(byte) = self.peek()? {
            if is_space(byte) {
                self.bump()?;
                continue;
            }
            if byte != b'$' {
                break;
            }

            let position = self.next_position();
            self.bump()?;
            if self.peek()? != Some(b'$') {
                return Err(CommandError::Syntax { position });
            }
            self.bump()?;
            self.skip_comment_body()?;
        }
        Ok(())
    }

    /// Consume everything up to and including the closing `$$`.
    fn skip_comment_body(&mut self) -> Result<()> {
        loop {
            match self.bump()? {
                None => return Err(CommandError::UnexpectedEof),
                Some(b'$') => {
                    if self.bump()?.ok_or(CommandError::UnexpectedEof)? == b'$' {
                        return Ok(());
                    }
                }
                Some(_) => {}
            }
        }
    }

    const fn next_position(&self) -> usize {
        self.position + 1
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        match self.bytes.peek() {
            None => Ok(None),
            Some(Ok(byte)) => Ok(Some(*byte)),
            Some(Err(_)) => match self.bytes.next() {
                Some(Err(error)) => Err(CommandError::Io(error)),
                _ => Ok(None),
            },
        }
    }

    fn bump(&mut self) -> Result<Option<u8>> {
        match self.bytes.next().transpose()? {
            Some(byte) => {
                self.position += 1;
                Ok(Some(byte))
            }
            None => Ok(None),
        }
    }
}

impl<R: Read> Iterator for OperationReader<R> {
    type Item = Result<Operation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.next_operation().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.done = true;
        }
        next
    }
}

impl<R: Read> FusedIterator for OperationReader<R> {}

/// Whitespace as understood by the C locale, vertical tab included.
const fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}
