/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::io::{Read, Write};

use phone_forward::{ALPHABET_SIZE, NumberList, PhoneForward, PhoneForwardError};
use phone_registry::Registry;
use tracing::{debug, trace};

use crate::{CommandError, Operation, OperationReader, Result};

/// Executes [`Operation`]s against a [`Registry`] of bases.
#[derive(Debug, Default)]
pub struct Executor {
    registry: Registry,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse operations from `reader` and execute them one by one, writing
    /// their results to `writer`.
    ///
    /// Stops at the end of the input, or at the first error, which is
    /// returned. Results of the operations executed before the error have
    /// already been written.
    pub fn run<R: Read, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<()> {
        for operation in OperationReader::new(reader) {
            self.execute(&operation?, writer)?;
        }
        Ok(())
    }

    /// Execute a single operation.
    pub fn execute<W: Write>(&mut self, operation: &Operation, writer: &mut W) -> Result<()> {
        trace!(?operation, "executing");
        let result = self.dispatch(operation, writer);
        if let Err(error) = &result {
            debug!(?operation, %error, "operation failed");
        }
        result
    }

    fn dispatch<W: Write>(&mut self, operation: &Operation, writer: &mut W) -> Result<()> {
        let failed = || CommandError::Failed {
            operator: operation.operator(),
            position: operation.position(),
        };
        let engine_error = |error: PhoneForwardError| {
            CommandError::from_engine(error, operation.operator(), operation.position())
        };

        match operation {
            Operation::NewBase { id, .. } => {
                self.registry.select(id).map_err(engine_error)?;
            }
            Operation::DeleteBase { id, .. } => {
                if !self.registry.remove(id) {
                    return Err(failed());
                }
            }
            Operation::Add { from, to, .. } => {
                let base = self.registry.active_mut().ok_or_else(failed)?;
                base.add(from, to).map_err(engine_error)?;
            }
            Operation::Get { number, .. } => {
                let base = self.active().ok_or_else(failed)?;
                let list = base.get(number).map_err(engine_error)?;
                if list.is_empty() {
                    return Err(failed());
                }
                write_numbers(&list, writer)?;
            }
            Operation::Reverse { number, .. } => {
                let base = self.active().ok_or_else(failed)?;
                let list = base.reverse(number).map_err(engine_error)?;
                if list.is_empty() {
                    return Err(failed());
                }
                write_numbers(&list, writer)?;
            }
            Operation::Remove { prefix, .. } => {
                let base = self.registry.active_mut().ok_or_else(failed)?;
                base.remove(prefix);
            }
            Operation::NonTrivialCount { symbols, .. } => {
                let base = self.active().ok_or_else(failed)?;
                let length = symbols.len().saturating_sub(ALPHABET_SIZE);
                writeln!(writer, "{}", base.non_trivial_count(symbols, length))?;
            }
        }
        Ok(())
    }

    fn active(&self) -> Option<&PhoneForward> {
        self.registry.active()
    }
}

/// Write one number per line.
fn write_numbers<W: Write>(list: &NumberList, writer: &mut W) -> std::io::Result<()> {
    list.iter().try_for_each(|number| writeln!(writer, "{number}"))
}

/// Execute every operation read from `reader` on a fresh [`Executor`].
pub fn run<R: Read, W: Write>(reader: R, writer: &mut W) -> Result<()> {
    Executor::new().run(reader, writer)
}
