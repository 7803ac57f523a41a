/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! `phfwd`: execute phone forward operations read from a file or stdin.
//!
//! Answers are written to stdout. The first error stops the program, which
//! then reports `ERROR <reason>` on stderr and exits with status 1.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use phone_command::CommandError;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod args;

fn main() -> ExitCode {
    let options = args::Options::parse();
    if let Err(error) = init_tracing(options.log_level) {
        eprintln!("unable to install the tracing subscriber: {error}");
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let result = match &options.input {
        Some(path) => File::open(path)
            .map_err(CommandError::from)
            .and_then(|file| phone_command::run(BufReader::new(file), &mut writer)),
        None => phone_command::run(io::stdin().lock(), &mut writer),
    };
    let flushed = writer.flush().map_err(CommandError::from);

    match result.and(flushed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("ERROR {error}");
            ExitCode::FAILURE
        }
    }
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_level`.
fn init_tracing(default_level: LevelFilter) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init()
}
