/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Options {
    /// File to read operations from. Operations are read from stdin when
    /// omitted.
    pub input: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,
}
