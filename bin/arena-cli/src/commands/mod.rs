// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared setup.

pub mod config;
pub mod simulate;

use epoch_arena::ArenaConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber whose level follows the `-v` count.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the arena configuration from `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ArenaConfig> {
    match path {
        Some(path) => {
            let config = ArenaConfig::from_file(path)?;
            tracing::info!("loaded arena config from {}", path.display());
            Ok(config)
        }
        None => Ok(ArenaConfig::default()),
    }
}
