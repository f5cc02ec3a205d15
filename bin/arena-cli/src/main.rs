// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # arena-cli
//!
//! Command-line driver for the epoch arena.
//!
//! ## Usage
//! ```bash
//! # Run five epochs of 1000 synthetic messages between 16 and 512 bytes
//! arena-cli simulate --epochs 5 --requests 1000 --min-size 16 --max-size 512
//!
//! # Same, with sizing loaded from a file and per-epoch stats as JSON lines
//! arena-cli --config arena.toml simulate --json
//!
//! # Print the effective configuration
//! arena-cli config
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arena-cli",
    about = "Drive synthetic message workloads through an epoch arena",
    version,
    author
)]
struct Cli {
    /// Path to a TOML arena configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate synthetic messages for several epochs, resetting between them.
    Simulate {
        /// Number of epochs to run.
        #[arg(short, long, default_value_t = 5)]
        epochs: usize,

        /// Messages allocated per epoch.
        #[arg(short, long, default_value_t = 1000)]
        requests: usize,

        /// Smallest message size in bytes.
        #[arg(long, default_value_t = 16)]
        min_size: usize,

        /// Largest message size in bytes.
        #[arg(long, default_value_t = 512)]
        max_size: usize,

        /// Print per-epoch statistics as JSON lines instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective arena configuration as TOML.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Simulate {
            epochs,
            requests,
            min_size,
            max_size,
            json,
        } => commands::simulate::execute(
            &config,
            commands::simulate::Workload {
                epochs,
                requests,
                min_size,
                max_size,
            },
            json,
        ),
        Commands::Config => commands::config::execute(&config),
    }
}
