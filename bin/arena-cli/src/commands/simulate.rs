// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `arena-cli simulate` command: run a synthetic message workload.
//!
//! Each epoch allocates `requests` messages with sizes spread across
//! `[min_size, max_size]`, writes a payload into every one, then resets the
//! arena. The arena re-sizes itself from each epoch, so the printed block
//! counts show the sizing heuristic settling.

use epoch_arena::{Arena, ArenaConfig};
use region_monitor::Dashboard;

/// Shape of the synthetic workload.
#[derive(Debug, Clone, Copy)]
pub struct Workload {
    pub epochs: usize,
    pub requests: usize,
    pub min_size: usize,
    pub max_size: usize,
}

impl Workload {
    /// Deterministic message size for request `i` of `epoch`.
    fn message_size(&self, epoch: usize, i: usize) -> usize {
        let span = self.max_size - self.min_size + 1;
        let mix = i
            .wrapping_mul(2_654_435_761)
            .wrapping_add(epoch.wrapping_mul(97));
        self.min_size + mix % span
    }
}

pub fn execute(config: &ArenaConfig, workload: Workload, json: bool) -> anyhow::Result<()> {
    anyhow::ensure!(workload.min_size > 0, "--min-size must be at least 1");
    anyhow::ensure!(
        workload.max_size >= workload.min_size,
        "--max-size ({}) must not be below --min-size ({})",
        workload.max_size,
        workload.min_size
    );

    let mut arena = Arena::with_config(config)?;
    let mut dashboard = Dashboard::new();

    if !json {
        println!("╔══════════════════════════════════════════════════════╗");
        println!("║            arena-cli · Epoch Simulation             ║");
        println!("╚══════════════════════════════════════════════════════╝");
        println!();
        println!("  Workload:");
        println!("   Epochs:    {}", workload.epochs);
        println!("   Requests:  {} per epoch", workload.requests);
        println!(
            "   Sizes:     {}..={} bytes",
            workload.min_size, workload.max_size
        );
        println!(
            "   Initial:   {} block, {} unit",
            config.initial_block_size, config.block_unit_size
        );
        println!();
    }

    for epoch in 0..workload.epochs {
        {
            let _guard = dashboard.scope("allocate_epoch");
            for i in 0..workload.requests {
                let size = workload.message_size(epoch, i);
                let slice = arena.allocate(size)?;
                arena.get_mut(&slice)?.fill((i % 251) as u8);
            }
        }

        if json {
            println!("{}", serde_json::to_string(&arena.stats())?);
        } else {
            println!("  {}", arena.debug_string());
        }

        let _guard = dashboard.scope("reset");
        arena.reset();
    }

    if !json {
        println!();
        println!("  After final reset:");
        println!(
            "   Next initial block: {} B, unit: {} B",
            arena.initial_block_size(),
            arena.block_unit_size()
        );
        println!();
        println!("  Timings:");
        for line in dashboard.report().lines() {
            println!("   {line}");
        }
    }
    dashboard.display();

    Ok(())
}
