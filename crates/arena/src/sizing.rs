// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The block-sizing heuristic applied at reset.
//!
//! After each epoch the arena derives two numbers from what it observed:
//!
//! - the next initial block is half of everything the epoch held, and
//! - overflow blocks are twice the mean request size.
//!
//! Everything here is a pure function of [`EpochStats`], so the policy can be
//! checked without touching any memory.

use crate::EpochStats;

/// Overflow block size used when an epoch made no requests.
pub const DEFAULT_BLOCK_UNIT_SIZE: usize = 4096;

/// Sizing parameters carried from one epoch into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SizingPolicy {
    /// Size of the initial block acquired at the start of an epoch.
    pub initial_block_size: usize,
    /// Minimum size of each overflow block.
    pub block_unit_size: usize,
}

impl SizingPolicy {
    /// Creates a policy from explicit sizes.
    pub fn new(initial_block_size: usize, block_unit_size: usize) -> Self {
        Self {
            initial_block_size,
            block_unit_size,
        }
    }

    /// Derives the next epoch's policy from the ending epoch's statistics.
    ///
    /// `min_block_size` replaces the initial block size after an idle epoch,
    /// which held nothing to halve.
    pub fn from_epoch(stats: &EpochStats, min_block_size: usize) -> Self {
        Self {
            initial_block_size: next_initial_block_size(stats.total_bytes, min_block_size),
            block_unit_size: next_block_unit_size(stats.request_sum, stats.request_count),
        }
    }

    /// Size of the block to acquire when `request` bytes do not fit.
    #[inline]
    pub fn overflow_block_size(&self, request: usize) -> usize {
        overflow_block_size(request, self.block_unit_size)
    }
}

/// `total_bytes / 2`, or `min_block_size` when the epoch held nothing.
pub fn next_initial_block_size(total_bytes: usize, min_block_size: usize) -> usize {
    match total_bytes {
        0 => min_block_size,
        held => held / 2,
    }
}

/// Twice the floor of the mean request size, or [`DEFAULT_BLOCK_UNIT_SIZE`]
/// when there were no requests.
pub fn next_block_unit_size(request_sum: usize, request_count: usize) -> usize {
    match request_sum.checked_div(request_count) {
        Some(mean) => mean.saturating_mul(2).max(1),
        None => DEFAULT_BLOCK_UNIT_SIZE,
    }
}

/// A single oversized request gets a block of its own size; everything else
/// gets a unit-sized block.
#[inline]
pub fn overflow_block_size(request: usize, block_unit_size: usize) -> usize {
    request.max(block_unit_size)
}
