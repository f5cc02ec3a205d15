// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bump-pointer arena with epoch-based resizing.
//!
//! The [`Arena`] serves short-lived byte ranges out of a few large blocks:
//!
//! 1. Requests that fit the active block are carved by advancing a cursor.
//! 2. Requests that do not fit get a fresh overflow block of
//!    `max(size, block_unit_size)` bytes; the tail of the old block is left
//!    unused for the rest of the epoch.
//! 3. [`Arena::reset`] drops every overflow block, re-sizes the initial block
//!    from what the epoch used, and starts a new epoch.
//!
//! # Thread Safety
//! `Arena` is `Send` but takes `&mut self` for every mutation. Use one arena
//! per thread or per unit of work; it does no locking of its own.

use crate::block::{ArenaSlice, Block};
use crate::sizing::SizingPolicy;
use crate::{ArenaConfig, ArenaError, EpochStats};

/// A reset-able region allocator.
///
/// # Example
/// ```
/// use epoch_arena::Arena;
///
/// let mut arena = Arena::with_sizes(1000, 600).unwrap();
///
/// let a = arena.allocate(100).unwrap();
/// let b = arena.allocate(100).unwrap();
/// assert_eq!(b.offset() - a.offset(), 100);
///
/// arena.get_mut(&a).unwrap().copy_from_slice(&[7; 100]);
/// assert_eq!(arena.get(&a).unwrap()[0], 7);
///
/// // Everything is released at once.
/// arena.reset();
/// assert!(arena.get(&a).is_err());
/// ```
pub struct Arena {
    /// First block of the epoch, sized by the policy.
    initial_block: Block,
    /// Blocks acquired after the initial block ran out, in order.
    extra_blocks: Vec<Block>,
    /// Next free byte in the active block.
    cursor: usize,
    /// Counters for the current epoch.
    stats: EpochStats,
    /// Sizes in force for this epoch; recomputed at reset.
    policy: SizingPolicy,
    /// Initial block size after an idle epoch.
    min_block_size: usize,
    /// Requests above this are rejected.
    max_request_size: usize,
}

impl Arena {
    /// Creates an arena with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(&ArenaConfig::default())
    }

    /// Creates an arena with explicit initial block and unit sizes and
    /// default limits.
    ///
    /// Returns [`ArenaError::InvalidConfig`] if either size is zero.
    pub fn with_sizes(
        initial_block_size: usize,
        block_unit_size: usize,
    ) -> Result<Self, ArenaError> {
        let mut config = ArenaConfig::with_sizes(initial_block_size, block_unit_size);
        if config.max_request_size.as_bytes() < block_unit_size {
            config.max_request_size = block_unit_size.into();
        }
        Self::with_config(&config)
    }

    /// Creates an arena from a configuration, validating it first.
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &ArenaConfig) -> Self {
        let policy = SizingPolicy::new(
            config.initial_block_size.as_bytes(),
            config.block_unit_size.as_bytes(),
        );
        Self {
            initial_block: Block::new(policy.initial_block_size),
            extra_blocks: Vec::new(),
            cursor: 0,
            stats: EpochStats::default(),
            policy,
            min_block_size: config.min_block_size.as_bytes(),
            max_request_size: config.max_request_size.as_bytes(),
        }
    }

    /// Carves `size` bytes and returns a handle to them.
    ///
    /// The range stays valid until the next [`reset`](Self::reset) or until
    /// the arena is dropped. Its bytes start zeroed.
    ///
    /// Zero-sized requests and requests above the configured maximum are
    /// rejected and leave the arena untouched.
    pub fn allocate(&mut self, size: usize) -> Result<ArenaSlice, ArenaError> {
        self.check_request(size)?;

        if self.stats.total_bytes == 0 {
            self.stats.record_initial_block(self.initial_block.len());
        }

        if self.remaining() < size {
            let block_size = self.policy.overflow_block_size(size);
            tracing::trace!(
                request = size,
                remaining = self.remaining(),
                block_size,
                "acquiring overflow block"
            );
            self.extra_blocks.push(Block::new(block_size));
            self.cursor = 0;
            self.stats.record_overflow_block(block_size);
        }

        let slice = ArenaSlice {
            epoch: self.stats.epoch,
            block: self.extra_blocks.len(),
            offset: self.cursor,
            len: size,
        };
        self.cursor += size;
        self.stats.record_request(size);

        Ok(slice)
    }

    /// Allocates `data.len()` bytes and copies `data` into them.
    pub fn alloc_copy(&mut self, data: &[u8]) -> Result<ArenaSlice, ArenaError> {
        let slice = self.allocate(data.len())?;
        self.get_mut(&slice)?.copy_from_slice(data);
        Ok(slice)
    }

    /// Returns the bytes named by `slice`.
    pub fn get(&self, slice: &ArenaSlice) -> Result<&[u8], ArenaError> {
        self.check_epoch(slice)?;
        self.block(slice.block)
            .and_then(|b| b.get(slice.range()))
            .ok_or_else(|| invalid_handle(slice))
    }

    /// Returns the bytes named by `slice`, mutably.
    pub fn get_mut(&mut self, slice: &ArenaSlice) -> Result<&mut [u8], ArenaError> {
        self.check_epoch(slice)?;
        let block = match slice.block {
            0 => Some(&mut self.initial_block),
            n => self.extra_blocks.get_mut(n - 1),
        };
        block
            .and_then(|b| b.get_mut(slice.range()))
            .ok_or_else(|| invalid_handle(slice))
    }

    /// Ends the current epoch.
    ///
    /// Every handle issued so far becomes stale. Overflow blocks are
    /// released, the sizing parameters are recomputed from the epoch's
    /// counters, and a fresh initial block of the new size is acquired.
    pub fn reset(&mut self) {
        let ended = std::mem::take(&mut self.stats);
        self.policy = SizingPolicy::from_epoch(&ended, self.min_block_size);

        self.extra_blocks.clear();
        self.initial_block = Block::new(self.policy.initial_block_size);
        self.cursor = 0;
        self.stats.epoch = ended.epoch + 1;

        tracing::debug!(
            epoch = ended.epoch,
            total_bytes = ended.total_bytes,
            requests = ended.request_count,
            initial_block_size = self.policy.initial_block_size,
            block_unit_size = self.policy.block_unit_size,
            "arena reset"
        );
    }

    /// Bytes left in the active block.
    pub fn remaining(&self) -> usize {
        self.active_block().len() - self.cursor
    }

    /// Size of this epoch's initial block.
    pub fn initial_block_size(&self) -> usize {
        self.policy.initial_block_size
    }

    /// Minimum size of overflow blocks this epoch.
    pub fn block_unit_size(&self) -> usize {
        self.policy.block_unit_size
    }

    /// The sizing parameters in force.
    pub fn policy(&self) -> SizingPolicy {
        self.policy
    }

    /// Bytes held this epoch (see [`EpochStats::total_bytes`]).
    pub fn total_bytes(&self) -> usize {
        self.stats.total_bytes
    }

    /// Bytes handed out this epoch.
    pub fn allocated_bytes(&self) -> usize {
        self.stats.allocated_bytes
    }

    /// Sum of requested sizes this epoch.
    pub fn request_sum(&self) -> usize {
        self.stats.request_sum
    }

    /// Number of successful requests this epoch.
    pub fn request_count(&self) -> usize {
        self.stats.request_count
    }

    /// Number of overflow blocks currently held.
    pub fn extra_block_count(&self) -> usize {
        self.extra_blocks.len()
    }

    /// Number of blocks currently held, initial block included.
    pub fn block_count(&self) -> usize {
        1 + self.extra_blocks.len()
    }

    /// Size of the block at `index` (`0` is the initial block).
    pub fn block_size(&self, index: usize) -> Option<usize> {
        self.block(index).map(Block::len)
    }

    /// Current epoch number; starts at zero and increases on every reset.
    pub fn epoch(&self) -> u64 {
        self.stats.epoch
    }

    /// Returns a snapshot of this epoch's counters.
    pub fn stats(&self) -> EpochStats {
        self.stats.clone()
    }

    /// Returns a one-line diagnostic summary of sizing and usage.
    pub fn debug_string(&self) -> String {
        let mean = self
            .stats
            .mean_request_size()
            .map_or_else(|| "n/a".to_string(), |m| m.to_string());
        format!(
            "Arena[epoch {}]: initial block {} B, unit {} B, {} blocks ({} extra), \
             held {} B, allocated {} B ({:.0}% used), remaining {} B, \
             {} requests (avg {mean} B)",
            self.stats.epoch,
            self.policy.initial_block_size,
            self.policy.block_unit_size,
            self.block_count(),
            self.extra_blocks.len(),
            self.stats.total_bytes,
            self.stats.allocated_bytes,
            self.stats.utilisation() * 100.0,
            self.remaining(),
            self.stats.request_count,
        )
    }

    fn check_request(&self, size: usize) -> Result<(), ArenaError> {
        if size == 0 {
            tracing::warn!("rejected zero-sized arena request");
            return Err(ArenaError::ZeroSizedAllocation);
        }
        if size > self.max_request_size {
            tracing::warn!(
                requested = size,
                max = self.max_request_size,
                "rejected oversized arena request"
            );
            return Err(ArenaError::RequestTooLarge {
                requested_bytes: size,
                max_bytes: self.max_request_size,
            });
        }
        Ok(())
    }

    fn check_epoch(&self, slice: &ArenaSlice) -> Result<(), ArenaError> {
        if slice.epoch != self.stats.epoch {
            return Err(ArenaError::StaleHandle {
                handle_epoch: slice.epoch,
                current_epoch: self.stats.epoch,
            });
        }
        Ok(())
    }

    fn block(&self, index: usize) -> Option<&Block> {
        match index {
            0 => Some(&self.initial_block),
            n => self.extra_blocks.get(n - 1),
        }
    }

    fn active_block(&self) -> &Block {
        self.extra_blocks.last().unwrap_or(&self.initial_block)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_handle(slice: &ArenaSlice) -> ArenaError {
    ArenaError::InvalidHandle {
        block: slice.block,
        offset: slice.offset,
        end: slice.offset + slice.len,
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("epoch", &self.stats.epoch)
            .field("initial_block_size", &self.policy.initial_block_size)
            .field("block_unit_size", &self.policy.block_unit_size)
            .field("extra_blocks", &self.extra_blocks.len())
            .field("remaining", &self.remaining())
            .field("total_bytes", &self.stats.total_bytes)
            .field("allocated_bytes", &self.stats.allocated_bytes)
            .finish()
    }
}
