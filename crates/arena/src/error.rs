// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the arena.
//!
//! Running out of memory is not represented here: block acquisition goes
//! through the global allocator and aborts the process on failure.

/// Errors that can occur when allocating from or configuring an [`Arena`](crate::Arena).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    /// Attempted to allocate a zero-sized range.
    #[error("cannot allocate zero-sized range")]
    ZeroSizedAllocation,

    /// The request exceeds the configured per-request ceiling.
    #[error("request of {requested_bytes} bytes exceeds the maximum of {max_bytes} bytes")]
    RequestTooLarge {
        requested_bytes: usize,
        max_bytes: usize,
    },

    /// A handle carved in an earlier epoch was used after a reset.
    #[error("stale handle from epoch {handle_epoch} used in epoch {current_epoch}")]
    StaleHandle {
        handle_epoch: u64,
        current_epoch: u64,
    },

    /// The handle names a range this arena never issued.
    #[error("handle does not name a range in this arena (block {block}, bytes {offset}..{end})")]
    InvalidHandle {
        block: usize,
        offset: usize,
        end: usize,
    },

    /// The arena configuration is invalid or could not be parsed.
    #[error("invalid arena configuration: {0}")]
    InvalidConfig(String),
}
