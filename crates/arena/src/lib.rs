// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # epoch-arena
//!
//! A single-threaded, reset-able region allocator for frequent, short-lived
//! byte buffers such as network messages.
//!
//! # Key Components
//!
//! - [`Arena`]: the allocator. Carves ranges from large blocks by bumping a
//!   cursor, acquires overflow blocks when the active one runs out, and
//!   releases everything at once on [`Arena::reset`].
//! - [`ArenaSlice`]: a handle to a carved range. Bytes are read and written
//!   through the arena that issued it; handles from a previous epoch are
//!   refused.
//! - [`SizingPolicy`]: the heuristic applied at reset. The next initial
//!   block is half of what the epoch held, overflow blocks are twice the
//!   mean request size.
//! - [`EpochStats`]: the counters gathered between resets.
//! - [`ArenaConfig`] / [`ByteSize`]: TOML-loadable sizing and limits.
//!
//! # Epochs
//!
//! ```text
//!   new() ──► allocate* ──► reset() ──► allocate* ──► reset() ──► ...
//!             └── epoch 0 ──┘           └── epoch 1 ──┘
//!                            │
//!                            └─ initial_block_size ← total_bytes / 2
//!                               block_unit_size    ← 2 × mean(request)
//! ```
//!
//! Only the two sizing parameters survive a reset; every block except a
//! freshly sized initial one is released.
//!
//! # Example
//! ```
//! use epoch_arena::Arena;
//!
//! let mut arena = Arena::with_sizes(600, 600).unwrap();
//! for _ in 0..10 {
//!     arena.allocate(100).unwrap();
//! }
//! assert_eq!(arena.total_bytes(), 1200);
//!
//! arena.reset();
//! assert_eq!(arena.initial_block_size(), 600);
//! assert_eq!(arena.block_unit_size(), 200);
//! ```

mod arena;
mod block;
mod config;
mod error;
mod size;
pub mod sizing;
mod stats;

pub use arena::Arena;
pub use block::ArenaSlice;
pub use config::{
    ArenaConfig, DEFAULT_INITIAL_BLOCK_SIZE, DEFAULT_MAX_REQUEST_SIZE, DEFAULT_MIN_BLOCK_SIZE,
};
pub use error::ArenaError;
pub use size::ByteSize;
pub use sizing::{SizingPolicy, DEFAULT_BLOCK_UNIT_SIZE};
pub use stats::EpochStats;
