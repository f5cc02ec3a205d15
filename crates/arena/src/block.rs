// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Arena-owned memory blocks and the handles carved from them.

use std::ops::Range;

/// One contiguous span of memory owned by an arena.
///
/// Blocks are zero-filled on acquisition and never handed to callers; only
/// [`ArenaSlice`] handles into them leave the arena.
pub(crate) struct Block {
    data: Box<[u8]>,
}

impl Block {
    /// Acquires a zero-filled block of `size` bytes.
    ///
    /// Aborts the process if the global allocator cannot satisfy the request.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            data: vec![0u8; size].into_boxed_slice(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn get(&self, range: Range<usize>) -> Option<&[u8]> {
        self.data.get(range)
    }

    pub(crate) fn get_mut(&mut self, range: Range<usize>) -> Option<&mut [u8]> {
        self.data.get_mut(range)
    }
}

/// A handle to a byte range carved from an [`Arena`](crate::Arena).
///
/// The handle is a plain value: it names the block, offset and length of the
/// range and the epoch it was carved in. The bytes themselves are reached
/// through [`Arena::get`](crate::Arena::get) and
/// [`Arena::get_mut`](crate::Arena::get_mut), which refuse handles from an
/// earlier epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ArenaSlice {
    pub(crate) epoch: u64,
    pub(crate) block: usize,
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl ArenaSlice {
    /// Epoch the range was carved in.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Index of the owning block: `0` is the initial block, `n` the n-th
    /// overflow block.
    pub fn block_index(&self) -> usize {
        self.block
    }

    /// Byte offset of the range within its block.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the range is empty. Arenas never issue empty ranges.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The range within the owning block.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// `true` if both handles name overlapping bytes of the same block in
    /// the same epoch.
    pub fn overlaps(&self, other: &ArenaSlice) -> bool {
        self.epoch == other.epoch
            && self.block == other.block
            && self.offset < other.offset + other.len
            && other.offset < self.offset + self.len
    }
}
