// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-epoch allocation statistics.
//!
//! [`EpochStats`] holds the counters the arena accumulates between two
//! resets. They feed the sizing policy and are exposed read-only for
//! diagnostics.

/// Counters accumulated by an arena over one epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct EpochStats {
    /// Epoch number these counters belong to.
    pub epoch: u64,
    /// Sum of the sizes of every block held this epoch.
    ///
    /// The initial block is counted once the first request is carved, so an
    /// epoch that made no requests reports zero.
    pub total_bytes: usize,
    /// Bytes handed out to callers this epoch.
    pub allocated_bytes: usize,
    /// Sum of requested sizes.
    pub request_sum: usize,
    /// Number of successful requests.
    pub request_count: usize,
    /// Overflow blocks acquired after the initial block ran out.
    pub overflow_blocks: usize,
}

impl EpochStats {
    /// Records a successful request of `size` bytes.
    pub(crate) fn record_request(&mut self, size: usize) {
        self.allocated_bytes += size;
        self.request_sum += size;
        self.request_count += 1;
    }

    /// Counts the initial block as held.
    pub(crate) fn record_initial_block(&mut self, size: usize) {
        self.total_bytes += size;
    }

    /// Records the acquisition of an overflow block of `size` bytes.
    pub(crate) fn record_overflow_block(&mut self, size: usize) {
        self.total_bytes += size;
        self.overflow_blocks += 1;
    }

    /// Mean request size with floor division, or `None` if nothing was requested.
    pub fn mean_request_size(&self) -> Option<usize> {
        self.request_sum.checked_div(self.request_count)
    }

    /// Fraction of held bytes handed out, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` when no memory is held.
    pub fn utilisation(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.allocated_bytes as f64 / self.total_bytes as f64
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        let mean = self
            .mean_request_size()
            .map_or_else(|| "n/a".to_string(), |m| format!("{m} B"));
        format!(
            "Epoch {}: {} overflow blocks, {} / {} bytes allocated ({:.0}% used), \
             {} requests (mean {mean})",
            self.epoch,
            self.overflow_blocks,
            self.allocated_bytes,
            self.total_bytes,
            self.utilisation() * 100.0,
            self.request_count,
        )
    }
}
