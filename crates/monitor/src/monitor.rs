// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elapsed-time accumulator for one named code region.

use crate::MonitorGuard;
use std::time::{Duration, Instant};

/// Accumulated timing for a named code region.
///
/// Each [`begin`](Self::begin)/[`end`](Self::end) pair adds one interval.
/// Prefer [`scope`](Self::scope), which ends the interval on drop.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Monitor {
    /// Region name.
    name: String,
    /// Sum of every recorded interval.
    elapsed: Duration,
    /// Number of recorded intervals.
    count: u64,
    /// Start of the open interval, set by `begin`.
    #[serde(skip)]
    started: Instant,
}

impl Monitor {
    /// Creates an empty monitor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elapsed: Duration::ZERO,
            count: 0,
            started: Instant::now(),
        }
    }

    /// Opens an interval.
    pub fn begin(&mut self) {
        self.started = Instant::now();
    }

    /// Closes the interval opened by the last [`begin`](Self::begin).
    pub fn end(&mut self) {
        let interval = self.started.elapsed();
        self.record(interval);
    }

    /// Adds an externally measured interval.
    pub fn record(&mut self, interval: Duration) {
        self.elapsed += interval;
        self.count += 1;
    }

    /// Opens an interval that closes when the returned guard is dropped.
    pub fn scope(&mut self) -> MonitorGuard<'_> {
        MonitorGuard::new(self)
    }

    /// Region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total recorded time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of recorded intervals.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean interval, or zero if nothing was recorded.
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        let nanos = self.elapsed.as_nanos() / u128::from(self.count);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Returns a one-line summary suitable for logs or CLI output.
    pub fn info_string(&self) -> String {
        format!(
            "[{}] count = {}, elapsed = {:.3}ms, average = {:.3}ms",
            self.name,
            self.count,
            self.elapsed.as_secs_f64() * 1000.0,
            self.average().as_secs_f64() * 1000.0,
        )
    }
}
