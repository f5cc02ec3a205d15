// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! RAII guard that records a region's elapsed time on drop.
//!
//! A [`MonitorGuard`] borrows its [`Monitor`] mutably for as long as the
//! region runs, so the interval is recorded on every exit path, including
//! early returns and `?`.

use crate::Monitor;
use std::time::{Duration, Instant};

/// Times a region from creation until drop.
///
/// # Example
/// ```
/// use region_monitor::Monitor;
///
/// let mut monitor = Monitor::new("encode");
/// {
///     let _guard = monitor.scope();
///     // region body
/// }
/// assert_eq!(monitor.count(), 1);
/// ```
pub struct MonitorGuard<'a> {
    monitor: &'a mut Monitor,
    start: Instant,
}

impl<'a> MonitorGuard<'a> {
    pub(crate) fn new(monitor: &'a mut Monitor) -> Self {
        Self {
            monitor,
            start: Instant::now(),
        }
    }

    /// Time spent in the region so far.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Name of the region being timed.
    pub fn name(&self) -> &str {
        self.monitor.name()
    }
}

impl Drop for MonitorGuard<'_> {
    fn drop(&mut self) {
        self.monitor.record(self.start.elapsed());
    }
}

impl std::fmt::Debug for MonitorGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorGuard")
            .field("name", &self.monitor.name())
            .field("elapsed", &self.elapsed())
            .finish()
    }
}
