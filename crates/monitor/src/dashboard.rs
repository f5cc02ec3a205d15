// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Registry of named region monitors.
//!
//! A [`Dashboard`] is an ordinary value: whoever owns it records into it and
//! queries it. There is no process-wide instance.

use crate::{Monitor, MonitorError, MonitorGuard};

/// Named [`Monitor`]s, ordered by region name.
#[derive(Debug, Default, Clone)]
pub struct Dashboard {
    /// Sorted by [`Monitor::name`].
    monitors: Vec<Monitor>,
}

impl Dashboard {
    /// Creates an empty dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the monitor for `name`, registering it on first use.
    pub fn monitor(&mut self, name: &str) -> &mut Monitor {
        let idx = match self.position(name) {
            Ok(idx) => idx,
            Err(idx) => {
                tracing::trace!(region = name, "registering monitor");
                self.monitors.insert(idx, Monitor::new(name));
                idx
            }
        };
        &mut self.monitors[idx]
    }

    /// Times a region until the returned guard is dropped.
    pub fn scope(&mut self, name: &str) -> MonitorGuard<'_> {
        self.monitor(name).scope()
    }

    /// Returns the monitor for `name` if it exists.
    pub fn get(&self, name: &str) -> Option<&Monitor> {
        self.position(name).ok().map(|idx| &self.monitors[idx])
    }

    /// Returns the info string for `name`.
    pub fn watch(&self, name: &str) -> Result<String, MonitorError> {
        self.get(name)
            .map(Monitor::info_string)
            .ok_or_else(|| MonitorError::UnknownRegion {
                name: name.to_string(),
            })
    }

    /// Iterates over all monitors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Monitor> {
        self.monitors.iter()
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// `true` if no region has been registered.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Removes every monitor.
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns every region's info string, one per line.
    pub fn report(&self) -> String {
        self.iter()
            .map(Monitor::info_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Logs every region's info string at `info` level.
    pub fn display(&self) {
        tracing::info!("dashboard: {} regions", self.len());
        for monitor in self.iter() {
            tracing::info!("{}", monitor.info_string());
        }
    }

    fn position(&self, name: &str) -> Result<usize, usize> {
        self.monitors
            .binary_search_by(|monitor| monitor.name().cmp(name))
    }
}

// Exported as a map keyed by region name.
impl serde::Serialize for Dashboard {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.monitors.iter().map(|m| (m.name(), m)))
    }
}
