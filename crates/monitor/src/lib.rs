// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # region-monitor
//!
//! Elapsed-time and invocation counters for named code regions.
//!
//! # Key Components
//! - [`Monitor`]: accumulates intervals for one region (total elapsed,
//!   count and average).
//! - [`MonitorGuard`]: a scoped value that times a region from creation to
//!   drop, so every exit path is measured.
//! - [`Dashboard`]: an explicit, owned registry of monitors keyed by region
//!   name, with lookup, a printable report, and `tracing` output.
//!
//! Everything here is single-owner and takes `&mut self` to record; give each
//! thread its own dashboard and merge reports if needed.
//!
//! # Example
//! ```
//! use region_monitor::Dashboard;
//!
//! let mut dashboard = Dashboard::new();
//! for _ in 0..3 {
//!     let _guard = dashboard.scope("handle_message");
//!     // region body
//! }
//! assert_eq!(dashboard.get("handle_message").unwrap().count(), 3);
//! println!("{}", dashboard.report());
//! ```

mod dashboard;
mod error;
mod guard;
mod monitor;

pub use dashboard::Dashboard;
pub use error::MonitorError;
pub use guard::MonitorGuard;
pub use monitor::Monitor;
