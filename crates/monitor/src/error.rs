// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for region monitoring.

/// Errors returned by [`Dashboard`](crate::Dashboard) queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonitorError {
    /// No region with this name has been registered.
    #[error("no monitor registered for region '{name}'")]
    UnknownRegion { name: String },
}
