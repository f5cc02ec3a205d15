// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Arena configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! initial_block_size = "64K"
//! block_unit_size = "4K"
//! min_block_size = 64
//! max_request_size = "1G"
//! ```

use crate::sizing::DEFAULT_BLOCK_UNIT_SIZE;
use crate::{ArenaError, ByteSize};
use std::path::Path;

/// Initial block size used by [`Arena::new`](crate::Arena::new).
pub const DEFAULT_INITIAL_BLOCK_SIZE: usize = 64 * 1024;

/// Smallest initial block the sizing policy will pick.
pub const DEFAULT_MIN_BLOCK_SIZE: usize = 64;

/// Largest single request accepted by default.
pub const DEFAULT_MAX_REQUEST_SIZE: usize = 1024 * 1024 * 1024;

/// Configuration for an [`Arena`](crate::Arena).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArenaConfig {
    /// Size of the first epoch's initial block.
    #[serde(default = "default_initial_block_size")]
    pub initial_block_size: ByteSize,
    /// Minimum overflow block size for the first epoch.
    #[serde(default = "default_block_unit_size")]
    pub block_unit_size: ByteSize,
    /// Initial block size used after an epoch that held nothing.
    #[serde(default = "default_min_block_size")]
    pub min_block_size: ByteSize,
    /// Requests larger than this are rejected.
    #[serde(default = "default_max_request_size")]
    pub max_request_size: ByteSize,
}

fn default_initial_block_size() -> ByteSize {
    ByteSize::from_bytes(DEFAULT_INITIAL_BLOCK_SIZE)
}

fn default_block_unit_size() -> ByteSize {
    ByteSize::from_bytes(DEFAULT_BLOCK_UNIT_SIZE)
}

fn default_min_block_size() -> ByteSize {
    ByteSize::from_bytes(DEFAULT_MIN_BLOCK_SIZE)
}

fn default_max_request_size() -> ByteSize {
    ByteSize::from_bytes(DEFAULT_MAX_REQUEST_SIZE)
}

impl ArenaConfig {
    /// Creates a config with the given sizing parameters and default limits.
    ///
    /// `min_block_size` is lowered to `initial_block_size` when that is
    /// smaller than the default.
    pub fn with_sizes(initial_block_size: usize, block_unit_size: usize) -> Self {
        Self {
            initial_block_size: ByteSize::from_bytes(initial_block_size),
            block_unit_size: ByteSize::from_bytes(block_unit_size),
            min_block_size: ByteSize::from_bytes(DEFAULT_MIN_BLOCK_SIZE.min(initial_block_size)),
            ..Default::default()
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ArenaError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ArenaError::InvalidConfig(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ArenaError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ArenaError::InvalidConfig(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ArenaError> {
        toml::to_string_pretty(self)
            .map_err(|e| ArenaError::InvalidConfig(format!("TOML serialise error: {e}")))
    }

    /// Checks that the sizes are usable together.
    pub fn validate(&self) -> Result<(), ArenaError> {
        let initial = self.initial_block_size.as_bytes();
        let unit = self.block_unit_size.as_bytes();
        let min = self.min_block_size.as_bytes();
        let max = self.max_request_size.as_bytes();

        if initial == 0 || unit == 0 || min == 0 || max == 0 {
            return Err(ArenaError::InvalidConfig(
                "block and request sizes must be nonzero".into(),
            ));
        }
        if min > initial {
            return Err(ArenaError::InvalidConfig(format!(
                "min_block_size ({}) exceeds initial_block_size ({})",
                self.min_block_size, self.initial_block_size
            )));
        }
        if max < unit {
            return Err(ArenaError::InvalidConfig(format!(
                "max_request_size ({}) is smaller than block_unit_size ({})",
                self.max_request_size, self.block_unit_size
            )));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            initial_block_size: default_initial_block_size(),
            block_unit_size: default_block_unit_size(),
            min_block_size: default_min_block_size(),
            max_request_size: default_max_request_size(),
        }
    }
}
