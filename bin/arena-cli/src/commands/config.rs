// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `arena-cli config` command: print the effective configuration.

use epoch_arena::ArenaConfig;

pub fn execute(config: &ArenaConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
