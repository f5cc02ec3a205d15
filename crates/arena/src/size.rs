// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Human-readable byte sizes for arena configuration.
//!
//! A [`ByteSize`] is a byte count that can be written as `"64K"` or `"1M"` in
//! a config file and printed back the same way.

use crate::ArenaError;
use std::fmt;
use std::str::FromStr;

const KB: usize = 1024;
const MB: usize = 1024 * KB;
const GB: usize = 1024 * MB;

/// A byte count with human-readable parsing and display.
///
/// # Parsing
/// Accepts binary suffixes, case-insensitive:
/// - `"64K"` or `"64KB"` → 64 × 1024 bytes
/// - `"1M"` or `"1MB"` → 1024² bytes
/// - `"1G"` or `"1GB"` → 1024³ bytes
/// - `"600"` or `"600B"` → raw byte count
///
/// # Examples
/// ```
/// use epoch_arena::ByteSize;
///
/// let s: ByteSize = "64K".parse().unwrap();
/// assert_eq!(s.as_bytes(), 64 * 1024);
/// assert_eq!(s.to_string(), "64 KB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize {
    bytes: usize,
}

impl ByteSize {
    /// Creates a size from a byte count.
    pub const fn from_bytes(bytes: usize) -> Self {
        Self { bytes }
    }

    /// Creates a size from kibibytes.
    pub const fn from_kb(kb: usize) -> Self {
        Self { bytes: kb * KB }
    }

    /// Creates a size from mebibytes.
    pub const fn from_mb(mb: usize) -> Self {
        Self { bytes: mb * MB }
    }

    /// Creates a size from gibibytes.
    pub const fn from_gb(gb: usize) -> Self {
        Self { bytes: gb * GB }
    }

    /// Returns the size in bytes.
    pub const fn as_bytes(&self) -> usize {
        self.bytes
    }

    /// Parses a human-readable size string.
    ///
    /// Zero is accepted here; whether zero is meaningful is up to the
    /// caller (see [`ArenaConfig::validate`](crate::ArenaConfig::validate)).
    pub fn parse(s: &str) -> Result<Self, ArenaError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ArenaError::InvalidConfig("empty size string".into()));
        }

        let upper = s.to_ascii_uppercase();
        let (num_str, multiplier) = if upper.ends_with("GB") {
            (&s[..s.len() - 2], GB)
        } else if upper.ends_with('G') {
            (&s[..s.len() - 1], GB)
        } else if upper.ends_with("MB") {
            (&s[..s.len() - 2], MB)
        } else if upper.ends_with('M') {
            (&s[..s.len() - 1], MB)
        } else if upper.ends_with("KB") {
            (&s[..s.len() - 2], KB)
        } else if upper.ends_with('K') {
            (&s[..s.len() - 1], KB)
        } else if upper.ends_with('B') {
            (&s[..s.len() - 1], 1)
        } else {
            (s, 1)
        };

        let value: usize = num_str.trim().parse().map_err(|_| {
            ArenaError::InvalidConfig(format!(
                "invalid size '{s}': expected a number with an optional K, M or G suffix"
            ))
        })?;

        let bytes = value
            .checked_mul(multiplier)
            .ok_or_else(|| ArenaError::InvalidConfig(format!("size overflow: '{s}'")))?;

        Ok(Self { bytes })
    }
}

impl From<usize> for ByteSize {
    fn from(bytes: usize) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for ByteSize {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bytes >= GB && self.bytes % GB == 0 {
            write!(f, "{} GB", self.bytes / GB)
        } else if self.bytes >= MB && self.bytes % MB == 0 {
            write!(f, "{} MB", self.bytes / MB)
        } else if self.bytes >= KB && self.bytes % KB == 0 {
            write!(f, "{} KB", self.bytes / KB)
        } else {
            write!(f, "{} B", self.bytes)
        }
    }
}

// Serialised as a compact string ("64K") so config files stay readable;
// plain integers are accepted on the way in.
impl serde::Serialize for ByteSize {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let compact = if self.bytes >= GB && self.bytes % GB == 0 {
            format!("{}G", self.bytes / GB)
        } else if self.bytes >= MB && self.bytes % MB == 0 {
            format!("{}M", self.bytes / MB)
        } else if self.bytes >= KB && self.bytes % KB == 0 {
            format!("{}K", self.bytes / KB)
        } else {
            self.bytes.to_string()
        };
        serializer.serialize_str(&compact)
    }
}

impl<'de> serde::Deserialize<'de> for ByteSize {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bytes(usize),
            Text(String),
        }

        match <Raw as serde::Deserialize>::deserialize(deserializer)? {
            Raw::Bytes(bytes) => Ok(Self::from_bytes(bytes)),
            Raw::Text(text) => Self::parse(&text).map_err(serde::de::Error::custom),
        }
    }
}
