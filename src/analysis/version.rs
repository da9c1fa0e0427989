//! Compatibility versions.
//!
//! Analysis components take a [`Version`] at construction so that indexes
//! built with older behavior keep matching the queries analyzed against them.
//!
//! # Examples
//!
//! ```
//! use tokenflow::analysis::version::Version;
//!
//! let version: Version = "3.1".parse().unwrap();
//! assert_eq!(version, Version::V3_1);
//! assert!(version.on_or_after(Version::V2_4));
//! assert!("4.0".parse::<Version>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TokenflowError};

/// Behavior profile selected at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    V2_0,
    V2_1,
    V2_2,
    V2_3,
    /// Ambiguous `word.word.` spans are reclassified as hosts from here on.
    V2_4,
    V2_9,
    V3_0,
    /// The Unicode word-break scanner replaces the classic grammar from here on.
    V3_1,
}

impl Version {
    /// The most recent behavior.
    pub const LATEST: Version = Version::V3_1;

    /// The version older callers got when they did not name one.
    pub const LEGACY_DEFAULT: Version = Version::V2_4;

    const ALL: [Version; 8] = [
        Version::V2_0,
        Version::V2_1,
        Version::V2_2,
        Version::V2_3,
        Version::V2_4,
        Version::V2_9,
        Version::V3_0,
        Version::V3_1,
    ];

    pub fn on_or_after(self, other: Version) -> bool {
        self >= other
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Version::V2_0 => "2.0",
            Version::V2_1 => "2.1",
            Version::V2_2 => "2.2",
            Version::V2_3 => "2.3",
            Version::V2_4 => "2.4",
            Version::V2_9 => "2.9",
            Version::V3_0 => "3.0",
            Version::V3_1 => "3.1",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = TokenflowError;

    /// Accepts `"3.1"` as well as `"LUCENE_31"`; `"latest"` maps to [`Version::LATEST`].
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            return Ok(Version::LATEST);
        }

        let dotted = match s.strip_prefix("LUCENE_").map(|digits| {
            let mut chars = digits.chars();
            (chars.next(), chars.next(), chars.next())
        }) {
            Some((Some(major), Some(minor), None)) => format!("{major}.{minor}"),
            _ => s.to_string(),
        };

        Version::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == dotted)
            .ok_or_else(|| TokenflowError::config(format!("Unknown version: {s}")))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
