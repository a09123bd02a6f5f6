use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a single data row was dropped instead of translated.
///
/// Discards are the recoverable half of the error taxonomy: they are
/// counted and logged but never abort the stream. Config-line
/// discards (not exactly two fields) are a separate concern tracked
/// by the config loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscardReason {
    /// A data line with no fields at all.
    EmptyLine,
    /// A data row whose record key is not in the key config.
    UnknownKey,
    /// A data row with fewer fields than the largest retained index
    /// requires.
    TooShort { len: usize, required: usize },
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "empty line"),
            Self::UnknownKey => write!(f, "unrecognized record key"),
            Self::TooShort { len, required } => {
                write!(f, "row has {len} fields, {required} required")
            }
        }
    }
}

/// Per-reason discard counters for data rows, reported in the run
/// summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardCounts {
    pub empty_line: usize,
    pub unknown_key: usize,
    pub too_short: usize,
}

impl DiscardCounts {
    pub fn record(&mut self, reason: DiscardReason) {
        match reason {
            DiscardReason::EmptyLine => self.empty_line += 1,
            DiscardReason::UnknownKey => self.unknown_key += 1,
            DiscardReason::TooShort { .. } => self.too_short += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.empty_line + self.unknown_key + self.too_short
    }
}
