use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::DiscardCounts;

/// Counts observed over one translation run.
///
/// Serializable so callers can emit a machine-readable report next to
/// the human summary table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateSummary {
    /// Path the translated output was written to.
    pub output_path: PathBuf,
    /// Number of columns retained by header projection.
    pub retained_columns: usize,
    /// Whether a header line was written (false when nothing matched).
    pub header_written: bool,
    /// Data rows read from the input (header excluded).
    pub rows_read: usize,
    /// Rows written to the output.
    pub rows_written: usize,
    /// Data rows dropped, by reason.
    pub discards: DiscardCounts,
    /// Config lines ignored across both config files.
    pub config_lines_ignored: usize,
}

impl TranslateSummary {
    /// True when every row read was either written or accounted for
    /// by a discard counter.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.rows_written + self.discards.total() == self.rows_read
    }
}
