//! Data model for the tab-delimited translator.

pub mod columns;
pub mod discard;
pub mod error;
pub mod format;
pub mod mapping;
pub mod summary;

pub use columns::RetainedColumns;
pub use discard::{DiscardCounts, DiscardReason};
pub use error::{Result, TranslateError};
pub use format::OutputFormat;
pub use mapping::ConfigMap;
pub use summary::TranslateSummary;
