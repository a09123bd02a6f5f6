//! CLI library components for the tab-delimited data translator.

pub mod logging;
pub mod pipeline;
pub mod summary;
