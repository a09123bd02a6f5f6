//! File ingestion: two-column config maps and streaming data rows.

pub mod config;
pub mod data;
mod reader;

pub use config::{ConfigLoad, read_config_map};
pub use data::DataReader;
