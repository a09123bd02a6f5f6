//! The translation core: header projection and row translation.
//!
//! Both operations are pure; the pipeline in `tdt-cli` feeds them
//! from the streaming reader and writes whatever they emit.

pub mod header;
pub mod row;

pub use header::{HeaderProjection, project_header};
pub use row::{RowOutcome, translate_row};
