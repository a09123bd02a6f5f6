//! The translation pipeline, one linear pass over the input.
//!
//! Stages in order:
//! 1. **Load configs**: read both two-column mappings
//! 2. **Read header**: first line of the data file
//! 3. **Project header**: decide retained columns and output names
//! 4. **Open output**: create parent directories, create or truncate
//! 5. **Stream rows**: translate and write each surviving row
//!
//! Empty results (no header, no matching columns, no matching rows)
//! are success; only setup and I/O failures abort the run. File
//! handles are released on every path by drop.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span};

use tdt_ingest::{ConfigLoad, DataReader, read_config_map};
use tdt_model::{OutputFormat, Result, TranslateError, TranslateSummary};
use tdt_transform::{HeaderProjection, RowOutcome, project_header, translate_row};

/// Paths for one translation run.
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    pub data_path: PathBuf,
    pub column_config_path: PathBuf,
    pub key_config_path: PathBuf,
    pub output_path: PathBuf,
}

/// Run the whole pipeline for one request.
pub fn translate(request: &TranslateRequest) -> Result<TranslateSummary> {
    let span = info_span!("translate", data = %request.data_path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let format = OutputFormat::default();

    let columns = load_required_config(&request.column_config_path)?;
    let keys = load_required_config(&request.key_config_path)?;

    let mut reader = DataReader::open(&request.data_path)?;

    // The header is positional: a blank first line means no header
    // and therefore nothing to project.
    let projection = match reader.header() {
        Some(fields) => project_header(fields, &columns.map),
        None => HeaderProjection::default(),
    };
    debug!(
        header_columns = reader.header().map_or(0, <[String]>::len),
        retained_columns = projection.retained.len(),
        "header projected"
    );

    // The output file is created (and truncated) even when nothing
    // will be written, so an empty run leaves an empty file behind.
    let mut writer = open_output(&request.output_path)?;

    let mut summary = TranslateSummary {
        output_path: request.output_path.clone(),
        retained_columns: projection.retained.len(),
        config_lines_ignored: columns.ignored_lines + keys.ignored_lines,
        ..TranslateSummary::default()
    };

    if let Some(line) = projection.render(&format) {
        write_line(&mut writer, &request.output_path, &line)?;
        summary.header_written = true;
    }

    // Row phase is skipped entirely when no column survived
    // projection.
    if !projection.is_empty() {
        let stream_span = info_span!("stream_rows");
        let _stream_guard = stream_span.enter();
        while let Some(fields) = reader.next_row()? {
            summary.rows_read += 1;
            match translate_row(&fields, &keys.map, &projection.retained) {
                RowOutcome::Emit(output) => {
                    let line = format.render_line(&output);
                    write_line(&mut writer, &request.output_path, &line)?;
                    summary.rows_written += 1;
                }
                RowOutcome::Discard(reason) => {
                    summary.discards.record(reason);
                    debug!(row = summary.rows_read, reason = %reason, "row discarded");
                }
            }
        }
    }

    writer
        .flush()
        .map_err(|source| TranslateError::OutputWrite {
            path: request.output_path.clone(),
            source,
        })?;

    info!(
        rows_read = summary.rows_read,
        rows_written = summary.rows_written,
        rows_discarded = summary.discards.total(),
        retained_columns = summary.retained_columns,
        config_lines_ignored = summary.config_lines_ignored,
        duration_ms = start.elapsed().as_millis(),
        "translation complete"
    );
    Ok(summary)
}

/// Load a config file and require it to be non-empty; a config that
/// maps nothing would translate nothing, which is a setup mistake,
/// not a valid run.
fn load_required_config(path: &Path) -> Result<ConfigLoad> {
    let load = read_config_map(path)?;
    if load.map.is_empty() {
        return Err(TranslateError::ConfigEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(load)
}

fn open_output(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| TranslateError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    let file = File::create(path).map_err(|source| TranslateError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

fn write_line(writer: &mut BufWriter<File>, path: &Path, line: &str) -> Result<()> {
    writer
        .write_all(line.as_bytes())
        .map_err(|source| TranslateError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })
}
