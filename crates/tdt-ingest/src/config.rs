use std::path::Path;

use tracing::debug;

use tdt_model::{ConfigMap, Result, TranslateError};

use crate::reader::{into_io, tab_reader};

/// A loaded configuration file: the mapping plus how many lines were
/// ignored for not having exactly two fields.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoad {
    pub map: ConfigMap,
    pub ignored_lines: usize,
}

/// Read a two-column tab-delimited config file into a [`ConfigMap`].
///
/// Lines that do not split into exactly two fields are ignored (and
/// counted), never an error. Duplicate keys: last write wins. Only
/// failing to open or read the file is fatal.
pub fn read_config_map(path: &Path) -> Result<ConfigLoad> {
    let mut reader = tab_reader()
        .from_path(path)
        .map_err(|error| TranslateError::ConfigRead {
            path: path.to_path_buf(),
            source: into_io(error),
        })?;

    let mut map = ConfigMap::new();
    let mut ignored_lines = 0usize;
    for record in reader.records() {
        let record = record.map_err(|error| TranslateError::ConfigRead {
            path: path.to_path_buf(),
            source: into_io(error),
        })?;
        if record.len() == 2 {
            map.insert(&record[0], &record[1]);
        } else {
            ignored_lines += 1;
            debug!(
                path = %path.display(),
                line = record.position().map_or(0, csv::Position::line),
                fields = record.len(),
                reason = "not exactly two fields",
                "config line ignored"
            );
        }
    }

    debug!(
        path = %path.display(),
        entries = map.len(),
        ignored_lines,
        "config loaded"
    );
    Ok(ConfigLoad { map, ignored_lines })
}
