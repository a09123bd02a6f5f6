use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tdt_model::{Result, TranslateError};

use crate::reader::{into_io, tab_reader};

/// Streaming reader over a tab-delimited data file.
///
/// The header is the first physical line of the file, read
/// positionally at open time: a blank first line means there is no
/// header, it is never promoted from a later line. Data rows are
/// pulled one at a time afterwards; the whole file is never held in
/// memory.
pub struct DataReader {
    path: PathBuf,
    header: Option<Vec<String>>,
    records: csv::StringRecordsIntoIter<BufReader<File>>,
}

impl DataReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| TranslateError::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut buffered = BufReader::new(file);
        let mut first_line = String::new();
        buffered
            .read_line(&mut first_line)
            .map_err(|source| TranslateError::InputRead {
                path: path.to_path_buf(),
                source,
            })?;
        let trimmed = first_line.trim_end_matches(['\n', '\r']);
        let header = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.split('\t').map(str::to_string).collect())
        };
        Ok(Self {
            path: path.to_path_buf(),
            header,
            records: tab_reader().from_reader(buffered).into_records(),
        })
    }

    /// The header fields from the first physical line, or `None` when
    /// the file is empty or starts with a blank line.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// The next data row as owned fields, or `None` at end of file.
    ///
    /// Blank lines between data rows are skipped by the underlying
    /// reader.
    pub fn next_row(&mut self) -> Result<Option<Vec<String>>> {
        match self.records.next() {
            None => Ok(None),
            Some(Ok(record)) => Ok(Some(record.iter().map(str::to_string).collect())),
            Some(Err(error)) => Err(TranslateError::InputRead {
                path: self.path.clone(),
                source: into_io(error),
            }),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for DataReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataReader")
            .field("path", &self.path)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}
