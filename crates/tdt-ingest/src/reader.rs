use std::io;

use csv::ReaderBuilder;

/// Reader configuration shared by config and data files: single tab
/// delimiter, no header handling, no quoting (tabs are the only
/// structure), variable-length records.
pub(crate) fn tab_reader() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

/// Unwrap the underlying I/O error from a `csv::Error`.
pub(crate) fn into_io(error: csv::Error) -> io::Error {
    match error.into_kind() {
        csv::ErrorKind::Io(source) => source,
        kind => io::Error::other(format!("{kind:?}")),
    }
}
