use tdt_model::{ConfigMap, OutputFormat, RetainedColumns};

/// The outcome of projecting a header row through the column config:
/// the renamed output header and the set of input indices that
/// survive into the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderProjection {
    /// Output column names, in input column order.
    pub output_names: Vec<String>,
    /// Indices of the input columns that were retained.
    pub retained: RetainedColumns,
}

impl HeaderProjection {
    /// True when no input column matched the config; the row phase is
    /// skipped entirely in that case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.retained.is_empty()
    }

    /// Render the output header line, or `None` when nothing was
    /// retained (no header is written at all then).
    #[must_use]
    pub fn render(&self, format: &OutputFormat) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format.render_line(&self.output_names))
        }
    }
}

/// Project the header fields through the column config.
///
/// Iterates the header in order with a running 0-based index: a field
/// whose name is a config key contributes its mapped name and its
/// index; all other fields are counted but dropped. Output column
/// order therefore follows input order, never config-file order.
#[must_use]
pub fn project_header(headers: &[String], columns: &ConfigMap) -> HeaderProjection {
    let mut projection = HeaderProjection::default();
    for (index, name) in headers.iter().enumerate() {
        if let Some(renamed) = columns.get(name) {
            projection.output_names.push(renamed.to_string());
            projection.retained.insert(index);
        }
    }
    projection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn retains_mapped_columns_in_input_order() {
        let columns: ConfigMap = [("amount", "amt"), ("id", "vendor_id")].into_iter().collect();
        let projection = project_header(&headers(&["id", "name", "amount"]), &columns);

        assert_eq!(projection.output_names, vec!["vendor_id", "amt"]);
        let indices: Vec<usize> = projection.retained.iter().collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn renders_tab_joined_header() {
        let columns: ConfigMap = [("id", "vendor_id"), ("amount", "amt")].into_iter().collect();
        let projection = project_header(&headers(&["id", "name", "amount"]), &columns);

        assert_eq!(
            projection.render(&OutputFormat::default()),
            Some("vendor_id\tamt\n".to_string())
        );
    }

    #[test]
    fn empty_header_projects_to_nothing() {
        let columns: ConfigMap = [("id", "vendor_id")].into_iter().collect();
        let projection = project_header(&[], &columns);

        assert!(projection.is_empty());
        assert_eq!(projection.render(&OutputFormat::default()), None);
    }

    #[test]
    fn no_matching_columns_projects_to_nothing() {
        let columns: ConfigMap = [("nope", "still_nope")].into_iter().collect();
        let projection = project_header(&headers(&["id", "name"]), &columns);

        assert!(projection.is_empty());
        assert_eq!(projection.render(&OutputFormat::default()), None);
    }

    #[test]
    fn duplicate_header_names_retain_every_occurrence() {
        let columns: ConfigMap = [("id", "vendor_id")].into_iter().collect();
        let projection = project_header(&headers(&["id", "name", "id"]), &columns);

        assert_eq!(projection.output_names, vec!["vendor_id", "vendor_id"]);
        let indices: Vec<usize> = projection.retained.iter().collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
