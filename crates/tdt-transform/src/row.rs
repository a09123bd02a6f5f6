use tdt_model::{ConfigMap, DiscardReason, RetainedColumns};

/// What became of a single data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row survived; fields are in output order, re-keyed.
    Emit(Vec<String>),
    /// The row was dropped; processing continues with the next row.
    Discard(DiscardReason),
}

/// Translate one data row against the key config and retained
/// columns.
///
/// The record key is field 0. Rows whose key is not in the key config
/// are dropped (the row filter); surviving rows carry the mapped
/// replacement key at index 0 and every other retained field
/// verbatim, in ascending index order. A row shorter than the largest
/// retained index is dropped rather than aborting the stream.
///
/// When index 0 itself is not retained (column 0's header was not in
/// the column config), the key still gates inclusion but the mapped
/// replacement never appears in the output.
#[must_use]
pub fn translate_row(
    fields: &[String],
    keys: &ConfigMap,
    retained: &RetainedColumns,
) -> RowOutcome {
    let Some(key) = fields.first() else {
        return RowOutcome::Discard(DiscardReason::EmptyLine);
    };
    let Some(replacement) = keys.get(key) else {
        return RowOutcome::Discard(DiscardReason::UnknownKey);
    };
    if let Some(max_index) = retained.max_index() {
        if fields.len() <= max_index {
            return RowOutcome::Discard(DiscardReason::TooShort {
                len: fields.len(),
                required: max_index + 1,
            });
        }
    }
    let output = retained
        .iter()
        .map(|index| {
            if index == 0 {
                replacement.to_string()
            } else {
                fields[index].clone()
            }
        })
        .collect();
    RowOutcome::Emit(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn retained(indices: &[usize]) -> RetainedColumns {
        indices.iter().copied().collect()
    }

    #[test]
    fn emits_re_keyed_row_over_retained_columns() {
        let keys: ConfigMap = [("V1", "VENDOR_1")].into_iter().collect();
        let outcome = translate_row(&fields(&["V1", "Alice", "100"]), &keys, &retained(&[0, 2]));

        assert_eq!(outcome, RowOutcome::Emit(fields(&["VENDOR_1", "100"])));
    }

    #[test]
    fn unknown_key_drops_the_row() {
        let keys: ConfigMap = [("V2", "VENDOR_2")].into_iter().collect();
        let outcome = translate_row(&fields(&["V1", "Alice", "100"]), &keys, &retained(&[0, 2]));

        assert_eq!(outcome, RowOutcome::Discard(DiscardReason::UnknownKey));
    }

    #[test]
    fn short_row_is_dropped_not_a_panic() {
        let keys: ConfigMap = [("V1", "VENDOR_1")].into_iter().collect();
        let outcome = translate_row(&fields(&["V1", "Alice"]), &keys, &retained(&[0, 2]));

        assert_eq!(
            outcome,
            RowOutcome::Discard(DiscardReason::TooShort { len: 2, required: 3 })
        );
    }

    #[test]
    fn empty_row_is_dropped() {
        let keys: ConfigMap = [("V1", "VENDOR_1")].into_iter().collect();
        let outcome = translate_row(&[], &keys, &retained(&[0]));

        assert_eq!(outcome, RowOutcome::Discard(DiscardReason::EmptyLine));
    }

    #[test]
    fn unretained_key_column_gates_but_never_appears() {
        // Column 0's header was not mapped, so index 0 is not
        // retained; the key still decides inclusion, the replacement
        // value is simply absent from the output.
        let keys: ConfigMap = [("V1", "VENDOR_1")].into_iter().collect();
        let outcome = translate_row(&fields(&["V1", "Alice", "100"]), &keys, &retained(&[1, 2]));

        assert_eq!(outcome, RowOutcome::Emit(fields(&["Alice", "100"])));
    }

    #[test]
    fn row_exactly_as_long_as_required_is_emitted() {
        let keys: ConfigMap = [("V1", "VENDOR_1")].into_iter().collect();
        let outcome = translate_row(&fields(&["V1", "Alice", "100"]), &keys, &retained(&[2]));

        assert_eq!(outcome, RowOutcome::Emit(fields(&["100"])));
    }
}
