use std::io;
use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use tdt_model::TranslateSummary;

/// Print the end-of-run summary table to stdout.
pub fn print_summary(summary: &TranslateSummary) {
    println!("Output: {}", summary.output_path.display());
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Count"]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![
        "Retained columns".to_string(),
        summary.retained_columns.to_string(),
    ]);
    table.add_row(vec![
        "Header written".to_string(),
        if summary.header_written { "yes" } else { "no" }.to_string(),
    ]);
    table.add_row(vec!["Rows read".to_string(), summary.rows_read.to_string()]);
    table.add_row(vec![
        "Rows written".to_string(),
        summary.rows_written.to_string(),
    ]);
    table.add_row(vec![
        "Dropped: unknown key".to_string(),
        summary.discards.unknown_key.to_string(),
    ]);
    table.add_row(vec![
        "Dropped: short row".to_string(),
        summary.discards.too_short.to_string(),
    ]);
    table.add_row(vec![
        "Dropped: empty line".to_string(),
        summary.discards.empty_line.to_string(),
    ]);
    table.add_row(vec![
        "Config lines ignored".to_string(),
        summary.config_lines_ignored.to_string(),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Write the summary as JSON next to the human-readable table.
pub fn write_summary_json(path: &Path, summary: &TranslateSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    std::fs::write(path, json)
}
