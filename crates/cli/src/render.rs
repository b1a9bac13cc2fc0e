//! Console rendering for tables and the active filter list.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table as ConsoleTable};
use data_loader::{Table, Value};
use filters::ConstraintSet;
use std::io::Write;

/// Lay out every row and column of `table`, never truncating cells
pub fn format_table(table: &Table) -> ConsoleTable {
    let mut out = ConsoleTable::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled);

    let header: Vec<Cell> = table
        .columns()
        .iter()
        .map(|c| Cell::new(c).fg(Color::Cyan))
        .collect();
    out.set_header(header);

    for row in table.rows() {
        let cells: Vec<Cell> = row.values().iter().map(|v| Cell::new(cell_text(v))).collect();
        out.add_row(cells);
    }
    out
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Missing => "-".to_string(),
        other => other.to_string(),
    }
}

/// Print `table`, or `empty_message` when it has no rows
pub fn print_table<W: Write>(out: &mut W, table: &Table, empty_message: &str) -> std::io::Result<()> {
    if table.is_empty() {
        writeln!(out, "{}", empty_message.dimmed())
    } else {
        writeln!(out, "{}", format_table(table))?;
        writeln!(out, "{}", format!("Rows: {}", table.len()).dimmed())
    }
}

/// The "Current filters are:" block shown before each top-level menu
pub fn print_filters<W: Write>(out: &mut W, filters: &ConstraintSet) -> std::io::Result<()> {
    writeln!(out, "{}", "Current filters are:".bold().blue())?;
    if filters.is_empty() {
        writeln!(out, "\t{}", "No filters applied".dimmed())?;
    }
    for (field, constraint) in filters.active() {
        writeln!(out, "\t{field}: {constraint}")?;
    }
    Ok(())
}
