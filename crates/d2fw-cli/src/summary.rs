use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use d2fw_model::OutputFormat;

use crate::types::ConvertSummary;

pub fn print_summary(summary: &ConvertSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    println!("{}", summary_table(summary));
}

/// One row per run statistic, plus the date report when requested.
pub fn summary_table(summary: &ConvertSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Records written"), Cell::new(summary.rows)]);
    table.add_row(vec![Cell::new("Fields per record"), Cell::new(summary.fields)]);
    table.add_row(vec![
        Cell::new("Record width"),
        Cell::new(summary.record_width),
    ]);
    if let Some(report) = &summary.date_report {
        let label = format!("field {}", report.field);
        if report.dates.is_untouched() {
            table.add_row(vec![
                Cell::new(format!("Dates ({label})")),
                dim_cell("no values"),
            ]);
        } else {
            table.add_row(vec![
                Cell::new(format!("Oldest date ({label})")),
                date_cell(&report.dates.oldest),
            ]);
            table.add_row(vec![
                Cell::new(format!("Most recent date ({label})")),
                date_cell(&report.dates.most_recent),
            ]);
        }
    }
    table
}

pub fn print_formats() {
    println!("{}", formats_table());
}

/// Every output format a layout file may name.
pub fn formats_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output format"),
        header_cell("Padding"),
        header_cell("Conversion"),
    ]);
    apply_table_style(&mut table);
    for format in OutputFormat::all() {
        let padding = if format.is_numeric() {
            "zeros, left"
        } else {
            "spaces, right"
        };
        table.add_row(vec![
            Cell::new(format.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(padding),
            conversion_cell(*format),
        ]);
    }
    table
}

fn conversion_cell(format: OutputFormat) -> Cell {
    let description = match format {
        OutputFormat::Integer | OutputFormat::Text => return dim_cell("-"),
        OutputFormat::Decimal => "x100, rounded half to even",
        OutputFormat::Time => "HH:MM or HHMM to HHMM",
        OutputFormat::DateDdMmYyyy => "D/M/YYYY to YYYYMMDD",
        OutputFormat::DateMmDdYyyy => "M/D/YYYY to YYYYMMDD",
        _ => return dim_cell("-"),
    };
    Cell::new(description)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn date_cell(value: &str) -> Cell {
    if value.trim().is_empty() {
        dim_cell("(blank)")
    } else {
        Cell::new(value).fg(Color::Green)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
