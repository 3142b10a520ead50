//! Console tables for suggestions, run summaries and query results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use claims_model::{CANONICAL_FIELDS, ClaimRecord, MappingEntry, NA};
use claims_report::{ClaimTypeByLocation, DistributionEntry};
use claims_standardise::StandardiseReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn print_fields_table() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Row-required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for field in CANONICAL_FIELDS {
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(format!("{:?}", field.kind())),
            if field.is_row_required() {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("-")
            },
        ]);
    }
    println!("{table}");
}

pub fn print_suggestion_table(entries: &[MappingEntry], min_confidence: f32) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Source column"),
        header_cell("Confidence"),
        header_cell("Accepted"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for entry in entries {
        let confidence = format!("{:.0}%", entry.confidence * 100.0);
        let confidence_cell = if entry.confidence >= 0.85 {
            Cell::new(confidence).fg(Color::Green)
        } else if entry.confidence >= min_confidence {
            Cell::new(confidence).fg(Color::Yellow)
        } else {
            Cell::new(confidence).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(entry.canonical_field.as_str()),
            Cell::new(&entry.source_column),
            confidence_cell,
            if entry.confidence >= min_confidence {
                Cell::new("✓").fg(Color::Green)
            } else {
                dim_cell("manual")
            },
        ]);
    }
    println!("{table}");
}

pub fn print_run_summary(report: &StandardiseReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows in"),
        header_cell("Kept"),
        header_cell("Dropped"),
        header_cell("Cell issues"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(report.input_rows),
        Cell::new(report.kept_rows),
        count_cell(report.dropped.len()),
        count_cell(report.issues.len()),
    ]);
    println!("{table}");
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

pub fn print_issue_table(report: &StandardiseReport) {
    if report.dropped.is_empty() && report.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Problem"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for dropped in &report.dropped {
        let fields = dropped
            .missing_fields
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(dropped.row_index),
            Cell::new(fields),
            Cell::new("row dropped").fg(Color::Red),
            dim_cell("-"),
        ]);
    }
    for issue in &report.issues {
        table.add_row(vec![
            Cell::new(issue.row_index),
            Cell::new(issue.field.as_str()),
            Cell::new(issue.kind.as_str()).fg(Color::Yellow),
            Cell::new(&issue.raw_value),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_records_table(records: &[&ClaimRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Employee"),
        header_cell("Relation"),
        header_cell("Ailment"),
        header_cell("Status"),
        header_cell("SumInsured"),
        header_cell("Claimed"),
        header_cell("% of SI"),
    ]);
    apply_table_style(&mut table);
    for index in 4..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in records {
        table.add_row(vec![
            Cell::new(record.employee_code.as_deref().unwrap_or(NA)),
            Cell::new(record.relation.as_str()),
            Cell::new(format!(
                "{} ({})",
                record.ailment_group_str(),
                record.ailment_group_description()
            )),
            Cell::new(record.claim_status.as_str()),
            Cell::new(record.sum_insured),
            Cell::new(
                record
                    .claimed_amount
                    .map(|amount| amount.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(
                record
                    .percent_of_sum_insured_claimed
                    .map(|percent| format!("{percent:.2}"))
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }
    println!("{table}");
    println!("{} claim(s)", records.len());
}

pub fn print_distribution_table(label: &str, entries: &[DistributionEntry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Claims"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.label),
            Cell::new(entry.count),
            Cell::new(format!("{:.2}%", entry.percent)),
        ]);
    }
    println!("{table}");
}

pub fn print_pivot_table(pivot: &ClaimTypeByLocation) {
    let mut table = Table::new();
    let mut header = vec![header_cell("Location")];
    header.extend(pivot.claim_types.iter().map(|label| header_cell(label)));
    header.push(header_cell("Total"));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=pivot.claim_types.len() + 1 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &pivot.rows {
        let mut cells = vec![Cell::new(&row.location)];
        cells.extend(row.counts.iter().map(Cell::new));
        cells.push(Cell::new(row.total).add_attribute(Attribute::Bold));
        table.add_row(cells);
    }
    println!("{table}");
}
