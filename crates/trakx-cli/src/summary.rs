use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::SelectReport;

/// How `trakx select` prints its report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

pub fn render_select_report(report: &SelectReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(format!(
            "{}\n{}",
            statistics_table(report),
            candidates_table(report)
        )),
        ReportFormat::Json => {
            serde_json::to_string_pretty(report).context("serialize selection report")
        }
    }
}

/// Selection and the statistics behind it, one per row.
pub fn statistics_table(report: &SelectReport) -> Table {
    let selection = &report.selection;
    let center = if report.use_median { "median" } else { "mean" };

    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let selected = match selection.selection {
        Some(value) => Cell::new(value)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    };
    table.add_row(vec![Cell::new("Selection"), selected]);
    table.add_row(vec![Cell::new("Mean"), Cell::new(selection.mean)]);
    table.add_row(vec![Cell::new("Median"), Cell::new(selection.median)]);
    table.add_row(vec![
        Cell::new("Standard deviation"),
        Cell::new(selection.standard_deviation),
    ]);
    table.add_row(vec![
        Cell::new("Threshold"),
        Cell::new(format!(
            "{} sd from {center}",
            report.max_standard_deviations
        )),
    ]);
    table.add_row(vec![Cell::new("Values"), Cell::new(report.values.len())]);
    if !report.ignored.is_empty() {
        table.add_row(vec![
            Cell::new("Ignored"),
            Cell::new(report.ignored.join(", ")).fg(Color::Yellow),
        ]);
    }
    table
}

/// Every usable value in preference order with its deviation from the center.
pub fn candidates_table(report: &SelectReport) -> Table {
    let selection = &report.selection;
    let center = selection.center(report.use_median);
    let threshold = report.max_standard_deviations * selection.standard_deviation;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Value"),
        header_cell("Deviation"),
        header_cell("Within"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut selected_seen = false;
    for (index, value) in report.values.iter().enumerate() {
        let deviation = (value - center).abs();
        let within = deviation < threshold;
        let is_selected = !selected_seen && selection.selection == Some(*value);
        selected_seen |= is_selected;

        let value_cell = if is_selected {
            Cell::new(value)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(value)
        };
        table.add_row(vec![
            Cell::new(index + 1),
            value_cell,
            Cell::new(deviation),
            within_cell(within),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn within_cell(within: bool) -> Cell {
    if within {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Red)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
