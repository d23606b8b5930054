//! Human-readable result summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::commands::{GenerateResult, InspectResult};

pub fn print_generate_summary(result: &GenerateResult) {
    println!("Chart: {}", result.output_file.display());
    if let Some(json_file) = &result.json_file {
        println!("Payload: {}", json_file.display());
    }
    println!(
        "Range: {} \u{2192} {}",
        result.date_range.min_date.date(),
        result.date_range.max_date.date()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Project"),
        header_cell("Category"),
        header_cell("Priority"),
        header_cell("Lead"),
        header_cell("Stages"),
        header_cell("Days"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for project in &result.projects {
        table.add_row(vec![
            Cell::new(&project.name),
            Cell::new(&project.category),
            Cell::new(&project.priority),
            Cell::new(&project.team_lead),
            Cell::new(project.stages.len()),
            Cell::new(project.total_duration_days),
        ]);
    }
    println!("{table}");
}

pub fn print_inspect_summary(result: &InspectResult) {
    match result.schema {
        Some(schema) => println!("Schema: {schema}"),
        None => println!("Schema: unrecognized"),
    }
    println!("Rows: {}", result.rows);
    match &result.issue {
        Some(issue) => println!("Validation: FAILED \u{2014} {issue}"),
        None => println!("Validation: ok"),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
