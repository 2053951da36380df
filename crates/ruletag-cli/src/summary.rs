//! Human-readable table output for parsed constraints and violations.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ruletag_model::ConstraintMap;

pub fn print_constraints(constraints: &ConstraintMap) {
    if constraints.is_empty() {
        println!("No country rules declared.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (country, constraint) in constraints {
        table.add_row(vec![
            Cell::new(country).add_attribute(Attribute::Bold),
            bound_cell(constraint.min_len),
            bound_cell(constraint.max_len),
            flag_cell(constraint.required),
        ]);
    }
    println!("{table}");
}

pub fn print_violations(country: &str, violations: &[String]) {
    if violations.is_empty() {
        println!("No violations for country {country}.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Violation")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, violation) in violations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(violation).fg(Color::Red),
        ]);
    }
    println!("{table}");
    println!("{} violation(s) for country {country}.", violations.len());
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn bound_cell(len: usize) -> Cell {
    if len == 0 {
        dim_cell("-")
    } else {
        Cell::new(len)
    }
}

fn flag_cell(set: bool) -> Cell {
    if set {
        Cell::new("yes").fg(Color::Yellow)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(text: T) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}
