use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::CleanRow;

/// Print cleaned rows, as a table or one number per line.
pub fn print_clean(rows: &[CleanRow], as_table: bool) {
    if as_table {
        println!("{}", clean_table(rows));
    } else {
        print!("{}", clean_lines(rows));
    }
}

/// One number per line, each line newline-terminated.
pub fn clean_lines(rows: &[CleanRow]) -> String {
    rows.iter().map(|row| format!("{}\n", row.number)).collect()
}

pub fn clean_table(rows: &[CleanRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Input"),
        header_cell("Number"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(row.input.describe()),
            Cell::new(row.number),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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
