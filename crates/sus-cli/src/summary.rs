//! Human-readable sync summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use sus_ingest::SyncReport;

pub fn print_sync_summary(report: &SyncReport) {
    println!("Competence: {}", report.competence);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Inserted"),
        header_cell("Already present"),
        header_cell("Total rules"),
    ]);
    table.add_row(vec![
        count_cell(report.inserted),
        count_cell(report.already_existed),
        count_cell(report.total_rules),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
