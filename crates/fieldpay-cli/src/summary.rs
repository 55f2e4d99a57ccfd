use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use fieldpay_cli::pipeline::ProcessResult;
use fieldpay_model::SourceKey;

pub fn print_summary(result: &ProcessResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!(
            "Output: {} (dry run, nothing written)",
            result.output_dir.display()
        );
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    if !result.config.project_code.is_empty() {
        println!("Project: {}", result.config.project_code);
    }
    let stats = &result.stats;
    println!("Complete responses: {}", stats.total_complete);
    println!("Evoucher incentives: {} VND", stats.total_evoucher_sum);
    println!("Referral incentives: {} VND", stats.total_referral_sum);
    println!("Vendor cost: ${:.2}", stats.total_vendor_cost());

    if !stats.counts_by_src.is_empty() {
        print_breakdown_table(result);
    }
    print_warning_table(result);

    println!();
    for line in &result.report {
        println!("{line}");
    }
}

fn print_breakdown_table(result: &ProcessResult) {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Count"),
        header_cell("Incentive (VND)"),
        header_cell("CPI ($)"),
        header_cell("Cost ($)"),
    ]);
    apply_breakdown_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    let mut total_incentive = 0i64;
    for (key, count) in &stats.counts_by_src {
        let incentive = stats.incentive_sum_by_src.get(key).copied().unwrap_or(0);
        total_incentive += incentive;
        table.add_row(vec![
            source_cell(key),
            Cell::new(count),
            Cell::new(incentive),
            cpi_cell(result.config.cpi_for(key)),
            cost_cell(stats.vendor_costs.get(key).copied()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.total_complete).add_attribute(Attribute::Bold),
        Cell::new(total_incentive).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{:.2}", stats.total_vendor_cost())).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_warning_table(result: &ProcessResult) {
    if result.warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_warning_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for warning in &result.warnings {
        table.add_row(vec![
            Cell::new(warning.row),
            Cell::new(warning.field.as_str()),
            Cell::new(&warning.value),
            Cell::new(&warning.message).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Warnings:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_breakdown_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(110);
}

fn apply_warning_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn source_cell(key: &SourceKey) -> Cell {
    if key.is_internal() {
        Cell::new("(blank)").fg(Color::DarkGrey)
    } else {
        Cell::new(key.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn cpi_cell(cpi: Option<f64>) -> Cell {
    match cpi {
        Some(rate) if rate > 0.0 => Cell::new(rate),
        _ => dim_cell("-"),
    }
}

fn cost_cell(cost: Option<f64>) -> Cell {
    match cost {
        Some(value) => Cell::new(format!("{value:.2}")).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
