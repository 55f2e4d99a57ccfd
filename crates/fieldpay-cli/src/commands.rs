use anyhow::Result;
use comfy_table::Table;

use fieldpay_cli::pipeline::{ProcessOptions, ProcessResult, load_config, process_spreadsheet};
use fieldpay_model::Field;

use crate::cli::{FieldsArgs, ProcessArgs};
use crate::summary::apply_table_style;

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let options = ProcessOptions {
        input: args.input.clone(),
        config_path: args.config.clone(),
        project_code: args.project_code.clone(),
        cpi_overrides: args.cpi.clone(),
        output_dir: args.output_dir.clone(),
        dry_run: args.dry_run,
    };
    process_spreadsheet(&options)
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Field", "Header label"]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        table.add_row(vec![field.as_str(), config.headers.label(field)]);
    }
    println!("{table}");
    Ok(())
}
