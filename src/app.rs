use std::io;
use std::path::Path;
use tracing::warn;

use crate::cli::Prompter;
use crate::core::FilterSpec;
use crate::data::load;
use crate::error::AppError;
use crate::output::{TextOptions, output_reports_json, print_reports, print_selection};
use crate::report::run_all;

pub(crate) struct QueryContext<'a> {
    pub(crate) data_dir: &'a Path,
    pub(crate) json: bool,
    pub(crate) use_color: bool,
}

/// Load, filter and report on one city. Load failures abort the query;
/// report failures are printed in place of that report.
pub(crate) fn run_query(filter: &FilterSpec, ctx: &QueryContext<'_>) -> Result<(), AppError> {
    let table = load(ctx.data_dir, filter)?;
    let reports = run_all(&table);

    if ctx.json {
        println!("{}", output_reports_json(filter, table.len(), &reports));
    } else {
        print_selection(filter, table.len());
        print_reports(
            &reports,
            TextOptions {
                use_color: ctx.use_color,
            },
        );
    }
    Ok(())
}

/// Prompt → query → "restart?" until the user declines or input ends
pub(crate) fn run_interactive(ctx: &QueryContext<'_>) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        let Some(filter) = prompter.get_filters()? else {
            return Ok(());
        };
        if let Err(e) = run_query(&filter, ctx) {
            warn!(
                city = %filter.city,
                data_source = e.is_data_source(),
                schema = e.is_schema(),
                error = %e,
                "query failed"
            );
            eprintln!("Error: {e}");
        }
        if !prompter.ask_restart()? {
            return Ok(());
        }
    }
}
