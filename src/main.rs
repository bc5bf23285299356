mod app;
mod cli;
mod config;
mod consts;
mod core;
mod data;
mod error;
mod output;
mod report;
mod utils;

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use app::{QueryContext, run_interactive, run_query};
use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() -> ExitCode {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    init_logging(cli.debug);

    if let Some(path) = &config.loaded_from {
        debug!(path = %path.display(), "loaded config");
    }

    let data_dir = cli.data_dir();
    let ctx = QueryContext {
        data_dir: &data_dir,
        json: cli.json,
        use_color: cli.use_color(),
    };

    let result = match cli.filter() {
        Some(Ok(filter)) => run_query(&filter, &ctx),
        Some(Err(e)) => Err(e),
        None => run_interactive(&ctx),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
