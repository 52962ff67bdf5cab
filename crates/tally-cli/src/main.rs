//! Tally CLI.

use clap::Parser;
use std::io::{self, IsTerminal};

use tally_cli::cli::{Cli, Command};
use tally_cli::commands::{run_calc, run_clean, run_sum, run_validate};
use tally_cli::config::load_options;
use tally_cli::logging::{LogConfig, init_logging};
use tally_cli::summary::print_clean;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = LogConfig::from_cli(&cli, io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = match load_options(cli.options.as_deref()) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let result = match &cli.command {
        Command::Sum(args) => run_sum(args).map(|total| println!("{total}")),
        Command::Clean(args) => {
            run_clean(args, &options).map(|rows| print_clean(&rows, args.table))
        }
        Command::Calc(args) => run_calc(args, &options).map(|text| println!("{text}")),
        Command::Validate(args) => run_validate(args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
