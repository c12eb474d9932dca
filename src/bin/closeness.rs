// src/bin/closeness.rs
use clap::Parser;
use colored::Colorize;

use closeness_core::cli::{handlers, Cli};
use closeness_core::exit::ClosenessExit;
use closeness_core::logging;

fn main() -> ClosenessExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match handlers::handle_compute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ClosenessExit::from_error(&e)
        }
    }
}
