//! Haulage Planner - lorry fleet sizing for time-boxed haulage jobs
//!
//! A CLI tool that works out how many lorries a muck-away job needs and
//! lays out the resulting bay schedule.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
