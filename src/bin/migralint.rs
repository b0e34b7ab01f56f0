// src/bin/migralint.rs
use clap::Parser;
use colored::Colorize;

use migralint_core::cli::{self, Cli};
use migralint_core::exit::MigralintExit;

fn main() -> MigralintExit {
    let cli = Cli::parse();
    match cli::execute(cli) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            MigralintExit::Error
        }
    }
}
