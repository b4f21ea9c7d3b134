// src/bin/app-grep.rs
use app_grep_core::cli::{dispatch, Cli};
use app_grep_core::exit::AppGrepExit;
use clap::Parser;
use colored::Colorize;

fn main() -> AppGrepExit {
    let cli = Cli::parse();

    match dispatch::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            AppGrepExit::Error
        }
    }
}
