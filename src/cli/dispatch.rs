//! Command dispatch logic extracted from the binary.

use super::args::{Cli, Commands};
use super::handlers::{
    handle_config, handle_fetch, handle_files, handle_run, prepare, start_logging,
};
use crate::exit::AppGrepExit;
use anyhow::Result;

/// Executes the parsed command line; no command means `run`.
///
/// # Errors
/// Returns error if configuration, logging or report writing fails.
pub fn execute(cli: &Cli) -> Result<AppGrepExit> {
    let command = cli.command.unwrap_or(Commands::Run);
    let config = prepare(&cli.opts)?;

    if command == Commands::Config {
        return handle_config(&config);
    }

    start_logging(&config, cli.opts.verbose)?;
    match command {
        Commands::Run => handle_run(&config),
        Commands::Fetch => handle_fetch(&config),
        Commands::Files => Ok(handle_files(&config)),
        Commands::Config => handle_config(&config),
    }
}
