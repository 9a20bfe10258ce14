use crate::cli::Commands::{Check, Init, List, Ui};
use crate::cli::{Cli, GlobalArgs};
use crate::utils::logger;

mod check;
mod init;
mod list;
mod ui;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&cli.global, matches!(cli.command, Ui))?;

    let GlobalArgs { config, .. } = cli.global;
    match cli.command {
        Ui => ui::handle(config),
        List => list::handle(config),
        Check => check::handle(config),
        Init { force } => init::handle(config, force),
    }
}

/// The UI owns the terminal, so it only logs when a log file is given.
fn init_logging(
    global: &GlobalArgs,
    takes_terminal: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match &global.log_file {
        Some(path) => logger::init_file_logger(path, global.verbose),
        None if takes_terminal => Ok(()),
        None => {
            logger::init_cli_logger(global.verbose);
            Ok(())
        }
    }
}
