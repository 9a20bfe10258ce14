use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    bin_name = "term-select",
    name = "term-select",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dropdown selectors in the terminal",
    long_about = None,
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Selects file to use instead of the default one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal UI and print the selections on exit
    Ui,

    /// List the configured selects and their options
    #[command(visible_alias = "ls")]
    List,

    /// Check the selects file for problems
    Check,

    /// Write the demo selects to the selects file if it does not exist
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
