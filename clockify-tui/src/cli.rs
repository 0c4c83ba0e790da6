use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "clockify-tui")]
#[command(about = "Terminal stopwatch with a settable start time")]
pub struct Cli {
    /// Show the large block-digit timer regardless of config
    #[arg(long, global = true)]
    pub large: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Commands {
    /// Run the stopwatch (default)
    Run,
    /// Print config path and create default file if missing
    ConfigPath,
}
