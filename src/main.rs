//! treegrid CLI - render parent-keyed records as a jQuery TreeGrid table
//!
//! Usage: treegrid <COMMAND>
//!
//! Commands:
//!   render  Render the table markup and init script
//!   order   Print the keys of the records in tree order
//!   check   Validate a grid configuration

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render {
            data,
            config,
            output,
            no_script,
            initial_state,
        } => commands::cmd_render(
            &data,
            config.as_deref(),
            output.as_ref(),
            no_script,
            initial_state.as_deref(),
            cli.json,
        ),
        Commands::Order { data, config } => commands::cmd_order(&data, config.as_deref(), cli.json),
        Commands::Check { config } => commands::cmd_check(config.as_deref(), cli.json),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
