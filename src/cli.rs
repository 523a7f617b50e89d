//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// treegrid - render parent-keyed records as a jQuery TreeGrid table
#[derive(Parser, Debug)]
#[command(name = "treegrid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the table markup and init script
    Render {
        /// Record file (.json, .yaml or .yml)
        #[arg(short, long)]
        data: PathBuf,

        /// Grid configuration (defaults to ./treegrid.toml, then the user config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out the <script> block
        #[arg(long)]
        no_script: bool,

        /// Override the configured initial state (expanded or collapsed)
        #[arg(long)]
        initial_state: Option<String>,
    },

    /// Print the keys of the records in tree order
    Order {
        /// Record file (.json, .yaml or .yml)
        #[arg(short, long)]
        data: PathBuf,

        /// Grid configuration (defaults to ./treegrid.toml, then the user config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a grid configuration
    Check {
        /// Grid configuration (defaults to ./treegrid.toml, then the user config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
