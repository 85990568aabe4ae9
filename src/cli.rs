//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Look up characters by Japanese glyph
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Character to search for at startup
    pub character: Option<String>,

    /// Search service base URL (overrides the config file)
    #[arg(long, global = true, env = "CHARLEARNER_SERVER", value_name = "URL")]
    pub server: Option<String>,

    /// Config file to use instead of ~/.config/charlearner/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one search and print the matching characters
    Search {
        character: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print every character the service holds
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Ask the service to import the top characters
    Seed,
    /// Reset the service database
    Clear {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}
