//! Command-line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pick a photo album by typing its keyboard shortcut
#[derive(Parser, Debug)]
#[command(name = "album-keys", version, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON album list, `-` for stdin (overrides config)
    #[arg(short, long, global = true)]
    pub albums: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print every album with its keybinding
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Type KEYS non-interactively and print the selected album id
    Select {
        keys: String,
    },
}
