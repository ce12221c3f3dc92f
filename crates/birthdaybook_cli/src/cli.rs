//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "birthdaybook", version)]
#[clap(about = "Track your friends' birthdays from the terminal", long_about = None)]
pub struct Cli {
    /// Directory holding the store and logs; defaults to the platform data dir.
    #[clap(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[clap(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a friend to the birthday list.
    Add {
        /// The friend's display name.
        #[clap(long)]
        name: String,

        /// The friend's email address.
        #[clap(long)]
        email: String,

        /// The friend's birthday as YYYY-MM-DD.
        #[clap(long)]
        birthday: String,
    },

    /// Remove a friend by the id shown in `list`.
    Remove {
        /// Friend id to remove.
        id: String,
    },

    /// Show today's, this week's and all upcoming birthdays.
    List,
}

impl Command {
    /// Stable command name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::List => "list",
        }
    }
}
