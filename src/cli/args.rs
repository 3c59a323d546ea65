// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// A link organizer for the terminal
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[arg(long = "no-color", help = "disable colored output")]
    pub no_color: bool,

    #[arg(long = "generate-config", help = "write default configuration to stdout")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a link
    Add {
        title: String,

        url: String,

        #[arg(
            short = 'c',
            long = "category",
            help = "category bucket, defaults to 'uncategorized'"
        )]
        category: Option<String>,
    },
    /// Delete a link
    Delete {
        /// id of the link
        id: i64,
    },
    /// List links grouped by category
    List {
        #[arg(long = "json", help = "non-interactive mode, output as json")]
        is_json: bool,
    },
    /// Open/launch a link
    Open {
        /// id of the link
        id: i64,
    },
    /// Move every link of one category into another
    RenameCategory {
        /// category to rename
        old: String,

        /// new category name
        new: String,
    },
    /// Relabel the catch-all section for small categories
    RenameOther {
        /// new section label
        title: String,
    },
    /// Render the grouped collection as an HTML page
    Render {
        #[arg(short = 'o', long = "out", help = "write to file instead of stdout")]
        out: Option<PathBuf>,
    },
    /// Import links from a JSON file
    Import {
        /// pathname to JSON file
        path: String,

        #[arg(short = 'd', long = "dry-run", help = "only show what would be done")]
        dry_run: bool,
    },
    /// Generate shell completion scripts (bash, zsh, fish)
    Completion {
        /// shell to generate completions for
        shell: String,
    },
}
