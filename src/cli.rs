//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::page::ManifestFormat;
use crate::weight::{InvalidWeightPolicy, UnweightedKey};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sort static site pages by their front-matter weight
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared arguments for Sort and Keys commands
#[derive(clap::Args, Debug, Clone)]
pub struct SortArgs {
    /// Page manifest (JSON or TOML). Reads JSON from stdin when omitted
    pub input: Option<PathBuf>,

    /// Manifest format, guessed from the file extension by default
    #[arg(short, long, value_enum)]
    pub format: Option<ManifestFormat>,

    /// Config key the sorted pages are stored under (default: weighted_pages)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Sort key for pages without a weight
    #[arg(long, value_enum)]
    pub unweighted: Option<UnweightedKey>,

    /// What to do with a weight that is not a number
    #[arg(long, value_enum)]
    pub invalid_weight: Option<InvalidWeightPolicy>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sort the pages and print the stored page list as JSON
    Sort {
        #[command(flatten)]
        args: SortArgs,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print every page's effective sort key, in sorted order
    Keys {
        #[command(flatten)]
        args: SortArgs,
    },
}

impl Cli {
    pub const fn args(&self) -> &SortArgs {
        match &self.command {
            Commands::Sort { args, .. } | Commands::Keys { args } => args,
        }
    }
}
