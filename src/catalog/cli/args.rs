use catalog::api::SortKey;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog", bin_name = "catalog", version)]
#[command(about = "Browse and filter the product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Dataset document to load (overrides the configured one)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products matching the given filters
    #[command(alias = "ls")]
    List(ListArgs),

    /// Filter and sort interactively, one command per line on stdin
    #[command(alias = "b")]
    Browse,

    /// Report duplicate ids and dangling references in the dataset
    Check,

    /// Get or set configuration
    Config {
        /// Configuration key (dataset, name-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only products in categories owned by this user (name, id or "all")
    #[arg(short, long, value_name = "USER")]
    pub user: Option<String>,

    /// Case-insensitive search in product names
    #[arg(short, long, value_name = "TEXT", allow_hyphen_values = true)]
    pub query: Option<String>,

    /// Only products in this category (title or id); repeatable
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Sort by column: id, name, category, user
    #[arg(short, long, value_name = "COLUMN")]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}
