use std::path::PathBuf;

use clap::Parser;

use crate::settings::{LogLevel, Mode, ThemeChoice};

/// Inspector - browse JSON data as an expandable tree or a table
#[derive(Parser, Debug)]
#[command(name = "inspector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file to inspect, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// How to show the input
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Name shown on the root row
    #[arg(long)]
    pub name: Option<String>,

    /// Expand every node up to this depth
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    pub expand_level: Option<i32>,

    /// Extra path to expand, e.g. `$.a.*` (repeatable)
    #[arg(short = 'p', long = "expand-path")]
    pub expand_paths: Vec<String>,

    /// Also list non-enumerable properties
    #[arg(long)]
    pub show_non_enumerable: bool,

    /// Sort object keys alphabetically
    #[arg(long)]
    pub sort_keys: bool,

    /// Table columns to show, in order
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeChoice>,

    /// Log file verbosity
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Settings file to use instead of the default one
    #[arg(long)]
    pub config: Option<PathBuf>,
}
