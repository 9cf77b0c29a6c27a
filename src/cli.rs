use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "relic")]
#[command(version, about = "Dig TODO comments out of a source tree and query them", long_about = None)]
pub struct Cli {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File extension to scan for TODO comments
    #[arg(short, long, default_value = "js")]
    pub extension: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "interactive")]
    pub format: OutputFormat,

    /// Enable verbose output during the startup scan
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Interactive query session over the scanned comments
    Interactive,
    /// Dump the scanned comments as JSON and exit
    Json,
}
