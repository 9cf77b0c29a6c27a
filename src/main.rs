use anyhow::{Context, Result};
use clap::Parser;
use relic::{cli, scanner, session};
use std::io;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if cli.verbose {
        println!("Relic - digging for TODO comments...");
        println!("Scanning: {}", cli.path.display());
    }

    // The whole tree is scanned before any command is read; a scan
    // failure aborts startup with a non-zero exit
    let comments =
        scanner::scan_directory(&cli.path, &cli.extension).context("failed to scan directory")?;

    if cli.verbose {
        println!("Found {} comments", comments.len());
    }

    match cli.format {
        cli::OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&comments)
                .context("failed to serialize comments to JSON")?;
            println!("{json}");
        }
        cli::OutputFormat::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session::run(&comments, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}
