//! duanju command-line entry point

use clap::Parser;
use duanju_cli::commands::Commands;

/// Insert line breaks after Chinese sentence-ending punctuation
#[derive(Debug, Parser)]
#[command(name = "duanju", version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
