//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod format;
pub mod generate_config;
pub mod list;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert line breaks after sentence-ending punctuation in a text file
    Format(format::FormatArgs),

    /// Write a default configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List candidate encodings in detection order
    Encodings,

    /// List the delimiter rules
    Delimiters,
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Format(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}
