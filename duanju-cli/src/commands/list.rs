//! List command implementation

use anyhow::Result;
use duanju_core::{candidates, DEFAULT_RULES};

use super::ListCommands;

/// Execute the list command
pub fn execute(subcommand: &ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Encodings => {
            println!("Candidate encodings (tried in order):");
            for candidate in candidates() {
                println!("  {}", candidate.name());
            }
        }
        ListCommands::Delimiters => {
            println!("Delimiters (a line break is inserted after each):");
            for rule in &DEFAULT_RULES {
                println!("  {}", rule.delimiter);
            }
        }
    }
    Ok(())
}
