//! Command-line surface of the `grocery` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "grocery", version, about = "A single grocery checklist")]
pub struct Cli {
    /// Database file (overrides GROCERY_DB_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Defaults to `list`
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the list in the order items were added
    List,

    /// Add an item (words are joined with spaces)
    Add {
        #[arg(required = true, num_args = 1.., value_name = "TITLE")]
        title: Vec<String>,
    },

    /// Check or uncheck an item
    Toggle {
        /// 1-based number from `list`, or the item id
        item: String,
    },

    /// Remove an item for good
    Delete {
        /// 1-based number from `list`, or the item id
        item: String,
    },

    /// Start an empty list with the essentials
    Essentials {
        /// Add them even if the list already has items
        #[arg(long)]
        force: bool,
    },

    /// Interactive session reading commands from stdin
    Session,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_joins_words() {
        let cli = Cli::try_parse_from(["grocery", "add", "Whole", "Milk"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Add {
                title: vec!["Whole".to_string(), "Milk".to_string()]
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["grocery", "list", "--json", "--db", "x.db"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.db, Some(PathBuf::from("x.db")));
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["grocery"]).unwrap();
        assert_eq!(cli.command, None);
    }
}
