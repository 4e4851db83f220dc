use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lincoln Hotels TUI - booking and concierge front desk
#[derive(Parser)]
#[command(name = "lincoln-tui")]
#[command(about = "Lincoln Hotels reservations, chauffeur, and concierge TUI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive booking TUI (the default when no command is given)
    Book {
        /// Write the submitted booking request to this JSON file
        #[arg(long)]
        save_request: Option<PathBuf>,
    },
    /// Print the room and chauffeur rate card
    Rates,
    /// Validate a saved booking request file
    Validate {
        /// Path to the booking request JSON to validate
        request: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["lincoln-tui"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_book_with_save_request() {
        let result = Cli::try_parse_from([
            "lincoln-tui",
            "book",
            "--save-request",
            "/tmp/request.json",
        ]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Book { save_request }) => {
                assert_eq!(save_request.unwrap().to_str().unwrap(), "/tmp/request.json");
            }
            _ => panic!("Expected Book command"),
        }
    }

    #[test]
    fn test_cli_rates_command() {
        let result = Cli::try_parse_from(["lincoln-tui", "rates"]);
        assert!(result.is_ok());
        assert!(matches!(result.unwrap().command, Some(Commands::Rates)));
    }

    #[test]
    fn test_cli_validate_command() {
        let result = Cli::try_parse_from(["lincoln-tui", "validate", "/tmp/request.json"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Validate { request }) => {
                assert_eq!(request.to_str().unwrap(), "/tmp/request.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }
}
