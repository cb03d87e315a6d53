//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for dev using the `clap` crate.
//!
//! # Commands
//!
//! - **cd**: Jump to a project directory (interactive finder or direct query)
//! - **clone**: Clone a repository into `~/src/<source>/<org>/<project>`
//! - **init**: Print the shell wrapper function
//! - **completions**: Generate shell completion scripts
//!
//! The global `--quiet` flag suppresses informational stderr output.
//! stdout is reserved for text the shell wrapper evaluates.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// A CLI tool for managing development projects
#[derive(Parser, Debug)]
#[command(
    name = "dev",
    version,
    about = "A CLI tool for managing development projects",
    long_about = "dev reduces cognitive load when navigating between development projects \
                  by enforcing an opinionated directory structure (~/src/<source>/<org>/<project>)."
)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Navigate to a project directory
    ///
    /// Without arguments, opens an interactive fuzzy finder. With a query,
    /// jumps to the best matching repository.
    Cd {
        /// Fuzzy query; multiple words are joined with spaces
        query: Vec<String>,
    },
    /// Clone a git repository into ~/src/<source>/<org>/<project>
    Clone {
        /// Repository URL (HTTPS, ssh:// or scp-style SSH)
        url: String,
    },
    /// Print the shell wrapper function
    ///
    /// Add `eval "$(dev init)"` to your ~/.zshrc or ~/.bashrc.
    Init,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cd_with_query() {
        let cli = Cli::try_parse_from(["dev", "cd", "my", "project"]).unwrap();
        match cli.command {
            Commands::Cd { query } => assert_eq!(query, vec!["my", "project"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_cd_without_query() {
        let cli = Cli::try_parse_from(["dev", "cd"]).unwrap();
        match cli.command {
            Commands::Cd { query } => assert!(query.is_empty()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_clone() {
        let cli = Cli::try_parse_from(["dev", "clone", "git@github.com:org/repo.git"]).unwrap();
        assert!(matches!(cli.command, Commands::Clone { .. }));
    }

    #[test]
    fn test_global_quiet_flag() {
        let cli = Cli::try_parse_from(["dev", "cd", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_clone_requires_url() {
        assert!(Cli::try_parse_from(["dev", "clone"]).is_err());
    }
}
