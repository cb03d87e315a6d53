//! dev CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Jump to a project interactively
//! dev cd
//!
//! # Jump to the best match for a query
//! dev cd kafka
//!
//! # Clone into ~/src/<source>/<org>/<project>
//! dev clone git@github.com:dsaiztc/dev.git
//!
//! # Install the shell wrapper (add to ~/.zshrc or ~/.bashrc)
//! eval "$(dev init)"
//! ```
//!
//! `cd` and `clone` print a `cd <path>` line to stdout; the wrapper
//! installed by `dev init` evaluates it so the parent shell changes
//! directory. Everything else (progress, errors, the finder UI) goes to
//! stderr.

use clap::CommandFactory;
use colored::Colorize;
use dev::{
    DevError,
    cli::{Cli, Commands},
    commands,
};
use std::io;
use std::process::ExitCode;

fn run(cli: &Cli) -> Result<(), DevError> {
    match &cli.command {
        Commands::Cd { query } => commands::cd::run(query, cli.quiet),
        Commands::Clone { url } => commands::clone::run(url, cli.quiet),
        Commands::Init => {
            commands::init::run();
            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "dev", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
