//! `dev cd` — navigate to a project directory
//!
//! Without a query, opens the interactive finder over all discovered
//! repositories. With a query, jumps to the best fuzzy match. The chosen
//! path is resolved against the same workspace root used for discovery and
//! printed as a `cd` line for the shell wrapper.

use crate::DevError;
use crate::commands::workspace_root;
use crate::finder::{Finder, Outcome, Theme};
use crate::repos;

/// Run the `cd` subcommand.
///
/// Cancelling the finder is a success with no output.
///
/// # Errors
///
/// Returns [`DevError::NoRepos`] when discovery finds nothing,
/// [`DevError::NoMatch`] when a direct query matches nothing, and finder or
/// environment errors otherwise.
pub fn run(query: &[String], quiet: bool) -> Result<(), DevError> {
    let root = workspace_root()?;

    let all = repos::discover(&root);
    if all.is_empty() {
        return Err(DevError::NoRepos(root));
    }

    let selected = if query.is_empty() {
        match Finder::new(Theme::default()).run(all)? {
            Outcome::Selected(repo) => repo,
            Outcome::Cancelled => return Ok(()),
        }
    } else {
        let query = query.join(" ");
        let mut matches = repos::fuzzy_match(&all, &query);
        if matches.is_empty() {
            return Err(DevError::NoMatch(query));
        }
        let best = matches.swap_remove(0);
        if !quiet {
            eprintln!("{best}");
        }
        best
    };

    println!("cd {}", root.join(selected).display());
    Ok(())
}
