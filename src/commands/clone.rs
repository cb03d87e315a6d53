//! `dev clone` — clone a repository into the workspace
//!
//! The clone target is `~/src/<source>/<org>/<project>`, derived from the
//! URL. git output goes to stderr; stdout carries only the `cd` line for
//! the shell wrapper.

use crate::DevError;
use crate::commands::workspace_root;
use crate::repourl;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

/// Name of the subdirectory that marks a repository
const GIT_DIR: &str = ".git";

/// Run the `clone` subcommand.
///
/// An existing target that is already a repository is reported and reused.
/// A partial target left behind by a failed clone is removed.
///
/// # Errors
///
/// Returns [`DevError::RepoUrl`] for unparseable URLs,
/// [`DevError::TargetExists`] when the target directory exists but is not a
/// repository, and [`DevError::CloneFailed`] when git exits unsuccessfully.
pub fn run(url: &str, quiet: bool) -> Result<(), DevError> {
    let parsed = repourl::parse(url)?;
    let root = workspace_root()?;
    let target = root.join(parsed.full_path());

    if target.is_dir() {
        if target.join(GIT_DIR).is_dir() {
            if !quiet {
                eprintln!("already cloned at {}", target.display());
            }
            println!("cd {}", target.display());
            return Ok(());
        }
        return Err(DevError::TargetExists(target));
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    if !quiet {
        eprintln!("cloning into {}", target.display());
    }

    // git reports progress on stderr; keep stdout clean for the wrapper.
    let status = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(&target)
        .stdin(Stdio::inherit())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        remove_partial(&target);
        return Err(DevError::CloneFailed(status));
    }

    println!("cd {}", target.display());
    Ok(())
}

/// Remove whatever a failed clone left behind.
fn remove_partial(target: &Path) {
    let _ = fs::remove_dir_all(target);
}
