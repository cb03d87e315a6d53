//! dev - navigate and clone git repositories under a structured workspace
//!
//! This library provides repository discovery, fuzzy matching and an
//! interactive finder over an opinionated directory layout:
//! `~/src/<source>/<org>/<project>`.

use std::path::PathBuf;
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod finder;
pub mod repos;
pub mod repourl;
pub mod shell;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DevError {
    /// Home directory could not be resolved
    #[error("could not determine home directory")]
    HomeDir,
    /// The workspace root contains no repositories
    #[error("no repositories found under {}", .0.display())]
    NoRepos(PathBuf),
    /// A direct query matched nothing
    #[error("no repositories matching {0:?}")]
    NoMatch(String),
    /// Repository URL error
    #[error("invalid repository URL: {0}")]
    RepoUrl(#[from] repourl::RepoUrlError),
    /// Interactive finder error
    #[error("finder error: {0}")]
    Finder(#[from] finder::FinderError),
    /// Clone target exists but is not a repository
    #[error("directory {} already exists but is not a git repository", .0.display())]
    TargetExists(PathBuf),
    /// git subprocess terminated unsuccessfully
    #[error("git clone failed ({0})")]
    CloneFailed(std::process::ExitStatus),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
