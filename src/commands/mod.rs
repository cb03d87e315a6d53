//! Command handlers for the dev CLI
//!
//! Each subcommand gets one handler module. Handlers print shell-evaluable
//! text (the `cd` line) to stdout and everything else to stderr.

pub mod cd;
pub mod clone;
pub mod init;

use crate::DevError;
use std::path::PathBuf;

/// Directory all managed repositories live under: `~/src`.
///
/// # Errors
///
/// Returns [`DevError::HomeDir`] when the home directory cannot be resolved.
pub fn workspace_root() -> Result<PathBuf, DevError> {
    dirs::home_dir()
        .map(|home| home.join("src"))
        .ok_or(DevError::HomeDir)
}
