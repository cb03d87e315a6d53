//! `dev init` — print the shell wrapper function

use crate::shell;

/// Print the wrapper function for `eval "$(dev init)"`.
pub fn run() {
    println!("{}", shell::WRAPPER);
}
