//! Shell integration
//!
//! A subprocess cannot change its parent shell's directory, so `dev init`
//! prints a wrapper function: for `cd` and `clone` it captures stdout and
//! `eval`s it (a single `cd <path>` line), everything else passes through.

/// Shell function wrapping the dev binary.
pub const WRAPPER: &str = r#"dev() {
  if [[ "$1" == "cd" || "$1" == "clone" ]]; then
    local output
    output="$(command dev "$@")"
    local exit_code=$?
    if [[ $exit_code -eq 0 && -n "$output" ]]; then
      eval "$output"
    fi
    return $exit_code
  else
    command dev "$@"
  fi
}"#;
