//! Repository discovery under the workspace root
//!
//! Walks `~/src` looking for directories that contain a `.git` subdirectory
//! and ranks them against free-text queries with fuzzy matching.
//!
//! # Discovery policy
//!
//! Prune-on-match, bounded at four levels below the root: a directory containing a `.git`
//! subdirectory is recorded as a candidate and never descended into, so a
//! vendored repository nested inside another repository is not reported.
//! Hidden directories are skipped at every level. Unreadable directories,
//! the root included, are treated as empty subtrees; discovery never fails,
//! it returns zero candidates instead.

use nucleo::{
    Config, Matcher,
    pattern::{CaseMatching, Normalization, Pattern},
};
use rayon::prelude::*;
use std::fs::{self, DirEntry};
use std::path::Path;

/// Name of the subdirectory that marks a repository
const GIT_DIR: &str = ".git";

/// Deepest level below the root at which repositories are recognized
const MAX_DEPTH: usize = 4;

/// Find all repositories under `root`.
///
/// Returns paths relative to `root`, sorted ascending. The walk fans out
/// over the root's immediate children in parallel; each subtree produces
/// its own list and the results are merged and sorted once, so the output
/// is deterministic regardless of traversal order.
#[must_use]
pub fn discover(root: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let sources: Vec<_> = entries
        .flatten()
        .filter(is_visible_dir)
        .map(|entry| entry.path())
        .collect();

    let mut found: Vec<String> = sources
        .par_iter()
        .flat_map(|dir| visit(root, dir, 1))
        .collect();

    found.sort_unstable();
    found
}

/// Examine one directory at `depth` below the root.
///
/// Pure per-subtree function: returns a fresh list for the caller to merge.
fn visit(root: &Path, dir: &Path, depth: usize) -> Vec<String> {
    if dir.join(GIT_DIR).is_dir() {
        // A repository; do not descend into it.
        return match dir.strip_prefix(root) {
            Ok(rel) => vec![rel.to_string_lossy().into_owned()],
            Err(_) => Vec::new(),
        };
    }

    if depth >= MAX_DEPTH {
        return Vec::new();
    }

    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for entry in entries.flatten().filter(is_visible_dir) {
        found.extend(visit(root, &entry.path(), depth + 1));
    }
    found
}

fn is_visible_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_ok_and(|ty| ty.is_dir())
        && !entry.file_name().to_string_lossy().starts_with('.')
}

/// Rank `items` against `query`, best match first.
///
/// Query characters must appear in order within a candidate; candidates
/// without such a subsequence are excluded. Equal scores keep the original
/// relative order. An empty or blank query matches nothing here — only the
/// interactive finder treats the empty query as "everything".
#[must_use]
pub fn fuzzy_match(items: &[String], query: &str) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut matcher = Matcher::new(Config::DEFAULT.match_paths());
    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);

    pattern
        .match_list(items.iter().map(String::as_str), &mut matcher)
        .into_iter()
        .map(|(item, _)| item.to_owned())
        .collect()
}
