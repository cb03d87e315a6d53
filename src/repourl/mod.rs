//! Git repository URL parsing
//!
//! Turns clone URLs into the `<source>/<org>/<project>` layout used under
//! the workspace root. Supported forms:
//!
//! - HTTPS: `https://github.com/org/repo.git`
//! - SSH with scheme: `ssh://git@github.com:22/org/repo.git`
//! - SCP-style SSH: `git@github.com:org/repo.git`
//!
//! GitLab-style nested groups keep every segment before the project as the
//! org (`gitlab.com/gitlab-org/subgroup/project`).

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while parsing a repository URL
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoUrlError {
    /// The URL was empty
    #[error("empty URL")]
    Empty,
    /// The URL did not match any supported form
    #[error("unrecognized URL format: {0}")]
    Unrecognized(String),
    /// No host could be extracted
    #[error("could not determine host from URL: {0}")]
    MissingHost(String),
    /// Fewer than `org/project` path segments
    #[error("URL must contain at least org/project: {0}")]
    MissingPath(String),
}

/// Parsed components of a git repository URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    /// Hosting source, e.g. `github.com`
    pub source: String,
    /// Organization, possibly nested, e.g. `gitlab-org/subgroup`
    pub org: String,
    /// Project name, e.g. `dev`
    pub project: String,
}

impl RepoPath {
    /// Relative workspace path: `<source>/<org>/<project>`.
    #[must_use]
    pub fn full_path(&self) -> PathBuf {
        PathBuf::from(&self.source).join(&self.org).join(&self.project)
    }
}

/// Parse a git URL into its [`RepoPath`] components.
///
/// # Errors
///
/// Returns [`RepoUrlError`] when the URL is empty, matches no supported
/// form, lacks a host, or has fewer than `org/project` segments.
pub fn parse(raw: &str) -> Result<RepoPath, RepoUrlError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RepoUrlError::Empty);
    }

    let (host, repo_path) = if let Some((_scheme, rest)) = raw.split_once("://") {
        // HTTPS or ssh:// scheme
        let (authority, path) = rest.split_once('/').unwrap_or((rest, ""));
        (strip_user_and_port(authority), path)
    } else if let Some((host_part, path)) = raw.split_once(':') {
        // SCP-style SSH: git@host:org/repo.git
        let host = host_part
            .split_once('@')
            .map_or(host_part, |(_, host)| host);
        (host, path)
    } else {
        return Err(RepoUrlError::Unrecognized(raw.to_string()));
    };

    if host.is_empty() {
        return Err(RepoUrlError::MissingHost(raw.to_string()));
    }

    let repo_path = repo_path
        .strip_suffix(".git")
        .unwrap_or(repo_path)
        .trim_matches('/');

    if repo_path.is_empty() {
        return Err(RepoUrlError::MissingPath(raw.to_string()));
    }

    // Last segment is the project, everything before it is the org.
    let Some((org, project)) = repo_path.rsplit_once('/') else {
        return Err(RepoUrlError::MissingPath(raw.to_string()));
    };

    Ok(RepoPath {
        source: host.to_string(),
        org: org.to_string(),
        project: project.to_string(),
    })
}

/// Drop `user@` and `:port` from a URL authority.
fn strip_user_and_port(authority: &str) -> &str {
    let host = authority
        .split_once('@')
        .map_or(authority, |(_, host)| host);
    host.split_once(':').map_or(host, |(host, _)| host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_path(source: &str, org: &str, project: &str) -> RepoPath {
        RepoPath {
            source: source.to_string(),
            org: org.to_string(),
            project: project.to_string(),
        }
    }

    #[test]
    fn test_parse_supported_forms() {
        let cases = [
            (
                "git@github.com:dsaiztc/dev.git",
                repo_path("github.com", "dsaiztc", "dev"),
            ),
            (
                "https://github.com/dsaiztc/dev.git",
                repo_path("github.com", "dsaiztc", "dev"),
            ),
            (
                "https://github.com/dsaiztc/dev",
                repo_path("github.com", "dsaiztc", "dev"),
            ),
            (
                "ssh://git@github.com/dsaiztc/dev.git",
                repo_path("github.com", "dsaiztc", "dev"),
            ),
            (
                "ssh://git@github.com:22/dsaiztc/dev.git",
                repo_path("github.com", "dsaiztc", "dev"),
            ),
            (
                "git@gitlab.com:gitlab-org/subgroup/project.git",
                repo_path("gitlab.com", "gitlab-org/subgroup", "project"),
            ),
            (
                "https://gitlab.com/gitlab-org/subgroup/deep/project.git",
                repo_path("gitlab.com", "gitlab-org/subgroup/deep", "project"),
            ),
            (
                "git@git.company.com:team/service.git",
                repo_path("git.company.com", "team", "service"),
            ),
        ];

        for (input, want) in cases {
            let got = parse(input).unwrap_or_else(|e| panic!("parse({input:?}) failed: {e}"));
            assert_eq!(got, want, "parse({input:?})");
        }
    }

    #[test]
    fn test_parse_rejects_invalid_urls() {
        assert_eq!(parse(""), Err(RepoUrlError::Empty));
        assert_eq!(parse("   "), Err(RepoUrlError::Empty));
        assert!(matches!(
            parse("just-a-name"),
            Err(RepoUrlError::Unrecognized(_))
        ));
        assert!(matches!(
            parse("https://github.com/"),
            Err(RepoUrlError::MissingPath(_))
        ));
        assert!(matches!(
            parse("https://github.com/project"),
            Err(RepoUrlError::MissingPath(_))
        ));
    }

    #[test]
    fn test_full_path() {
        let rp = repo_path("github.com", "dsaiztc", "dev");
        assert_eq!(rp.full_path(), PathBuf::from("github.com/dsaiztc/dev"));
    }
}
