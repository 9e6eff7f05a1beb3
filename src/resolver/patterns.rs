//! Conventional install-location globbing.
//!
//! When a tool isn't on PATH and the package manager can't be queried, its
//! binary often still sits in a well-known directory: a global prefix, or a
//! per-version directory under a version-manager root (nvm keeps one
//! `versions/node/<version>/bin` per installed Node).

use std::path::{Path, PathBuf};

/// An ordered table of glob patterns for conventional install locations.
///
/// Patterns are tried strictly in order; the first pattern with any match
/// wins and later patterns are never expanded. Patterns starting with `~/`
/// are expanded against the home directory at resolution time.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<String>,
}

impl PatternTable {
    /// Build a table from explicit patterns.
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Conventional locations for an npm-installed tool, most authoritative
    /// first: the global prefix, then system-wide nvm, then per-user nvm.
    pub fn for_npm_tool(tool: &str) -> Self {
        Self::new(vec![
            format!("/usr/local/bin/{tool}"),
            format!("/usr/local/share/nvm/versions/node/*/bin/{tool}"),
            format!("~/.nvm/versions/node/*/bin/{tool}"),
        ])
    }

    /// The patterns in table order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Expand the table against the filesystem and pick a candidate.
    ///
    /// Within a pattern, multiple matches are sorted as plain strings and
    /// the last is taken as "most recent". This is NOT a version-aware
    /// sort: `v9` sorts after `v14` because `'9' > '1'`. Kept that way on
    /// purpose — callers depend on the historical ordering.
    pub fn resolve(&self, home: &Path) -> Option<PathBuf> {
        for pattern in &self.patterns {
            let expanded = expand_home(pattern, home);
            let Ok(paths) = glob::glob(&expanded) else {
                tracing::debug!("invalid install pattern skipped: {}", pattern);
                continue;
            };

            let mut matches: Vec<String> = paths
                .filter_map(|entry| entry.ok())
                .map(|path| path.to_string_lossy().into_owned())
                .collect();

            if !matches.is_empty() {
                matches.sort();
                let last = matches.pop()?;
                tracing::debug!("install pattern '{}' matched: {}", pattern, last);
                return Some(PathBuf::from(last));
            }
        }
        None
    }
}

/// Expand a leading `~/` against the given home directory.
fn expand_home(pattern: &str, home: &Path) -> String {
    match pattern.strip_prefix("~/") {
        Some(rest) => home.join(rest).to_string_lossy().into_owned(),
        None => pattern.to_string(),
    }
}
