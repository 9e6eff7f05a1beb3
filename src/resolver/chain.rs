//! The strategy chain that locates a tool's binary.
//!
//! Strategies run in a fixed order, cheapest and most authoritative first,
//! and the first hit wins:
//!
//! 1. Explicit override environment variable (must point at an existing path)
//! 2. Lookup over the OS search path
//! 3. Package-manager global bin directory query
//! 4. Conventional install-location globbing
//! 5. The bare tool name, unverified
//!
//! Every failure along the way is absorbed; resolution never errors. The
//! worst case is step 5, which hands the caller a name and lets the eventual
//! spawn produce the real diagnostic. Callers are expected to resolve once
//! at startup and pass the result around, not re-resolve per use.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::manager::{query_global_bin_dir, ManagerQuery};
use super::patterns::PatternTable;
use super::search_path::{parse_system_path, resolve_tool_path};
use crate::shell::ProcessRunner;

/// Everything the chain needs to know about the tool being located.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    name: String,
    override_var: String,
    manager_query: ManagerQuery,
    patterns: PatternTable,
}

impl ToolSpec {
    /// Spec for a tool installed through npm, with the conventional
    /// override variable (`claude` → `CLAUDE_BINARY_PATH`) and nvm-aware
    /// install patterns.
    pub fn npm_tool(name: &str) -> Self {
        Self {
            name: name.to_string(),
            override_var: default_override_var(name),
            manager_query: ManagerQuery::npm(),
            patterns: PatternTable::for_npm_tool(name),
        }
    }

    /// Use a different override environment variable.
    pub fn with_override_var(mut self, var: &str) -> Self {
        self.override_var = var.to_string();
        self
    }

    /// Use a different package-manager query.
    pub fn with_manager_query(mut self, query: ManagerQuery) -> Self {
        self.manager_query = query;
        self
    }

    /// Use a different install-location pattern table.
    pub fn with_patterns(mut self, patterns: PatternTable) -> Self {
        self.patterns = patterns;
        self
    }

    /// The bare tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The override environment variable consulted first.
    pub fn override_var(&self) -> &str {
        &self.override_var
    }
}

/// Which strategy produced the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionSource {
    /// The override environment variable pointed at an existing path.
    EnvOverride,
    /// Found on the OS search path.
    SearchPath,
    /// Joined onto the package manager's reported global bin directory.
    ManagerQuery,
    /// Matched a conventional install-location pattern.
    InstallPattern,
    /// Nothing matched; the bare tool name was returned unverified.
    Fallback,
}

/// The outcome of running the chain: always a non-empty path.
///
/// When `source` is [`ResolutionSource::Fallback`], `path` is the bare tool
/// name and nothing guarantees it exists anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The path to invoke the tool at.
    pub path: PathBuf,
    /// The strategy that produced it.
    pub source: ResolutionSource,
}

impl Resolution {
    /// Whether the path came from a strategy that checked the filesystem.
    pub fn is_verified(&self) -> bool {
        self.source != ResolutionSource::Fallback
    }
}

/// Runs the strategy chain for one [`ToolSpec`].
pub struct Resolver<'a, R: ProcessRunner> {
    spec: &'a ToolSpec,
    runner: &'a R,
}

impl<'a, R: ProcessRunner> Resolver<'a, R> {
    /// Create a resolver over the given spec and process capability.
    pub fn new(spec: &'a ToolSpec, runner: &'a R) -> Self {
        Self { spec, runner }
    }

    /// Resolve using the real environment, search path, and home directory.
    pub fn resolve(&self) -> Resolution {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let search_path = parse_system_path();
        self.resolve_with_env(|key| std::env::var(key), &search_path, &home)
    }

    /// Resolve with injected leaf capabilities.
    ///
    /// This is the whole chain; `resolve` only supplies the ambient inputs.
    /// Tests inject a fake environment, a controlled search path, and a
    /// temp home directory.
    pub fn resolve_with_env<F>(
        &self,
        env_fn: F,
        search_path: &[PathBuf],
        home: &Path,
    ) -> Resolution
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let tool = self.spec.name();

        // 1. Explicit override: honored only if the path actually exists.
        //    A set-but-dangling override falls through silently.
        if let Ok(value) = env_fn(self.spec.override_var()) {
            let path = PathBuf::from(&value);
            if path.exists() {
                tracing::debug!("{} resolved via ${}", tool, self.spec.override_var());
                return Resolution {
                    path,
                    source: ResolutionSource::EnvOverride,
                };
            }
            tracing::debug!(
                "${} is set but {} does not exist, ignoring",
                self.spec.override_var(),
                value
            );
        }

        // 2. The common case: a global install already on the search path.
        if let Some(path) = resolve_tool_path(tool, search_path) {
            tracing::debug!("{} resolved via search path: {}", tool, path.display());
            return Resolution {
                path,
                source: ResolutionSource::SearchPath,
            };
        }

        // 3. Ask the package manager where its global binaries live.
        if let Some(dir) = query_global_bin_dir(self.runner, &self.spec.manager_query) {
            let path = dir.join(tool);
            if path.exists() {
                tracing::debug!("{} resolved via manager query: {}", tool, path.display());
                return Resolution {
                    path,
                    source: ResolutionSource::ManagerQuery,
                };
            }
        }

        // 4. Conventional install locations.
        if let Some(path) = self.spec.patterns.resolve(home) {
            return Resolution {
                path,
                source: ResolutionSource::InstallPattern,
            };
        }

        // 5. Give up gracefully: hand back the bare name.
        tracing::debug!("{} not found anywhere, falling back to bare name", tool);
        Resolution {
            path: PathBuf::from(tool),
            source: ResolutionSource::Fallback,
        }
    }
}

/// Derive the conventional override variable name: `claude-code` →
/// `CLAUDE_CODE_BINARY_PATH`.
fn default_override_var(tool: &str) -> String {
    let upper: String = tool
        .chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .collect();
    format!("{upper}_BINARY_PATH")
}
