//! Machine-readable resolution report for `--json`.

use serde::Serialize;

use crate::resolver::{Resolution, ResolutionSource};

/// What `binscout --json` prints.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    /// The tool that was located.
    pub tool: String,

    /// The resolved path (the bare tool name when nothing was found).
    pub path: String,

    /// The strategy that produced the path.
    pub source: ResolutionSource,

    /// Whether the path was checked against the filesystem.
    pub verified: bool,

    /// Version reported by the binary, when `--verify` was requested and
    /// the probe succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ResolutionReport {
    /// Build a report from a resolution and an optional probed version.
    pub fn new(tool: &str, resolution: &Resolution, version: Option<String>) -> Self {
        Self {
            tool: tool.to_string(),
            path: resolution.path.to_string_lossy().into_owned(),
            source: resolution.source,
            verified: resolution.is_verified(),
            version,
        }
    }
}
