//! Version probing for a resolved binary.
//!
//! Resolution only finds a path; it says nothing about whether the binary
//! actually runs. Invoking it with `--version` is a cheap liveness check
//! and gives the user something concrete to report.

use std::path::Path;

use crate::shell::ProcessRunner;

/// Run the resolved binary with `--version` and extract what it reports.
///
/// Any failure (spawn error, nonzero exit, unrecognizable output) yields
/// `None`; the probe never blocks resolution.
pub fn probe_version<R: ProcessRunner>(runner: &R, binary: &Path) -> Option<String> {
    let path = binary.to_string_lossy();
    match runner.run(&path, &["--version"]) {
        Ok(output) if output.success => extract_version(&output.stdout),
        Ok(output) => {
            tracing::debug!("version probe exited with {:?}", output.exit_code);
            None
        }
        Err(err) => {
            tracing::debug!("version probe failed: {}", err);
            None
        }
    }
}

/// Extract a version number from command output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
