//! Package-manager global binary directory query.
//!
//! Package managers that install CLI tools globally can report where those
//! binaries live (`npm bin -g` prints npm's global bin directory). When the
//! tool isn't on PATH, joining that directory with the tool name often finds
//! a working install that the shell simply never picked up.

use std::path::PathBuf;

use crate::shell::ProcessRunner;

/// An invocation that makes a package manager print its global bin directory.
#[derive(Debug, Clone)]
pub struct ManagerQuery {
    program: String,
    args: Vec<String>,
}

impl ManagerQuery {
    /// Query for an arbitrary manager, assuming the `<manager> bin -g`
    /// convention.
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: vec!["bin".to_string(), "-g".to_string()],
        }
    }

    /// Query with an explicit argument list.
    pub fn with_args(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The standard query for npm-installed tools.
    pub fn npm() -> Self {
        Self::new("npm")
    }

    /// The program this query invokes.
    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Ask the package manager where its global binaries live.
///
/// Success requires exit status zero; the directory is the trimmed stdout,
/// taken verbatim (no check that it is absolute or even a directory — the
/// caller verifies the joined tool path instead). Every failure mode of the
/// invocation collapses to `None`.
pub fn query_global_bin_dir<R: ProcessRunner>(
    runner: &R,
    query: &ManagerQuery,
) -> Option<PathBuf> {
    let args: Vec<&str> = query.args.iter().map(String::as_str).collect();
    match runner.run(&query.program, &args) {
        Ok(output) if output.success => {
            let dir = output.stdout.trim();
            if dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            }
        }
        Ok(output) => {
            tracing::debug!(
                "global bin query '{}' exited with {:?}",
                query.program,
                output.exit_code
            );
            None
        }
        Err(err) => {
            tracing::debug!("global bin query '{}' failed: {}", query.program, err);
            None
        }
    }
}
