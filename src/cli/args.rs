//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

/// Binscout - locate developer CLI binaries.
#[derive(Debug, Parser)]
#[command(name = "binscout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the tool to locate (e.g. "claude")
    pub tool: String,

    /// Override environment variable to consult first
    /// (default: derived from the tool name, e.g. CLAUDE_BINARY_PATH)
    #[arg(long)]
    pub env_var: Option<String>,

    /// Package manager to query for its global bin directory
    #[arg(long, default_value = "npm")]
    pub manager: String,

    /// Timeout in seconds for external command invocations
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Run the resolved binary with --version and report the result
    #[arg(long)]
    pub verify: bool,

    /// Emit a machine-readable JSON report instead of a bare path
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
