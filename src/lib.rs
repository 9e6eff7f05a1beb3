//! Binscout - locate developer CLI binaries.
//!
//! Binscout finds the filesystem path of a command-line tool whose exact
//! install location is unknown, trying successively less authoritative
//! sources: an override environment variable, the OS search path, the
//! package manager's global bin directory, and conventional install
//! locations. Resolution never fails; the worst case is the bare tool
//! name, left for the eventual spawn to diagnose.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`resolver`] - The strategy chain and its leaf capabilities
//! - [`shell`] - External process invocation
//! - [`version`] - Version probing of a resolved binary
//!
//! # Example
//!
//! ```no_run
//! use binscout::resolver::{Resolver, ToolSpec};
//! use binscout::shell::SystemRunner;
//!
//! let spec = ToolSpec::npm_tool("claude");
//! let runner = SystemRunner::new();
//! let resolution = Resolver::new(&spec, &runner).resolve();
//! println!("{}", resolution.path.display());
//! ```
//!
//! Resolve once at startup and pass the [`resolver::Resolution`] to
//! whatever spawns the tool; the chain is deterministic for a fixed
//! environment but there is no reason to re-run it per use.

pub mod cli;
pub mod error;
pub mod resolver;
pub mod shell;
pub mod version;

pub use error::{BinscoutError, Result};
