//! External process invocation.
//!
//! # Modules
//!
//! - [`command`] - The [`ProcessRunner`](command::ProcessRunner) capability
//!   and its system-backed implementation

pub mod command;

pub use command::{ProcessOutput, ProcessRunner, SystemRunner};
