//! Command-line interface.

pub mod args;
pub mod report;

pub use args::Cli;
pub use report::ResolutionReport;
