//! Binary location via an ordered strategy chain.
//!
//! # Modules
//!
//! - [`chain`] - The resolver itself: strategy ordering and fallback
//! - [`search_path`] - Executable lookup over the OS search path
//! - [`manager`] - Package-manager global bin directory query
//! - [`patterns`] - Conventional install-location globbing

pub mod chain;
pub mod manager;
pub mod patterns;
pub mod search_path;

pub use chain::{Resolution, ResolutionSource, Resolver, ToolSpec};
pub use manager::ManagerQuery;
pub use patterns::PatternTable;
