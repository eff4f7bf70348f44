//! Foundation types for TermySH: the shared error enum and the shell
//! variant configuration.

pub mod config;
pub mod error;

/// Shell variant configuration (banner, allow-list, clear behavior).
pub use config::ShellConfig;
/// Shared error enum for all TermySH crates.
pub use error::TermyError;
/// Convenience result alias.
pub use error::Result;
