//! Error types for TermySH.

use std::io;

/// Errors produced by the TermySH crates.
#[derive(Debug, thiserror::Error)]
pub enum TermyError {
    /// A command failed; the message is rendered to the terminal as
    /// `Error: <message>`.
    #[error("command error: {0}")]
    Command(String),

    /// A command was invoked with the wrong argument shape; the message is
    /// rendered to the terminal as `Usage: <message>`.
    #[error("usage: {0}")]
    Usage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermyError>;
