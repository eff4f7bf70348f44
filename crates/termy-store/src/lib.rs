//! Session-private file storage.
//!
//! Files live under an application-private root supplied by the host. The
//! dispatcher only ever reads through this interface (`nano` needs a file's
//! current content); the host writes edited buffers back. Names are
//! validated so nothing can escape the root.

mod disk;
mod memory;

use termy_types::error::{Result, TermyError};

/// On-disk store rooted at an application directory.
pub use disk::DiskStore;
/// Fully in-memory store for tests and ephemeral sessions.
pub use memory::MemoryStore;

/// Narrow file-storage interface resolved against an app-private root.
pub trait FileStore {
    /// Read a file's contents. A missing file reads as the empty string.
    fn read(&self, name: &str) -> Result<String>;

    /// Write a file verbatim, creating intermediate directories beneath
    /// the root as needed.
    fn write(&mut self, name: &str, content: &str) -> Result<()>;

    /// Whether the named file currently exists.
    fn exists(&self, name: &str) -> bool;
}

/// Validate a user-supplied file name: relative, no parent traversal,
/// no empty or `.` segments, forward slashes only.
pub(crate) fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TermyError::Store("empty file name".to_string()));
    }
    if name.starts_with('/') || name.contains('\\') {
        return Err(TermyError::Store(format!(
            "file name must be relative: '{name}'"
        )));
    }
    if name
        .split('/')
        .any(|seg| seg.is_empty() || seg == "." || seg == "..")
    {
        return Err(TermyError::Store(format!("invalid file name: '{name}'")));
    }
    Ok(name)
}
