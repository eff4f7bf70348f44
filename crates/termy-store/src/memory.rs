//! In-memory store implementation.
//!
//! Useful for unit tests and ephemeral sessions. Contents live in a
//! `BTreeMap<String, String>` keyed by validated names.

use std::collections::BTreeMap;

use termy_types::error::Result;

use crate::{FileStore, validate_name};

/// A fully in-memory file store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the store holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileStore for MemoryStore {
    fn read(&self, name: &str) -> Result<String> {
        let name = validate_name(name)?;
        Ok(self.files.get(name).cloned().unwrap_or_default())
    }

    fn write(&mut self, name: &str, content: &str) -> Result<()> {
        let name = validate_name(name)?;
        self.files.insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        validate_name(name)
            .map(|n| self.files.contains_key(n))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.read("nothing.txt").unwrap(), "");
        assert!(!store.exists("nothing.txt"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut store = MemoryStore::new();
        store.write("notes.txt", "line one\nline two\n").unwrap();
        assert!(store.exists("notes.txt"));
        assert_eq!(store.read("notes.txt").unwrap(), "line one\nline two\n");
    }

    #[test]
    fn write_overwrites() {
        let mut store = MemoryStore::new();
        store.write("a", "first").unwrap();
        store.write("a", "second").unwrap();
        assert_eq!(store.read("a").unwrap(), "second");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn nested_names_allowed() {
        let mut store = MemoryStore::new();
        store.write("logs/session.log", "x").unwrap();
        assert!(store.exists("logs/session.log"));
    }

    #[test]
    fn invalid_names_rejected() {
        let mut store = MemoryStore::new();
        assert!(store.write("../escape", "x").is_err());
        assert!(store.read("/abs").is_err());
        assert!(!store.exists("../escape"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_trip_any_content(content in ".{0,200}") {
                let mut store = MemoryStore::new();
                store.write("f.txt", &content).unwrap();
                prop_assert_eq!(store.read("f.txt").unwrap(), content);
            }
        }
    }
}
