//! On-disk store implementation.
//!
//! All names resolve beneath a single root directory; `validate_name`
//! guarantees resolved paths cannot escape it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use termy_types::error::Result;

use crate::{FileStore, validate_name};

/// File store rooted at an application-private directory.
#[derive(Debug)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Open a store at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The root directory all names resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        Ok(self.root.join(validate_name(name)?))
    }
}

impl FileStore for DiskStore {
    fn read(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, name: &str, content: &str) -> Result<()> {
        let path = self.resolve(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).map(|p| p.is_file()).unwrap_or(false)
    }
}
