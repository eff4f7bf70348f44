//! Session state and dispatch results.
//!
//! The host owns the `Session`; the dispatcher only reads it. Mutations
//! travel back as values (`SessionPatch`, `Signal`) so the core stays a
//! pure function of (input, session).

use std::collections::BTreeSet;

use termy_types::config::ShellConfig;

/// Maximum number of history entries to retain.
const MAX_HISTORY: usize = 100;

/// Out-of-band request to open the modal editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    /// Store-relative file name.
    pub filename: String,
    /// Current content of the file (empty when the file is new).
    pub initial: String,
}

/// Host signal that cannot be expressed as scrollback lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Reset the scrollback to the lines carried by the result.
    Clear,
    /// Leave dispatch mode and edit a file.
    Edit(EditRequest),
}

/// Mutation the host applies to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPatch {
    /// Add a package to the imported set.
    ImportPackage(String),
}

/// Everything one dispatch call produced.
#[derive(Debug, Default)]
pub struct DispatchResult {
    /// Lines to append (or, under `Signal::Clear`, to replace with).
    pub lines: Vec<String>,
    /// Session mutation for the host to apply.
    pub patch: Option<SessionPatch>,
    /// Out-of-band host signal.
    pub signal: Option<Signal>,
}

impl DispatchResult {
    pub(crate) fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    pub(crate) fn signal(signal: Signal) -> Self {
        Self {
            signal: Some(signal),
            ..Self::default()
        }
    }

    /// Whether the result carries nothing at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.patch.is_none() && self.signal.is_none()
    }
}

/// Dispatcher-visible session state.
#[derive(Debug, Clone)]
pub struct Session {
    /// Rendered terminal lines, oldest first.
    pub scrollback: Vec<String>,
    /// Imported package identifiers.
    pub imported_packages: BTreeSet<String>,
    /// Entered command lines, oldest first, for host-side recall only.
    pub history: Vec<String>,
}

impl Session {
    /// Create a session showing the configured banner.
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            scrollback: config.banner.clone(),
            imported_packages: BTreeSet::new(),
            history: Vec::new(),
        }
    }

    /// Apply a dispatcher-produced mutation.
    pub fn apply(&mut self, patch: SessionPatch) {
        match patch {
            SessionPatch::ImportPackage(pkg) => {
                self.imported_packages.insert(pkg);
            },
        }
    }

    /// Record an entered line for recall. Consecutive duplicates collapse;
    /// only the most recent `MAX_HISTORY` entries are kept.
    pub fn record(&mut self, line: &str) {
        if self.history.last().is_none_or(|last| last != line) {
            self.history.push(line.to_string());
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }
    }
}
