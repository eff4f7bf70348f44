//! File editing: `nano` hands the host an edit request.
//!
//! The dispatcher never writes files itself. `nano` reads the current
//! content through the store collaborator and signals the host to enter
//! its modal editor; the host writes the edited buffer back.

use termy_types::error::Result;

use crate::interpreter::{Command, CommandOutput, Environment};
use crate::session::EditRequest;

struct NanoCmd;
impl Command for NanoCmd {
    fn name(&self) -> &str {
        "nano"
    }
    fn description(&self) -> &str {
        "Open a file in the line editor"
    }
    fn usage(&self) -> &str {
        "nano <filename>"
    }
    fn section(&self) -> &str {
        "Files"
    }
    fn package(&self) -> Option<&str> {
        Some("files")
    }
    fn execute(&self, rest: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let filename = rest.trim();
        let initial = env.store.read(filename)?;
        Ok(CommandOutput::Edit(EditRequest {
            filename: filename.to_string(),
            initial,
        }))
    }
}

pub(crate) fn file_rules() -> Vec<Box<dyn Command>> {
    vec![Box::new(NanoCmd)]
}

#[cfg(test)]
mod tests {
    use termy_platform::{ExecCapture, ProcessService};
    use termy_store::{FileStore, MemoryStore};
    use termy_types::error::{Result, TermyError};

    use super::*;

    struct NoProcess;
    impl ProcessService for NoProcess {
        fn run_shell(&self, _command_line: &str) -> Result<ExecCapture> {
            Err(std::io::Error::other("unused").into())
        }
        fn run_elevated(&self, _command_line: &str) -> Result<ExecCapture> {
            Err(std::io::Error::other("unused").into())
        }
    }

    fn edit(store: &MemoryStore, rest: &str) -> Result<CommandOutput> {
        let process = NoProcess;
        let mut env = Environment {
            process: &process,
            store,
            time: None,
            data_dir: "/data".to_string(),
        };
        NanoCmd.execute(rest, &mut env)
    }

    #[test]
    fn existing_file_content_is_carried() {
        let mut store = MemoryStore::new();
        store.write("notes.txt", "draft\n").unwrap();
        match edit(&store, "notes.txt").unwrap() {
            CommandOutput::Edit(req) => {
                assert_eq!(req.filename, "notes.txt");
                assert_eq!(req.initial, "draft\n");
            },
            other => panic!("expected edit request, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_starts_empty() {
        let store = MemoryStore::new();
        match edit(&store, " fresh.txt ").unwrap() {
            CommandOutput::Edit(req) => {
                assert_eq!(req.filename, "fresh.txt");
                assert_eq!(req.initial, "");
            },
            other => panic!("expected edit request, got {other:?}"),
        }
    }

    #[test]
    fn traversal_names_are_rejected() {
        let store = MemoryStore::new();
        match edit(&store, "../escape").unwrap_err() {
            TermyError::Store(_) => {},
            other => panic!("expected store error, got {other:?}"),
        }
    }
}
