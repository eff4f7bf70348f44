//! Modal line editor backing the `nano` command.
//!
//! Deliberately small and line-oriented: typed lines append to the buffer,
//! `:wq` saves through the file store, `:q!` discards. End-of-input saves,
//! matching the original editor's save-on-exit behavior.

use std::io::{self, BufRead};

use termy_shell::EditRequest;
use termy_store::FileStore;

/// What an editing session decided.
#[derive(Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Write this content back.
    Save(String),
    /// Leave the file untouched.
    Discard,
}

/// Fold a stream of typed lines into the edited buffer.
pub fn edit_lines<I>(initial: &str, input: I) -> EditOutcome
where
    I: IntoIterator<Item = String>,
{
    let mut buffer: Vec<String> = initial.lines().map(str::to_string).collect();
    for line in input {
        match line.trim() {
            ":wq" => return EditOutcome::Save(render(&buffer)),
            ":q!" => return EditOutcome::Discard,
            _ => buffer.push(line),
        }
    }
    EditOutcome::Save(render(&buffer))
}

fn render(buffer: &[String]) -> String {
    if buffer.is_empty() {
        String::new()
    } else {
        let mut content = buffer.join("\n");
        content.push('\n');
        content
    }
}

/// Run an interactive editing session over stdin.
pub fn run(store: &mut dyn FileStore, request: &EditRequest) -> anyhow::Result<()> {
    println!(
        "-- editing '{}' (:wq saves, :q! discards) --",
        request.filename
    );
    for line in request.initial.lines() {
        println!("{line}");
    }

    let stdin = io::stdin();
    let mut typed = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let done = matches!(line.trim(), ":wq" | ":q!");
        typed.push(line);
        if done {
            break;
        }
    }

    match edit_lines(&request.initial, typed) {
        EditOutcome::Save(content) => {
            store.write(&request.filename, &content)?;
            log::info!("wrote {} bytes to '{}'", content.len(), request.filename);
            println!("Wrote '{}'", request.filename);
        },
        EditOutcome::Discard => {
            println!("Discarded changes to '{}'", request.filename);
        },
    }
    Ok(())
}
