//! Core built-in commands and dispatch-table assembly.

use termy_types::config::ShellConfig;
use termy_types::error::Result;

use crate::interpreter::{Arity, Command, CommandOutput, Environment};

/// Build the default dispatch table for a variant, in resolution order.
///
/// `clear`, `h`, and the import command are not rows: they are intercepted
/// by the dispatcher because they need the table or the config itself.
pub fn default_rules(config: &ShellConfig) -> Vec<Box<dyn Command>> {
    let mut rules: Vec<Box<dyn Command>> = vec![Box::new(EchoCmd), Box::new(TimeCmd)];
    rules.extend(crate::math_commands::math_rules());
    rules.extend(crate::shell_commands::shell_rules(config));
    rules.extend(crate::file_commands::file_rules());
    rules
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Echo back the provided text"
    }
    fn usage(&self) -> &str {
        "echo <text>"
    }
    fn execute(&self, rest: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        // The remainder is echoed exactly as sliced, whitespace included.
        Ok(CommandOutput::Lines(vec![rest.to_string()]))
    }
}

// ---------------------------------------------------------------------------
// time
// ---------------------------------------------------------------------------

struct TimeCmd;
impl Command for TimeCmd {
    fn name(&self) -> &str {
        "time"
    }
    fn description(&self) -> &str {
        "Show the current system time"
    }
    fn usage(&self) -> &str {
        "time"
    }
    fn arity(&self) -> Arity {
        Arity::Bare
    }
    fn execute(&self, _rest: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        match env.time {
            Some(time) => {
                let now = time.now()?;
                Ok(CommandOutput::Lines(vec![format!("Current time: {now}")]))
            },
            None => Ok(CommandOutput::Lines(vec![
                "time: no clock service available".to_string(),
            ])),
        }
    }
}

#[cfg(test)]
mod tests {
    use termy_platform::{ExecCapture, ProcessService};
    use termy_store::MemoryStore;
    use termy_types::error::Result;

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

    fn env<'a>(process: &'a NoProcess, store: &'a MemoryStore) -> Environment<'a> {
        Environment {
            process,
            store,
            time: None,
            data_dir: "/data".to_string(),
        }
    }

    #[test]
    fn echo_returns_rest_verbatim() {
        let process = NoProcess;
        let store = MemoryStore::new();
        let mut env = env(&process, &store);
        match EchoCmd.execute(" keep  spacing ", &mut env).unwrap() {
            CommandOutput::Lines(lines) => assert_eq!(lines, vec![" keep  spacing "]),
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn time_without_clock_reports_unavailable() {
        let process = NoProcess;
        let store = MemoryStore::new();
        let mut env = env(&process, &store);
        match TimeCmd.execute("", &mut env).unwrap() {
            CommandOutput::Lines(lines) => {
                assert_eq!(lines, vec!["time: no clock service available"]);
            },
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn default_table_order_starts_with_echo() {
        let rules = default_rules(&termy_types::config::ShellConfig::default());
        assert_eq!(rules[0].name(), "echo");
        assert_eq!(rules[1].name(), "time");
        // The editor row comes last, after the shell delegations.
        assert_eq!(rules.last().map(|r| r.name().to_string()).as_deref(), Some("nano"));
    }
}
