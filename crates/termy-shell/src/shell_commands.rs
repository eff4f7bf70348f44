//! Shell-delegating commands: `su`, `sh`, and the fixed unix templates.
//!
//! Each template row formats one shell command line and hands it to the
//! process collaborator. Captured stderr takes precedence over stdout; an
//! empty capture becomes a fixed success line; spawn failures become a
//! single error line. Nothing here raises an error to the dispatcher
//! except the `su` elevation check.

use termy_platform::ProcessService;
use termy_types::config::ShellConfig;
use termy_types::error::{Result, TermyError};

use crate::interpreter::{Arity, Command, CommandOutput, Environment};

/// Render a plain-shell capture as terminal lines.
pub(crate) fn shell_lines(process: &dyn ProcessService, command_line: &str) -> Vec<String> {
    log::debug!("delegating to sh: {command_line}");
    match process.run_shell(command_line) {
        Ok(capture) => {
            if !capture.stderr.is_empty() {
                capture.stderr
            } else if !capture.stdout.is_empty() {
                capture.stdout
            } else {
                vec!["Command executed successfully".to_string()]
            }
        },
        Err(e) => vec![format!("Error executing command: {e}")],
    }
}

/// Render an elevated-shell capture as terminal lines.
pub(crate) fn elevated_lines(process: &dyn ProcessService, command_line: &str) -> Vec<String> {
    log::debug!("delegating to su: {command_line}");
    match process.run_elevated(command_line) {
        Ok(capture) => {
            if !capture.stderr.is_empty() {
                capture.stderr
            } else if !capture.stdout.is_empty() {
                capture.stdout
            } else {
                vec!["Root command executed successfully".to_string()]
            }
        },
        Err(e) => vec![format!("Root access error: {e}")],
    }
}

// ---------------------------------------------------------------------------
// su
// ---------------------------------------------------------------------------

struct SuHintCmd;
impl Command for SuHintCmd {
    fn name(&self) -> &str {
        "su"
    }
    fn description(&self) -> &str {
        "Explain how to run root commands"
    }
    fn usage(&self) -> &str {
        "su"
    }
    fn section(&self) -> &str {
        "Shell Commands"
    }
    fn arity(&self) -> Arity {
        Arity::Bare
    }
    fn execute(&self, _rest: &str, _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(vec![
            "Root access required. Use 'su <command>' for root commands.".to_string(),
        ]))
    }
}

struct SuCmd;
impl Command for SuCmd {
    fn name(&self) -> &str {
        "su"
    }
    fn description(&self) -> &str {
        "Execute a command as root"
    }
    fn usage(&self) -> &str {
        "su <command>"
    }
    fn section(&self) -> &str {
        "Shell Commands"
    }
    fn execute(&self, rest: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        if !env.process.elevation_available() {
            return Err(TermyError::Command("Device is not rooted".to_string()));
        }
        Ok(CommandOutput::Lines(elevated_lines(
            env.process,
            rest.trim(),
        )))
    }
}

// ---------------------------------------------------------------------------
// sh
// ---------------------------------------------------------------------------

struct ShCmd;
impl Command for ShCmd {
    fn name(&self) -> &str {
        "sh"
    }
    fn description(&self) -> &str {
        "Execute a shell command"
    }
    fn usage(&self) -> &str {
        "sh <command>"
    }
    fn section(&self) -> &str {
        "Shell Commands"
    }
    fn package(&self) -> Option<&str> {
        Some("shell")
    }
    fn execute(&self, rest: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(shell_lines(env.process, rest.trim())))
    }
}

// ---------------------------------------------------------------------------
// Fixed delegation templates
// ---------------------------------------------------------------------------

/// A row that formats a fixed shell template from its argument.
struct DelegateCmd {
    name: &'static str,
    usage: &'static str,
    description: &'static str,
    arity: Arity,
    build: fn(&str, &Environment<'_>) -> String,
}

impl Command for DelegateCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.usage
    }
    fn section(&self) -> &str {
        "Shell Commands"
    }
    fn arity(&self) -> Arity {
        self.arity
    }
    fn execute(&self, rest: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let command_line = (self.build)(rest.trim(), env);
        Ok(CommandOutput::Lines(shell_lines(env.process, &command_line)))
    }
}

/// Bare `ls` lists the data directory; relative paths resolve against it.
fn ls_template(args: &str, env: &Environment<'_>) -> String {
    if args.is_empty() {
        format!("ls {}", env.data_dir)
    } else if args.starts_with('/') {
        format!("ls {args}")
    } else {
        format!("ls {}/{}", env.data_dir, args)
    }
}

// ---------------------------------------------------------------------------
// ping
// ---------------------------------------------------------------------------

struct PingCmd {
    count: u32,
}

impl Command for PingCmd {
    fn name(&self) -> &str {
        "ping"
    }
    fn description(&self) -> &str {
        "Test network connectivity"
    }
    fn usage(&self) -> &str {
        "ping <host>"
    }
    fn section(&self) -> &str {
        "Shell Commands"
    }
    fn execute(&self, rest: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let command_line = format!("ping -c {} {}", self.count, rest.trim());
        Ok(CommandOutput::Lines(shell_lines(env.process, &command_line)))
    }
}

/// Shell command rows, in resolution order.
pub(crate) fn shell_rules(config: &ShellConfig) -> Vec<Box<dyn Command>> {
    vec![
        Box::new(SuHintCmd),
        Box::new(SuCmd),
        Box::new(ShCmd),
        Box::new(DelegateCmd {
            name: "ls",
            usage: "ls [path]",
            description: "List directory contents",
            arity: Arity::Either,
            build: ls_template,
        }),
        Box::new(DelegateCmd {
            name: "pwd",
            usage: "pwd",
            description: "Print working directory",
            arity: Arity::Bare,
            build: |_, _| "pwd".to_string(),
        }),
        Box::new(DelegateCmd {
            name: "cd",
            usage: "cd <dir>",
            description: "Change directory (prints the result)",
            arity: Arity::WithArgs,
            build: |args, _| format!("cd {args} && pwd"),
        }),
        Box::new(DelegateCmd {
            name: "cat",
            usage: "cat <file>",
            description: "Display file contents",
            arity: Arity::WithArgs,
            build: |args, _| format!("cat {args}"),
        }),
        Box::new(DelegateCmd {
            name: "mkdir",
            usage: "mkdir <dir>",
            description: "Create a directory",
            arity: Arity::WithArgs,
            build: |args, _| format!("mkdir {args}"),
        }),
        Box::new(DelegateCmd {
            name: "rm",
            usage: "rm <target>",
            description: "Remove a file or directory",
            arity: Arity::WithArgs,
            build: |args, _| format!("rm {args}"),
        }),
        Box::new(DelegateCmd {
            name: "cp",
            usage: "cp <src> <dest>",
            description: "Copy files",
            arity: Arity::WithArgs,
            build: |args, _| format!("cp {args}"),
        }),
        Box::new(DelegateCmd {
            name: "mv",
            usage: "mv <src> <dest>",
            description: "Move or rename files",
            arity: Arity::WithArgs,
            build: |args, _| format!("mv {args}"),
        }),
        Box::new(PingCmd {
            count: config.ping_count,
        }),
        Box::new(DelegateCmd {
            name: "ifconfig",
            usage: "ifconfig",
            description: "Network interface information",
            arity: Arity::Bare,
            build: |_, _| "ip a".to_string(),
        }),
        Box::new(DelegateCmd {
            name: "ip a",
            usage: "ip a",
            description: "Network interface information",
            arity: Arity::Bare,
            build: |_, _| "ip a".to_string(),
        }),
        Box::new(DelegateCmd {
            name: "ps",
            usage: "ps",
            description: "Display running processes",
            arity: Arity::Bare,
            build: |_, _| "ps".to_string(),
        }),
        Box::new(DelegateCmd {
            name: "grep",
            usage: "grep <pattern>",
            description: "Search input for a pattern",
            arity: Arity::WithArgs,
            build: |args, _| format!("grep {args}"),
        }),
    ]
}
