//! Command trait, ordered match table, and dispatch logic.
//!
//! Resolution order is the table order: the first row whose name matches
//! the head of the trimmed input wins. Matching is ASCII case-insensitive
//! on the name; the remainder after the name and one whitespace character
//! is handed to the row verbatim. Rows gated behind a package that has not
//! been imported are invisible, so gated misses fall through to the
//! `Command not found` row.

use termy_platform::{ProcessService, TimeService};
use termy_store::FileStore;
use termy_types::config::ShellConfig;
use termy_types::error::{Result, TermyError};

use crate::commands::default_rules;
use crate::session::{DispatchResult, EditRequest, Session, SessionPatch, Signal};

/// Output produced by a command rule.
#[derive(Debug)]
pub enum CommandOutput {
    /// Lines to append to the scrollback.
    Lines(Vec<String>),
    /// Command produced no visible output.
    None,
    /// Signal to the host to enter the modal editor.
    Edit(EditRequest),
}

/// Collaborator services passed to every command.
pub struct Environment<'a> {
    /// External-process execution.
    pub process: &'a dyn ProcessService,
    /// Session-private file storage.
    pub store: &'a dyn FileStore,
    /// Wall clock, when the host provides one.
    pub time: Option<&'a dyn TimeService>,
    /// Host-supplied data directory; default target for bare `ls`.
    pub data_dir: String,
}

/// How a row consumes the input after its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Matches only the bare name (`time`).
    Bare,
    /// Matches only when arguments follow (`cat <file>`).
    WithArgs,
    /// Matches both forms (`ls` / `ls <path>`).
    Either,
}

/// A single row of the dispatch table.
pub trait Command {
    /// Leading token(s) the row matches (`math.add`, `ip a`).
    fn name(&self) -> &str;

    /// One-line description for the generated help.
    fn description(&self) -> &str;

    /// Usage string (e.g. `ls [path]`).
    fn usage(&self) -> &str;

    /// Help section this row is listed under.
    fn section(&self) -> &str {
        "Basic Commands"
    }

    /// Package that must be imported before the row is visible.
    fn package(&self) -> Option<&str> {
        None
    }

    /// Argument shape; drives matching.
    fn arity(&self) -> Arity {
        Arity::WithArgs
    }

    /// Execute with the remainder after the name (verbatim slice).
    fn execute(&self, rest: &str, env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Match `name` against the head of `input`, ASCII case-insensitive.
///
/// Returns `Some("")` on an exact match, or the remainder after the name
/// plus exactly one whitespace character. The remainder is sliced from the
/// original input, so its case and internal whitespace survive.
fn match_name<'a>(name: &str, input: &'a str) -> Option<&'a str> {
    let n = name.len();
    if input.len() == n && input.eq_ignore_ascii_case(name) {
        return Some("");
    }
    if input.len() > n
        && input.is_char_boundary(n)
        && input[..n].eq_ignore_ascii_case(name)
        && input.as_bytes()[n].is_ascii_whitespace()
    {
        return Some(&input[n + 1..]);
    }
    None
}

/// The ordered match table with dispatch.
pub struct Dispatcher {
    rules: Vec<Box<dyn Command>>,
    config: ShellConfig,
}

impl Dispatcher {
    /// Build a dispatcher with the default table for `config`.
    pub fn new(config: ShellConfig) -> Self {
        let rules = default_rules(&config);
        Self { rules, config }
    }

    /// The active variant configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Resolve one input line against the table.
    ///
    /// Never fails: row errors are rendered as an `Error:` or `Usage:`
    /// line. The session is only read; mutations come back in the result.
    pub fn dispatch(
        &self,
        input: &str,
        session: &Session,
        env: &mut Environment<'_>,
    ) -> DispatchResult {
        let input = input.trim();
        if input.is_empty() {
            return DispatchResult::default();
        }

        // Intercepted rows: these need the table or the config itself.
        if match_name("clear", input) == Some("") {
            return self.clear_result();
        }
        if match_name("h", input) == Some("") {
            return DispatchResult::lines(self.render_help());
        }
        if let Some(rest) = match_name(&self.config.import_command, input)
            && !rest.trim().is_empty()
        {
            return self.import_package(rest.trim(), session);
        }

        for rule in &self.rules {
            let Some(rest) = match_name(rule.name(), input) else {
                continue;
            };
            let shape_ok = match rule.arity() {
                Arity::Bare => rest.is_empty(),
                Arity::WithArgs => !rest.is_empty(),
                Arity::Either => true,
            };
            if !shape_ok {
                continue;
            }
            if let Some(pkg) = rule.package()
                && !session.imported_packages.contains(pkg)
            {
                continue;
            }
            log::debug!("dispatching '{input}' via row '{}'", rule.name());
            return match rule.execute(rest, env) {
                Ok(CommandOutput::Lines(lines)) => DispatchResult::lines(lines),
                Ok(CommandOutput::None) => DispatchResult::default(),
                Ok(CommandOutput::Edit(req)) => DispatchResult::signal(Signal::Edit(req)),
                Err(TermyError::Usage(usage)) => {
                    DispatchResult::lines(vec![format!("Usage: {usage}")])
                },
                Err(TermyError::Command(msg)) => {
                    DispatchResult::lines(vec![format!("Error: {msg}")])
                },
                Err(e) => DispatchResult::lines(vec![format!("Error: {e}")]),
            };
        }

        let mut lines = vec![format!("Command not found: {input}")];
        if let Some(hint) = &self.config.help_hint {
            lines.push(hint.clone());
        }
        DispatchResult::lines(lines)
    }

    fn clear_result(&self) -> DispatchResult {
        let lines = if self.config.clear_to_banner {
            self.config.banner.clone()
        } else {
            Vec::new()
        };
        DispatchResult {
            lines,
            patch: None,
            signal: Some(Signal::Clear),
        }
    }

    fn import_package(&self, pkg: &str, session: &Session) -> DispatchResult {
        let pkg = pkg.to_ascii_lowercase();
        if !self.config.allowed_packages.iter().any(|p| *p == pkg) {
            return DispatchResult::lines(vec![format!("Unknown package: '{pkg}'")]);
        }
        if session.imported_packages.contains(&pkg) {
            return DispatchResult::lines(vec![format!("Package '{pkg}' is already imported.")]);
        }
        log::info!("importing package '{pkg}'");
        DispatchResult {
            lines: vec![format!("Package '{pkg}' successfully imported.")],
            patch: Some(SessionPatch::ImportPackage(pkg)),
            signal: None,
        }
    }

    /// Render the help page from the table, so it can never drift from
    /// the registered rows.
    fn render_help(&self) -> Vec<String> {
        let mut lines = vec![
            "TermySH - Advanced Terminal Help".to_string(),
            String::new(),
            "Basic Commands:".to_string(),
            format!("  {:<24} {}", "h", "Show this help page"),
            format!("  {:<24} {}", "clear", "Clear the terminal screen"),
            format!(
                "  {:<24} Import a package ({})",
                format!("{} <pkg>", self.config.import_command),
                self.config.allowed_packages.join(", ")
            ),
        ];
        let mut section = "Basic Commands";
        for rule in &self.rules {
            if rule.section() != section {
                section = rule.section();
                lines.push(String::new());
                lines.push(format!("{section}:"));
            }
            let mut description = rule.description().to_string();
            if let Some(pkg) = rule.package() {
                description.push_str(&format!(" (requires '{pkg}')"));
            }
            lines.push(format!("  {:<24} {}", rule.usage(), description));
        }
        lines.push(String::new());
        lines.push("Notes:".to_string());
        lines.push(format!(
            "- Package-gated commands need '{} <pkg>' first",
            self.config.import_command
        ));
        lines.push("- Root commands (su) only work when elevated execution is available".to_string());
        lines
    }
}
