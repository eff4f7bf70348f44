//! Command dispatcher core for TermySH.
//!
//! The dispatcher is an ordered match table: each input line is resolved
//! against the table top to bottom, first match wins. Commands implement
//! the `Command` trait and receive their collaborators (process spawner,
//! file store, clock) through an `Environment`. A dispatch call never
//! mutates the session: it returns lines, an optional `SessionPatch`, and
//! an optional out-of-band `Signal` for the host to apply.

mod commands;
mod file_commands;
mod interpreter;
mod math_commands;
mod session;
mod shell_commands;

/// Build the default dispatch table for a variant, in resolution order.
pub use commands::default_rules;
/// Argument shape of a dispatch-table row.
pub use interpreter::Arity;
/// A single row of the dispatch table.
pub use interpreter::Command;
/// Output produced by a command rule.
pub use interpreter::CommandOutput;
/// The ordered match table with dispatch.
pub use interpreter::Dispatcher;
/// Collaborator services passed to every command.
pub use interpreter::Environment;
/// Everything one dispatch call produced.
pub use session::DispatchResult;
/// Out-of-band request to open the modal editor.
pub use session::EditRequest;
/// Dispatcher-visible session state.
pub use session::Session;
/// Mutation the host applies to the session.
pub use session::SessionPatch;
/// Host signal that cannot be expressed as scrollback lines.
pub use session::Signal;
