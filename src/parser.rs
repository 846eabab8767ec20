//! Session-command parser
//!
//! Turns one line of session input into a [`SessionCommand`]. The grammar
//! is a verb followed by the rest of the line: free text for `add` and
//! `exists`, a task id for `toggle` and `delete`, nothing for the others.

use crate::models::TaskId;

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a task with the given content
    Add(String),
    /// Render the current list
    List,
    /// Flip completion on a task
    Toggle(TaskId),
    /// Remove a task
    Delete(TaskId),
    /// Remove every task
    Clear,
    /// Check whether content is already on the list
    Exists(String),
    /// Show the command summary
    Help,
    /// End the session
    Quit,
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line was empty or whitespace-only
    #[error("empty input")]
    Empty,

    /// The verb is not one the session understands
    #[error("unknown command: {0}. Use: add, list, toggle, delete, clear, exists, help, quit")]
    UnknownCommand(String),

    /// The verb needs a task id and none was given
    #[error("missing task id. Usage: {0} <id>")]
    MissingId(&'static str),

    /// The task id could not be parsed
    #[error("{0}")]
    InvalidId(String),
}

/// Parse one line of session input
pub fn parse_line(line: &str) -> Result<SessionCommand, ParseError> {
    let line = line.trim();
    let Some((verb, rest)) = split_verb(line) else {
        return Err(ParseError::Empty);
    };

    match verb.to_lowercase().as_str() {
        "add" | "a" => Ok(SessionCommand::Add(rest.to_string())),
        "list" | "ls" | "l" => Ok(SessionCommand::List),
        "toggle" | "check" | "t" => parse_id(rest, "toggle").map(SessionCommand::Toggle),
        "delete" | "rm" | "d" => parse_id(rest, "delete").map(SessionCommand::Delete),
        "clear" => Ok(SessionCommand::Clear),
        "exists" => Ok(SessionCommand::Exists(rest.to_string())),
        "help" | "h" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Split a trimmed line into its verb and the rest of the line
fn split_verb(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => Some((verb, rest.trim_start())),
        None => Some((line, "")),
    }
}

fn parse_id(rest: &str, verb: &'static str) -> Result<TaskId, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingId(verb));
    }
    rest.parse::<TaskId>().map_err(ParseError::InvalidId)
}
