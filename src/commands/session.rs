//! Session command - the interactive task list
//!
//! Reads commands from stdin until `quit` or end of input. All list state
//! lives in a [`TaskListEngine`] owned by this function, so it lasts
//! exactly as long as the session.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::warn;

use taskdeck::config::GlobalConfig;
use taskdeck::engine::{AddOutcome, AddRejection, DeleteOutcome, TaskListEngine, ToggleOutcome};
use taskdeck::models::TaskId;
use taskdeck::output::{OutputMode, TaskListResult};
use taskdeck::parser::{self, ParseError, SessionCommand};

/// Run an interactive session until `quit` or end of input
pub fn session(config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut engine = TaskListEngine::new();

    if mode == OutputMode::Human {
        println!("taskdeck v{} - type 'help' for commands, 'quit' to leave", taskdeck::VERSION);
    }

    loop {
        if mode == OutputMode::Human {
            print!("{}", config.ui.prompt);
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parser::parse_line(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                report_error(&e, mode);
                continue;
            },
        };

        match command {
            SessionCommand::Add(content) => add(&mut engine, &content, mode),
            SessionCommand::List => list(&engine, config, mode),
            SessionCommand::Toggle(id) => toggle(&mut engine, id, mode),
            SessionCommand::Delete(id) => delete(&mut engine, id, mode),
            SessionCommand::Clear => clear(&mut engine, &mut lines, mode)?,
            SessionCommand::Exists(content) => exists(&engine, &content, mode),
            SessionCommand::Help => help(mode),
            SessionCommand::Quit => break,
        }
    }

    Ok(())
}

fn add(engine: &mut TaskListEngine, content: &str, mode: OutputMode) {
    match engine.add_task(content) {
        AddOutcome::Created(task) => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "id": task.id.value(),
                        "content": task.content,
                    })
                );
            } else {
                println!("Added {}: {}", format!("#{}", task.id).cyan(), task.content);
            }
        },
        AddOutcome::Rejected(reason) => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "content": content,
                        "reason": reason_code(reason),
                    })
                );
            } else if reason == AddRejection::DuplicateContent {
                println!("{}", "* Task already added".yellow());
            } else {
                println!("Cannot add an empty task.");
            }
        },
    }
}

const fn reason_code(reason: AddRejection) -> &'static str {
    match reason {
        AddRejection::EmptyContent => "empty_content",
        AddRejection::DuplicateContent => "duplicate_content",
    }
}

fn list(engine: &TaskListEngine, config: &GlobalConfig, mode: OutputMode) {
    TaskListResult::new(&engine.snapshot(), &config.ui).render(mode);
}

fn toggle(engine: &mut TaskListEngine, id: TaskId, mode: OutputMode) {
    match engine.toggle_completion(id) {
        ToggleOutcome::Updated(task) => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "id": task.id.value(),
                        "completed": task.completed,
                    })
                );
            } else if task.completed {
                println!("Completed {}: {}", format!("#{}", task.id).cyan(), task.content);
            } else {
                println!("Reopened {}: {}", format!("#{}", task.id).cyan(), task.content);
            }
        },
        ToggleOutcome::NotFound => not_found("toggle", id, mode),
    }
}

fn delete(engine: &mut TaskListEngine, id: TaskId, mode: OutputMode) {
    match engine.delete_task(id) {
        DeleteOutcome::Deleted(task) => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "id": task.id.value(),
                        "removed": true,
                    })
                );
            } else {
                println!("Removed {}: {}", format!("#{}", task.id).cyan(), task.content);
            }
        },
        DeleteOutcome::NotFound => {
            warn!("failed to remove task from the list: #{id}");
            not_found("delete", id, mode);
        },
    }
}

fn clear<I>(engine: &mut TaskListEngine, lines: &mut I, mode: OutputMode) -> anyhow::Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    // JSON sessions are machine-driven; confirmation is the caller's concern
    if mode == OutputMode::Human && !engine.is_empty() {
        print!("Delete all {} task(s)? [y/N] ", engine.len());
        io::stdout().flush()?;

        let answer = lines.next().transpose()?.unwrap_or_default();
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let removed = engine.clear_all();
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "success": true,
                "removed": removed,
            })
        );
    } else {
        println!("Removed {removed} task(s).");
    }

    Ok(())
}

fn exists(engine: &TaskListEngine, content: &str, mode: OutputMode) {
    let exists = engine.content_exists(content);
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "content": content,
                "exists": exists,
            })
        );
    } else if exists {
        println!("Already on the list: {content}");
    } else {
        println!("Not on the list: {content}");
    }
}

fn report_error(error: &ParseError, mode: OutputMode) {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "success": false,
                "error": error.to_string(),
            })
        );
    } else {
        println!("{error}");
    }
}

fn not_found(verb: &str, id: TaskId, mode: OutputMode) {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "success": false,
                "id": id.value(),
                "error": format!("task not found: #{id}"),
            })
        );
    } else {
        println!("Task not found: #{id} (nothing to {verb})");
    }
}

fn help(mode: OutputMode) {
    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "commands": ["add", "list", "toggle", "delete", "clear", "exists", "help", "quit"],
            })
        );
        return;
    }

    println!("Commands:");
    println!("  add <text>     Add a task (also: a)");
    println!("  list           Show all tasks (also: ls, l)");
    println!("  toggle <id>    Flip a task's completion (also: check, t)");
    println!("  delete <id>    Remove a task (also: rm, d)");
    println!("  clear          Remove every task (asks first)");
    println!("  exists <text>  Check whether a task is already on the list");
    println!("  help           Show this summary (also: h, ?)");
    println!("  quit           End the session (also: exit, q)");
}
