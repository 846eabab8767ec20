//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. In JSON mode every
//! response is a single line, so a scripted session can be parsed one
//! object at a time.

use colored::Colorize;
use serde::Serialize;

use crate::config::UiConfig;
use crate::models::Task;

/// Output mode for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One task as reported to callers
#[derive(Debug, Clone, Serialize)]
pub struct TaskInfo {
    /// Task id
    pub id: u64,
    /// Task content
    pub content: String,
    /// Whether the task is completed
    pub completed: bool,
    /// When the task was created (RFC 3339 in JSON)
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Task> for TaskInfo {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.value(),
            content: task.content.clone(),
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Number of tasks on the list
    pub total: usize,
    /// The tasks in insertion order
    pub tasks: Vec<TaskInfo>,
    /// strftime format for the human creation-time column
    #[serde(skip_serializing)]
    time_format: String,
}

impl TaskListResult {
    /// Build a list result from an engine snapshot
    #[must_use]
    pub fn new(snapshot: &[Task], ui: &UiConfig) -> Self {
        Self {
            total: snapshot.len(),
            tasks: snapshot.iter().map(TaskInfo::from).collect(),
            time_format: ui.time_format.clone(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.tasks.is_empty() {
            println!("No tasks yet. Add one with: add <text>");
            return;
        }

        for t in &self.tasks {
            let checkbox = if t.completed {
                "[x]".green()
            } else {
                "[ ]".normal()
            };
            let content = if t.completed {
                t.content.strikethrough().dimmed()
            } else {
                t.content.normal()
            };
            let created = t.created_at.format(&self.time_format);
            println!(
                "  {} {}  {}  {}",
                checkbox,
                format!("#{}", t.id).cyan(),
                content,
                format!("(added {created})").dimmed()
            );
        }
        println!("\n{} task(s)", self.total);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string(self).unwrap_or_default());
    }
}
