//! Task-list engine - owns the canonical task collection
//!
//! This is pure business logic with no I/O. The engine enforces the list
//! invariants (unique ids, no duplicate content, insertion order) and
//! reports structured outcomes rather than silently failing; callers decide
//! how to render or react to each outcome.

use crate::models::{Task, TaskId};

/// Why an add was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddRejection {
    /// Submission had no content (empty or whitespace-only)
    #[error("task has no content")]
    EmptyContent,

    /// A task with identical content is already on the list
    #[error("task already added")]
    DuplicateContent,
}

/// Outcome of [`TaskListEngine::add_task`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// The task was appended to the list
    Created(Task),
    /// The submission was rejected; the list is unchanged
    Rejected(AddRejection),
}

/// Outcome of [`TaskListEngine::toggle_completion`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ToggleOutcome {
    /// The task's completion flag was flipped
    Updated(Task),
    /// No task with the given id exists; the list is unchanged
    NotFound,
}

/// Outcome of [`TaskListEngine::delete_task`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum DeleteOutcome {
    /// The task was removed from the list
    Deleted(Task),
    /// No task with the given id exists; the list is unchanged
    NotFound,
}

/// The task-list engine
///
/// Owns an ordered collection of tasks for the lifetime of a session.
/// All mutation goes through [`add_task`](Self::add_task),
/// [`toggle_completion`](Self::toggle_completion),
/// [`delete_task`](Self::delete_task), and [`clear_all`](Self::clear_all);
/// reads are served from [`snapshot`](Self::snapshot) and the query
/// methods. Mutating operations take `&mut self`, so access is serialized
/// by ownership.
#[derive(Debug, Default)]
pub struct TaskListEngine {
    tasks: Vec<Task>,
    // Monotonic; ids are never reissued, even after deletions
    next_id: u64,
}

impl TaskListEngine {
    /// Create an empty engine
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a task with the given content
    ///
    /// Content is taken literally (no trimming before storage), but a
    /// submission that is empty or whitespace-only is rejected. A
    /// submission whose content exactly matches an existing task is
    /// rejected rather than merged.
    pub fn add_task(&mut self, content: &str) -> AddOutcome {
        if content.trim().is_empty() {
            return AddOutcome::Rejected(AddRejection::EmptyContent);
        }
        if self.content_exists(content) {
            return AddOutcome::Rejected(AddRejection::DuplicateContent);
        }

        let id = self.fresh_id();
        let task = Task::new(id, content.to_string());
        self.tasks.push(task.clone());
        log::debug!("added task {id}: {content}");

        AddOutcome::Created(task)
    }

    /// Flip the completion flag of the task with the given id
    ///
    /// Never changes list length or order. Completion is reversible;
    /// toggling twice returns the task to its prior state.
    pub fn toggle_completion(&mut self, id: TaskId) -> ToggleOutcome {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                ToggleOutcome::Updated(task.clone())
            },
            None => ToggleOutcome::NotFound,
        }
    }

    /// Remove the task with the given id
    ///
    /// Removal is by identity, not content; the order of the remaining
    /// tasks is unchanged. A stale or unknown id reports `NotFound`
    /// rather than a silent success.
    pub fn delete_task(&mut self, id: TaskId) -> DeleteOutcome {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => DeleteOutcome::Deleted(self.tasks.remove(index)),
            None => DeleteOutcome::NotFound,
        }
    }

    /// Remove every task, returning how many were removed
    ///
    /// Idempotent: clearing an already-empty list removes 0 tasks.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        removed
    }

    /// Whether any task's content exactly matches the given string
    ///
    /// Case-sensitive exact match, the same check `add_task` applies.
    /// Exposed so a caller can warn about a duplicate before submission.
    #[must_use]
    pub fn content_exists(&self, content: &str) -> bool {
        self.tasks.iter().any(|t| t.content == content)
    }

    /// The task with the given id, if present
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// A point-in-time copy of the list in insertion order
    ///
    /// The copy is detached from the engine; mutating it has no effect on
    /// engine state.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Number of tasks currently on the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn fresh_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
