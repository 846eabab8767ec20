//! Data models for taskdeck
//!
//! Core abstractions:
//! - Task: a single to-do item with content, completion state, and creation time
//! - `TaskId`: opaque identifier issued by the engine, stable for the task's lifetime

pub mod task;

pub use task::{Task, TaskId};
