//! TODO domain models
//!
//! This module contains the task record type and the ordered task list the
//! interactive store works on. It is split into submodules:
//! - `task`: a single record, its status and the updatable fields
//! - `task_list`: the ordered sequence addressed by 1-based display position
//! - `error`: user-facing failures of menu operations

mod error;
mod task;
mod task_list;

// Re-export all public types
pub use error::TodoError;
pub use task::{TaskRecord, TaskStatus, UpdateField};
pub use task_list::TaskList;
