use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TodoError;

/// Text shown for a record whose `task` key was missing on load
pub const UNKNOWN_TASK: &str = "unknown task";

/// Status stored for a record whose `status` key was missing on load
pub const UNKNOWN_STATUS: &str = "unknown";

/// Task status
///
/// Only `pending` and `completed` can be set through the update flow.
/// Any other string found in loaded data is kept verbatim in `Other` so it
/// survives a load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Not done yet (the status of every newly added task)
    Pending,
    /// Done
    Completed,
    /// Unrecognized value preserved from storage
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Other(raw) => raw.as_str(),
        }
    }

    /// Check if this is one of the two statuses the update flow accepts
    pub fn is_canonical(&self) -> bool {
        !matches!(self, TaskStatus::Other(_))
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => TaskStatus::Pending,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Other(raw),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            canonical => canonical.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_task() -> String {
    UNKNOWN_TASK.to_string()
}

fn default_status() -> TaskStatus {
    TaskStatus::Other(UNKNOWN_STATUS.to_string())
}

/// One entry of the TODO list
///
/// Missing keys in stored data fall back to defaults instead of failing
/// the whole load: `task` becomes "unknown task", `status` becomes the raw
/// value "unknown" and `due_date` becomes empty (no due date).
/// The defaults are real values, so the next save writes them to the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Free-text description
    #[serde(default = "default_task")]
    pub task: String,
    /// Current status
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    /// Due date as typed by the user; empty means no due date.
    /// The format is not validated.
    #[serde(default)]
    pub due_date: String,
}

impl TaskRecord {
    /// Create a new pending task with no due date
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            status: TaskStatus::Pending,
            due_date: String::new(),
        }
    }

    pub fn has_due_date(&self) -> bool {
        !self.due_date.is_empty()
    }
}

/// Field selected in the update sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    /// 1: task text
    Task,
    /// 2: status
    Status,
    /// 3: due date
    DueDate,
}

impl FromStr for UpdateField {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(UpdateField::Task),
            "2" => Ok(UpdateField::Status),
            "3" => Ok(UpdateField::DueDate),
            _ => Err(TodoError::InvalidFieldChoice(s.to_string())),
        }
    }
}
