//! Formatting helper functions for the TODO list
//!
//! This module contains the display logic used by the view command and by
//! delete/update before they ask for a number.

use crate::todo::{TaskList, TaskRecord, TaskStatus};

pub const LIST_HEADER: &str = "--- TODO list ---";
pub const LIST_FOOTER: &str = "-----------------";
pub const EMPTY_LIST: &str = "No TODOs.";

pub const PENDING_MARKER: &str = "incomplete";
pub const COMPLETED_MARKER: &str = "✔";

/// Marker shown between brackets for a status
///
/// Unrecognized statuses are shown as their raw value.
pub fn status_marker(status: &TaskStatus) -> &str {
    match status {
        TaskStatus::Pending => PENDING_MARKER,
        TaskStatus::Completed => COMPLETED_MARKER,
        TaskStatus::Other(raw) => raw.as_str(),
    }
}

/// Format one record as `N. [marker] task (due: date)`
///
/// # Arguments
/// * `number` - 1-based display number
/// * `record` - Record to format
pub fn format_task_line(number: usize, record: &TaskRecord) -> String {
    let mut line = format!(
        "{}. [{}] {}",
        number,
        status_marker(&record.status),
        record.task
    );
    if record.has_due_date() {
        line.push_str(&format!(" (due: {})", record.due_date));
    }
    line
}

/// Format the whole list, numbered from 1, between a header and a footer
pub fn format_task_list(tasks: &TaskList) -> String {
    let mut result = format!("{}\n", LIST_HEADER);
    if tasks.is_empty() {
        result.push_str(EMPTY_LIST);
        result.push('\n');
    } else {
        for (i, record) in tasks.iter().enumerate() {
            result.push_str(&format_task_line(i + 1, record));
            result.push('\n');
        }
    }
    result.push_str(LIST_FOOTER);
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_line_without_due_date() {
        let record = TaskRecord::new("buy milk");
        assert_eq!(format_task_line(1, &record), "1. [incomplete] buy milk");
    }

    #[test]
    fn test_completed_line_with_due_date() {
        let mut record = TaskRecord::new("file taxes");
        record.status = TaskStatus::Completed;
        record.due_date = "2025-03-15".to_string();
        assert_eq!(
            format_task_line(2, &record),
            "2. [✔] file taxes (due: 2025-03-15)"
        );
    }

    #[test]
    fn test_unknown_status_is_shown_raw() {
        let mut record = TaskRecord::new("x");
        record.status = TaskStatus::Other("blocked".to_string());
        assert_eq!(format_task_line(3, &record), "3. [blocked] x");
    }

    #[test]
    fn test_empty_list() {
        let text = format_task_list(&TaskList::new());
        assert_eq!(text, format!("{LIST_HEADER}\n{EMPTY_LIST}\n{LIST_FOOTER}\n"));
    }

    #[test]
    fn test_list_is_numbered_from_one() {
        let mut tasks = TaskList::new();
        tasks.add("a");
        tasks.add("b");
        let text = format_task_list(&tasks);
        assert!(text.contains("1. [incomplete] a\n"));
        assert!(text.contains("2. [incomplete] b\n"));
        assert!(!text.contains(EMPTY_LIST));
    }
}
