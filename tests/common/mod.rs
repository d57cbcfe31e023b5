//! Common test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;
use todo_scrape::{Storage, TaskList, TaskRecord, TaskStatus, TodoApp};

/// Path to a TODO file inside a fresh temporary directory
///
/// The file itself does not exist yet.
pub fn get_test_path() -> (PathBuf, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.txt");
    (path, dir)
}

/// Write raw content to the TODO file before a session starts
pub fn seed_file(path: &PathBuf, content: &str) {
    fs::write(path, content).unwrap();
}

/// Seed the TODO file with tasks named after `names`, all pending
pub fn seed_tasks(path: &PathBuf, names: &[&str]) {
    let tasks = TaskList::from(
        names
            .iter()
            .map(|name| TaskRecord::new(*name))
            .collect::<Vec<_>>(),
    );
    Storage::new(path).save(&tasks).unwrap();
}

/// Create a test record with all fields
pub fn create_test_task(task: &str, status: TaskStatus, due_date: &str) -> TaskRecord {
    TaskRecord {
        task: task.to_string(),
        status,
        due_date: due_date.to_string(),
    }
}

/// Run a whole session against the file at `path` with scripted input
///
/// # Returns
/// Everything written to the console and the in-memory list at the end
pub fn run_session(path: &PathBuf, input: &str) -> (String, TaskList) {
    let mut app = TodoApp::new(
        Storage::new(path),
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    )
    .unwrap();
    app.run().unwrap();
    let tasks = app.tasks().clone();
    let output = String::from_utf8(app.into_output()).unwrap();
    (output, tasks)
}

/// Task texts of a list in order
pub fn task_names(tasks: &TaskList) -> Vec<String> {
    tasks.iter().map(|t| t.task.clone()).collect()
}
