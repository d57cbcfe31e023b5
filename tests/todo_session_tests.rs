//! Interactive session tests
mod common;

use common::*;
use todo_scrape::{Storage, TaskStatus};

#[test]
fn test_add_then_view_shows_single_incomplete_line() {
    let (path, _dir) = get_test_path();

    let (output, tasks) = run_session(&path, "1\nbuy milk\n2\n5\n");

    assert!(output.contains("'buy milk' added."));
    let lines: Vec<&str> = output.lines().filter(|l| l.contains("buy milk") && l.contains('[')).collect();
    assert_eq!(lines, vec!["1. [incomplete] buy milk"]);
    assert!(!output.contains("(due:"));
    assert_eq!(task_names(&tasks), vec!["buy milk"]);
}

#[test]
fn test_startup_shows_loaded_list() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["write report"]);

    let (output, _) = run_session(&path, "5\n");

    assert!(output.contains("Loaded TODO list from"));
    assert!(output.contains("Starting the TODO app."));
    assert!(output.contains("1. [incomplete] write report"));
}

#[test]
fn test_view_empty_list() {
    let (path, _dir) = get_test_path();

    let (output, _) = run_session(&path, "2\n5\n");

    assert!(output.contains("No TODOs."));
}

#[test]
fn test_delete_middle_keeps_order() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a", "b", "c"]);

    let (output, tasks) = run_session(&path, "3\n2\n5\n");

    assert!(output.contains("'b' deleted."));
    assert_eq!(task_names(&tasks), vec!["a", "c"]);

    let saved = Storage::new(&path).load().unwrap();
    assert_eq!(task_names(&saved), vec!["a", "c"]);
}

#[test]
fn test_delete_renumbers_list() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a", "b", "c"]);

    let (output, tasks) = run_session(&path, "3\n1\n2\n5\n");

    assert!(output.contains("1. [incomplete] b"));
    assert!(output.contains("2. [incomplete] c"));
    assert_eq!(task_names(&tasks), vec!["b", "c"]);
}

#[test]
fn test_delete_not_a_number() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a"]);

    let (output, tasks) = run_session(&path, "3\nfirst\n5\n");

    assert!(output.contains("Please enter a number."));
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_delete_out_of_range() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a", "b"]);

    for answer in ["0", "3", "-1"] {
        let (output, tasks) = run_session(&path, &format!("3\n{answer}\n"));
        assert!(output.contains("Invalid number."), "answer {answer}");
        assert_eq!(tasks.len(), 2);
    }
}

#[test]
fn test_delete_on_empty_list() {
    let (path, _dir) = get_test_path();

    let (output, _) = run_session(&path, "3\n5\n");

    assert!(output.contains("There are no TODOs to delete."));
    assert!(!output.contains("Enter the number of the TODO to delete"));
}

#[test]
fn test_update_task_text() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["draft"]);

    let (output, tasks) = run_session(&path, "4\n1\n1\nfinal version\n5\n");

    assert!(output.contains("Current TODO: 'draft'"));
    assert!(output.contains("Task updated to 'final version'."));
    assert_eq!(task_names(&tasks), vec!["final version"]);
}

#[test]
fn test_update_status_case_insensitive() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a"]);

    let (output, tasks) = run_session(&path, "4\n1\n2\nCompleted\n2\n5\n");

    assert!(output.contains("Status updated to 'completed'."));
    assert!(output.contains("1. [✔] a"));
    assert_eq!(tasks.get(0).unwrap().status, TaskStatus::Completed);
}

#[test]
fn test_update_invalid_status_is_rejected() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a"]);

    let (output, tasks) = run_session(&path, "4\n1\n2\ndone\n5\n");

    assert!(output.contains("Invalid status. Enter 'pending' or 'completed'."));
    assert_eq!(tasks.get(0).unwrap().status, TaskStatus::Pending);
}

#[test]
fn test_update_due_date_accepts_any_text() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a"]);

    let (output, tasks) = run_session(&path, "4\n1\n3\n2025-02-30\n2\n5\n");

    assert!(output.contains("Due date updated to '2025-02-30'."));
    assert!(output.contains("1. [incomplete] a (due: 2025-02-30)"));
    assert_eq!(tasks.get(0).unwrap().due_date, "2025-02-30");
}

#[test]
fn test_update_blank_due_date_clears_it() {
    let (path, _dir) = get_test_path();
    seed_file(
        &path,
        r#"[{"task": "a", "status": "pending", "due_date": "2025-01-01"}]"#,
    );

    let (_, tasks) = run_session(&path, "4\n1\n3\n\n5\n");

    assert_eq!(tasks.get(0).unwrap().due_date, "");
}

#[test]
fn test_update_invalid_field_choice() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a"]);

    let (output, tasks) = run_session(&path, "4\n1\n4\n5\n");

    assert!(output.contains("Invalid choice."));
    assert_eq!(tasks.get(0).unwrap(), &create_test_task("a", TaskStatus::Pending, ""));
}

#[test]
fn test_update_bad_index() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a"]);

    let (output, _) = run_session(&path, "4\nx\n4\n2\n5\n");

    assert!(output.contains("Please enter a number."));
    assert!(output.contains("Invalid number."));
    assert!(!output.contains("Current TODO"));
}

#[test]
fn test_update_on_empty_list() {
    let (path, _dir) = get_test_path();

    let (output, _) = run_session(&path, "4\n5\n");

    assert!(output.contains("There are no TODOs to update."));
}

#[test]
fn test_option_six_points_to_update() {
    let (path, _dir) = get_test_path();

    let (output, _) = run_session(&path, "6\n5\n");

    assert!(output.contains("Use update (4) to change a TODO's status."));
}

#[test]
fn test_unrecognized_menu_choice() {
    let (path, _dir) = get_test_path();

    let (output, tasks) = run_session(&path, "7\nadd\n5\n");

    assert_eq!(
        output
            .matches("Invalid choice. Enter one of 1, 2, 3, 4, 5, 6.")
            .count(),
        2
    );
    assert!(tasks.is_empty());
}

#[test]
fn test_exit_saves_and_reports() {
    let (path, _dir) = get_test_path();

    let (output, _) = run_session(&path, "1\nbuy milk\n5\n");

    assert!(output.contains("Saved TODO list to"));
    assert!(output.contains("Exiting the TODO app."));
    let saved = Storage::new(&path).load().unwrap();
    assert_eq!(task_names(&saved), vec!["buy milk"]);
}

#[test]
fn test_end_of_input_does_not_save() {
    let (path, _dir) = get_test_path();

    let (output, tasks) = run_session(&path, "1\nbuy milk\n");

    assert_eq!(tasks.len(), 1);
    assert!(!output.contains("Saved TODO list"));
    assert!(!path.exists());
}

#[test]
fn test_end_of_input_inside_prompt() {
    let (path, _dir) = get_test_path();
    seed_tasks(&path, &["a"]);

    let (_, tasks) = run_session(&path, "3\n");

    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_failed_save_still_exits() {
    let (path, _dir) = get_test_path();
    let unwritable = path.join("missing-dir").join("todos.txt");

    let (output, _) = run_session(&unwritable, "1\nx\n5\n");

    assert!(output.contains("Error while saving TODOs"));
    assert!(output.contains("Exiting the TODO app."));
}

#[test]
fn test_windows_line_endings_in_input() {
    let (path, _dir) = get_test_path();

    let (_, tasks) = run_session(&path, "1\r\nbuy milk\r\n5\r\n");

    assert_eq!(task_names(&tasks), vec!["buy milk"]);
}
