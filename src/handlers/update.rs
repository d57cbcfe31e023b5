//! Update handler for the TODO app

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::TodoApp;
use crate::todo::{TaskRecord, UpdateField};
use crate::validation;

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Show the list, ask for a number, then overwrite one field of that TODO.
    ///
    /// Fields: 1 task text, 2 status (`pending`/`completed` only),
    /// 3 due date (any text, empty clears it).
    pub fn handle_update(&mut self) -> Result<()> {
        if self.tasks.is_empty() {
            writeln!(self.out, "There are no TODOs to update.")?;
            return Ok(());
        }

        self.write_list()?;
        let answer = self.prompt("Enter the number of the TODO to update: ")?;
        let index = match validation::parse_index(&answer, self.tasks.len()) {
            Ok(index) => index,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };

        let current = match self.tasks.record(index) {
            Ok(record) => record.clone(),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };

        writeln!(self.out, "Current TODO: '{}'", current.task)?;
        writeln!(self.out, "Choose the field to update:")?;
        writeln!(self.out, "1. Task")?;
        writeln!(self.out, "2. Status (completed/incomplete)")?;
        writeln!(self.out, "3. Due date")?;
        let choice = self.prompt("Choose (1/2/3): ")?;

        let field = match choice.parse::<UpdateField>() {
            Ok(field) => field,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };

        let value = self.prompt(&field_prompt(field, &current))?;
        match self.tasks.update(index, field, &value) {
            Ok(updated) => {
                let message = match field {
                    UpdateField::Task => format!("Task updated to '{}'.", updated.task),
                    UpdateField::Status => format!("Status updated to '{}'.", updated.status),
                    UpdateField::DueDate => format!("Due date updated to '{}'.", updated.due_date),
                };
                writeln!(self.out, "{}", message)?;
            }
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(())
    }
}

fn field_prompt(field: UpdateField, current: &TaskRecord) -> String {
    match field {
        UpdateField::Task => format!("Enter the new task (current: '{}'): ", current.task),
        UpdateField::Status => format!(
            "Enter the new status (pending: incomplete / completed: done) (current: '{}'): ",
            current.status
        ),
        UpdateField::DueDate => format!(
            "Enter the new due date (YYYY-MM-DD, blank for none) (current: '{}'): ",
            current.due_date
        ),
    }
}
