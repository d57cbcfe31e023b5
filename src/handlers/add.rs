//! Add handler for the TODO app

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::TodoApp;

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Ask for the task text and append it as a pending task with no due date.
    pub fn handle_add(&mut self) -> Result<()> {
        let task = self.prompt("Enter a new TODO: ")?;
        let added = self.tasks.add(task);
        writeln!(self.out, "'{}' added.", added.task)?;
        Ok(())
    }
}
