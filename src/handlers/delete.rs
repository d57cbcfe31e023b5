//! Delete handler for the TODO app

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::TodoApp;
use crate::validation;

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Show the list, ask for a number and remove that TODO.
    ///
    /// A non-numeric or out-of-range answer is reported and nothing is removed.
    pub fn handle_delete(&mut self) -> Result<()> {
        if self.tasks.is_empty() {
            writeln!(self.out, "There are no TODOs to delete.")?;
            return Ok(());
        }

        self.write_list()?;
        let answer = self.prompt("Enter the number of the TODO to delete: ")?;

        let removed = match validation::parse_index(&answer, self.tasks.len())
            .and_then(|index| self.tasks.remove(index))
        {
            Ok(removed) => removed,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };

        writeln!(self.out, "'{}' deleted.", removed.task)?;
        Ok(())
    }
}
