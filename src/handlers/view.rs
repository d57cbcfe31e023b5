//! View handler for the TODO app

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::TodoApp;

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Show the whole list, numbered from 1.
    pub fn handle_view(&mut self) -> Result<()> {
        self.write_list()
    }
}
