//! Interactive TODO session
//!
//! `TodoApp` owns the in-memory list, the storage it came from, and the
//! console it talks to. The menu loop is single-threaded and blocks on each
//! prompt. The list is written back only by the exit command.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::formatting;
use crate::storage::{Storage, StorageError};
use crate::todo::{TaskList, TodoError};

/// Default storage file name (the content is JSON)
pub const DEFAULT_TODO_FILE: &str = "todos.txt";

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Update,
    SaveAndExit,
    /// Kept in the menu for familiarity; status changes go through `Update`
    ChangeStatus,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::View),
            "3" => Ok(MenuChoice::Delete),
            "4" => Ok(MenuChoice::Update),
            "5" => Ok(MenuChoice::SaveAndExit),
            "6" => Ok(MenuChoice::ChangeStatus),
            _ => Err(format!("Invalid choice '{}'", s)),
        }
    }
}

const MENU: &str = "\n--- Menu ---
1. Add a TODO
2. Show TODOs
3. Delete a TODO
4. Update a TODO
5. Save and exit
6. (Optional) Change a TODO's status";

/// Interactive TODO list manager
///
/// Generic over its console so the binary can hand it locked stdin/stdout
/// and tests can hand it byte buffers.
pub struct TodoApp<R, W> {
    pub(crate) tasks: TaskList,
    pub(crate) storage: Storage,
    input: R,
    pub(crate) out: W,
}

impl<R: BufRead, W: Write> TodoApp<R, W> {
    /// Load the list from storage and report how that went
    ///
    /// A missing, malformed or unreadable file is reported with its own
    /// message and the session starts with an empty list.
    pub fn new(storage: Storage, input: R, mut out: W) -> Result<Self> {
        let tasks = match storage.load() {
            Ok(tasks) => {
                writeln!(out, "Loaded TODO list from {}.", storage.path().display())?;
                tasks
            }
            Err(StorageError::FileMissing { path }) => {
                writeln!(
                    out,
                    "Info: {} not found. Starting a new TODO list.",
                    path.display()
                )?;
                TaskList::new()
            }
            Err(e @ StorageError::MalformedStorage { .. }) => {
                tracing::warn!("{}", e);
                writeln!(
                    out,
                    "Warning: {} is not valid JSON. Starting a new TODO list.",
                    storage.path().display()
                )?;
                TaskList::new()
            }
            Err(e @ StorageError::StorageReadError { .. }) => {
                tracing::error!("{}", e);
                writeln!(out, "Error while loading TODOs: {}", e)?;
                TaskList::new()
            }
        };

        Ok(Self::with_tasks(tasks, storage, input, out))
    }

    /// Start a session on an already loaded list
    pub fn with_tasks(tasks: TaskList, storage: Storage, input: R, out: W) -> Self {
        Self {
            tasks,
            storage,
            input,
            out,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Consume the session and hand back the console writer
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu loop until the exit command or end of input
    ///
    /// End of input ends the session without saving.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "\nStarting the TODO app.")?;
        self.handle_view()?;

        loop {
            match self.turn() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(e) if matches!(e.downcast_ref::<TodoError>(), Some(TodoError::InputClosed)) => {
                    tracing::warn!("input closed, exiting without saving");
                    writeln!(self.out)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu and dispatch one command
    ///
    /// # Returns
    /// `false` once the session should end
    fn turn(&mut self) -> Result<bool> {
        writeln!(self.out, "{}", MENU)?;
        let choice = self.prompt("Choose an option (1/2/3/4/5/6): ")?;

        match choice.parse::<MenuChoice>() {
            Ok(MenuChoice::Add) => self.handle_add()?,
            Ok(MenuChoice::View) => self.handle_view()?,
            Ok(MenuChoice::Delete) => self.handle_delete()?,
            Ok(MenuChoice::Update) => self.handle_update()?,
            Ok(MenuChoice::SaveAndExit) => {
                self.handle_exit()?;
                return Ok(false);
            }
            Ok(MenuChoice::ChangeStatus) => {
                writeln!(self.out, "Use update (4) to change a TODO's status.")?;
            }
            Err(e) => {
                tracing::debug!("{}", e);
                writeln!(
                    self.out,
                    "Invalid choice. Enter one of 1, 2, 3, 4, 5, 6."
                )?;
            }
        }
        Ok(true)
    }

    /// Persist the list and say goodbye
    ///
    /// A failed save is reported; the session ends either way.
    fn handle_exit(&mut self) -> Result<()> {
        match self.storage.save(&self.tasks) {
            Ok(()) => writeln!(
                self.out,
                "Saved TODO list to {}.",
                self.storage.path().display()
            )?,
            Err(e) => {
                tracing::error!("save failed: {:#}", e);
                writeln!(self.out, "Error while saving TODOs: {:#}", e)?;
            }
        }
        writeln!(self.out, "Exiting the TODO app.")?;
        Ok(())
    }

    /// Render the list through the console writer
    pub(crate) fn write_list(&mut self) -> Result<()> {
        write!(self.out, "{}", formatting::format_task_list(&self.tasks))?;
        Ok(())
    }

    /// Print a prompt and read one line
    ///
    /// The trailing line terminator is removed; nothing else is trimmed.
    ///
    /// # Errors
    /// `TodoError::InputClosed` at end of input
    pub(crate) fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TodoError::InputClosed.into());
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
