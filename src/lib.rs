//! TODO list manager and product link scraper
//!
//! This library backs two independent command-line tools:
//!
//! - `todo`: an interactive TODO list kept in memory and stored as a JSON
//!   array in a single file. The file is read once at startup and written
//!   once, when the user chooses to exit.
//! - `scrape`: fetches one page, collects the anchors carrying a fixed class,
//!   and writes the complete ones to a JSON file and a CSV file.
//!
//! # Architecture
//!
//! The TODO side follows a 3-layer layout:
//! - **Console Layer**: `TodoApp` and the `handlers` - menu loop and prompts
//! - **Domain Layer**: `todo` module - task records and the ordered list
//! - **Persistence Layer**: `storage` module - JSON file load/save
//!
//! The scraper lives entirely in the `scrape` module.
//!
//! # Example
//!
//! ```no_run
//! use todo_scrape::{Storage, TodoApp};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let stdin = std::io::stdin();
//!     let mut app = TodoApp::new(Storage::new("todos.txt"), stdin.lock(), std::io::stdout())?;
//!     app.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod formatting;
pub mod handlers;
pub mod scrape;
pub mod storage;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use app::{DEFAULT_TODO_FILE, MenuChoice, TodoApp};
pub use storage::{Storage, StorageError};
pub use todo::{TaskList, TaskRecord, TaskStatus, TodoError, UpdateField};
