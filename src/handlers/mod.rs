//! Menu command handlers for the TODO app
//!
//! Each command is implemented on `TodoApp` in its own file.

pub mod add;
pub mod delete;
pub mod update;
pub mod view;
