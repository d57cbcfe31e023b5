//! Failures of menu operations
//!
//! Every variant is reported inline to the user and leaves the task list
//! unchanged. The `Display` text is the message shown on the console.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TodoError {
    /// The entered index is not an integer
    #[error("Please enter a number.")]
    NotANumber(String),

    /// The entered index is outside `1..=len`
    #[error("Invalid number. Enter one of the numbers shown in the list.")]
    InvalidIndex(i64),

    /// The entered status is neither `pending` nor `completed`
    #[error("Invalid status. Enter 'pending' or 'completed'.")]
    InvalidStatusValue(String),

    /// The update sub-menu choice is not 1, 2 or 3
    #[error("Invalid choice.")]
    InvalidFieldChoice(String),

    /// Standard input reached end of file while waiting for a line
    #[error("input closed")]
    InputClosed,
}
