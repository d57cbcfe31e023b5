//! Validation helper functions for user input
//!
//! This module turns raw prompt answers into list positions and statuses.

use crate::todo::{TaskStatus, TodoError};

/// Parse a 1-based list number typed by the user
///
/// Surrounding whitespace is ignored. Negative numbers and zero parse but
/// are out of range.
///
/// # Arguments
/// * `input` - Raw prompt answer
/// * `len` - Current length of the list
///
/// # Returns
/// The 0-based position, or `NotANumber` / `InvalidIndex`
pub fn parse_index(input: &str, len: usize) -> Result<usize, TodoError> {
    let number: i64 = input
        .trim()
        .parse()
        .map_err(|_| TodoError::NotANumber(input.to_string()))?;

    match usize::try_from(number) {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(TodoError::InvalidIndex(number)),
    }
}

/// Parse a new status typed by the user
///
/// The input is lower-cased and must then be exactly `pending` or `completed`.
///
/// # Returns
/// The canonical status, or `InvalidStatusValue`
pub fn parse_status(input: &str) -> Result<TaskStatus, TodoError> {
    match TaskStatus::from(input.to_lowercase()) {
        TaskStatus::Other(_) => Err(TodoError::InvalidStatusValue(input.to_string())),
        canonical => Ok(canonical),
    }
}
