use serde::{Deserialize, Serialize};

use super::error::TodoError;
use super::task::{TaskRecord, UpdateField};
use crate::validation;

/// The ordered TODO list
///
/// Position is the only identifier a record has. Positions are contiguous,
/// so removing a record renumbers everything after it; an index read from
/// the user is only meaningful against the list as it was last displayed.
///
/// Serialized as a bare JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<TaskRecord>,
}

impl TaskList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.tasks.iter()
    }

    /// Get a record by 0-based position
    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.tasks.get(index)
    }

    /// Get a record by 0-based position, reporting an out-of-range position
    ///
    /// # Errors
    /// `TodoError::InvalidIndex` (carrying the 1-based number) if out of range
    pub fn record(&self, index: usize) -> Result<&TaskRecord, TodoError> {
        self.tasks
            .get(index)
            .ok_or(TodoError::InvalidIndex(display_number(index)))
    }

    /// Append a new pending task with no due date
    ///
    /// # Returns
    /// A reference to the appended record
    pub fn add(&mut self, task: impl Into<String>) -> &TaskRecord {
        self.tasks.push(TaskRecord::new(task));
        &self.tasks[self.tasks.len() - 1]
    }

    /// Remove the record at a 0-based position
    ///
    /// The relative order of the remaining records is preserved.
    ///
    /// # Errors
    /// `TodoError::InvalidIndex` (carrying the 1-based number) if out of range
    pub fn remove(&mut self, index: usize) -> Result<TaskRecord, TodoError> {
        if index >= self.tasks.len() {
            return Err(TodoError::InvalidIndex(display_number(index)));
        }
        Ok(self.tasks.remove(index))
    }

    /// Overwrite one field of the record at a 0-based position
    ///
    /// # Arguments
    /// * `index` - 0-based position
    /// * `field` - Field chosen in the update sub-menu
    /// * `value` - New value as typed. Task text and due date are stored
    ///   as-is; status is lower-cased and must be `pending` or `completed`.
    ///
    /// # Errors
    /// `InvalidIndex` if out of range, `InvalidStatusValue` for a
    /// non-canonical status. The record is unchanged on error.
    pub fn update(
        &mut self,
        index: usize,
        field: UpdateField,
        value: &str,
    ) -> Result<&TaskRecord, TodoError> {
        let record = self
            .tasks
            .get_mut(index)
            .ok_or(TodoError::InvalidIndex(display_number(index)))?;

        match field {
            UpdateField::Task => record.task = value.to_string(),
            UpdateField::Status => record.status = validation::parse_status(value)?,
            UpdateField::DueDate => record.due_date = value.to_string(),
        }

        Ok(&*record)
    }
}

fn display_number(index: usize) -> i64 {
    i64::try_from(index).map_or(i64::MAX, |i| i.saturating_add(1))
}

impl From<Vec<TaskRecord>> for TaskList {
    fn from(tasks: Vec<TaskRecord>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskRecord;
    type IntoIter = std::slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
