//! In-memory task store.
//!
//! This module provides the `Database` struct that owns every task for the
//! lifetime of a session. Tasks are addressed by their 1-based position, the
//! same numbering the table shows.

use log::{debug, warn};

use crate::task::{FieldValue, Task};

/// Failure of an index-based store operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task number {index} is outside 1-{len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered collection of tasks.
#[derive(Debug, Default)]
pub struct Database {
    tasks: Vec<Task>,
}

impl Database {
    pub fn new() -> Self {
        Database::default()
    }

    /// Append a task. A task without description lines is dropped silently.
    ///
    /// Returns `true` when the task was stored.
    pub fn add(&mut self, task: Task) -> bool {
        if task.lines.is_empty() {
            debug!("discarding task with no description lines");
            return false;
        }
        self.tasks.push(task);
        debug!("stored task {}", self.tasks.len());
        true
    }

    /// Replace one field of the task at `index`, leaving the others untouched.
    ///
    /// An empty description is refused and the current lines are kept.
    pub fn edit(&mut self, index: usize, value: FieldValue) -> Result<(), StoreError> {
        let len = self.tasks.len();
        let task = self
            .slot(index)
            .and_then(|i| self.tasks.get_mut(i))
            .ok_or(StoreError::IndexOutOfRange { index, len })?;

        debug!("editing {:?} of task {}", value.field(), index);
        match value {
            FieldValue::Priority(priority) => task.priority = priority,
            FieldValue::Date(date) => task.date = date,
            FieldValue::Time(time) => task.time = time,
            FieldValue::Lines(lines) if lines.is_empty() => {
                warn!("empty description for task {index}, keeping the previous one");
            }
            FieldValue::Lines(lines) => task.lines = lines,
        }
        Ok(())
    }

    /// Remove the task at `index`; later tasks move up by one.
    pub fn delete(&mut self, index: usize) -> Result<Task, StoreError> {
        let len = self.tasks.len();
        let i = self
            .slot(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        debug!("deleting task {index}");
        Ok(self.tasks.remove(i))
    }

    /// Get a task by its 1-based number.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.slot(index).and_then(|i| self.tasks.get(i))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Translate a 1-based number into a vector position.
    fn slot(&self, index: usize) -> Option<usize> {
        (1..=self.tasks.len()).contains(&index).then(|| index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use chrono::{NaiveDate, NaiveTime};

    fn task(line: &str) -> Task {
        Task::new(
            vec![line.to_string()],
            Priority::Normal,
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
    }

    fn db_with(lines: &[&str]) -> Database {
        let mut db = Database::new();
        for line in lines {
            assert!(db.add(task(line)));
        }
        db
    }

    #[test]
    fn test_add_appends_in_order() {
        let db = db_with(&["first", "second"]);
        assert_eq!(db.len(), 2);
        assert_eq!(db.get(1).unwrap().lines, vec!["first"]);
        assert_eq!(db.get(2).unwrap().lines, vec!["second"]);
    }

    #[test]
    fn test_add_without_lines_is_discarded() {
        let mut db = Database::new();
        let mut empty = task("x");
        empty.lines.clear();
        assert!(!db.add(empty));
        assert!(db.is_empty());
    }

    #[test]
    fn test_delete_shifts_later_tasks() {
        let mut db = db_with(&["a", "b", "c"]);
        let removed = db.delete(2).unwrap();
        assert_eq!(removed.lines, vec!["b"]);
        assert_eq!(db.len(), 2);
        assert_eq!(db.get(2).unwrap().lines, vec!["c"]);
        assert!(db.get(3).is_none());
    }

    #[test]
    fn test_index_bounds() {
        let mut db = db_with(&["a"]);
        assert_eq!(
            db.delete(0),
            Err(StoreError::IndexOutOfRange { index: 0, len: 1 })
        );
        assert_eq!(
            db.edit(2, FieldValue::Priority(Priority::Low)),
            Err(StoreError::IndexOutOfRange { index: 2, len: 1 })
        );
        assert!(db.get(0).is_none());
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_edit_changes_only_one_field() {
        let mut db = db_with(&["a", "b"]);
        let before = db.get(1).unwrap().clone();
        let new_date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        db.edit(1, FieldValue::Date(new_date)).unwrap();

        let after = db.get(1).unwrap();
        assert_eq!(after.date, new_date);
        assert_eq!(after.lines, before.lines);
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.time, before.time);
        assert_eq!(db.get(2).unwrap(), &task("b"));
    }

    #[test]
    fn test_edit_each_field() {
        let mut db = db_with(&["a"]);
        let time = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
        db.edit(1, FieldValue::Priority(Priority::Critical)).unwrap();
        db.edit(1, FieldValue::Time(time)).unwrap();
        db.edit(1, FieldValue::Lines(vec!["x".into(), "y".into()])).unwrap();

        let t = db.get(1).unwrap();
        assert_eq!(t.priority, Priority::Critical);
        assert_eq!(t.time, time);
        assert_eq!(t.lines, vec!["x", "y"]);
    }

    #[test]
    fn test_edit_keeps_lines_when_replacement_is_empty() {
        let mut db = db_with(&["keep me"]);
        db.edit(1, FieldValue::Lines(Vec::new())).unwrap();
        assert_eq!(db.get(1).unwrap().lines, vec!["keep me"]);
    }
}
